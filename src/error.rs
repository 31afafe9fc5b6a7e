use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A block that cannot be split is taller than the writable height of an empty page.
    BlockTooTall {
        required: f32,
        available: f32,
    },
    InvalidColor(String),
    EmptyDocument,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "Invalid report JSON: {err}"),
            Self::BlockTooTall {
                required,
                available,
            } => write!(
                f,
                "Block of height {required:.1}pt does not fit on an empty page ({available:.1}pt writable)"
            ),
            Self::InvalidColor(value) => {
                write!(f, "Invalid colour '{value}', expected #RRGGBB")
            }
            Self::EmptyDocument => write!(f, "Document has no pages to render"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::BlockTooTall { .. } | Self::InvalidColor(_) | Self::EmptyDocument => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
