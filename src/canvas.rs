use crate::config::Rgb;
use crate::fonts::FontFace;

/// One drawing operation in page coordinates (points, `y` measured downwards
/// from the top edge). Text `y` is the baseline.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        line_width: f32,
    },
    /// Rectangle with semicircular ends (pill badge, rounded bar).
    FillPill {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        face: FontFace,
        size: f32,
        color: Rgb,
    },
}

impl DrawCommand {
    /// Vertical extent `(top, bottom)` of the mark on the page.
    pub fn vertical_extent(&self) -> (f32, f32) {
        match self {
            DrawCommand::FillRect { y, height, .. }
            | DrawCommand::StrokeRect { y, height, .. }
            | DrawCommand::FillPill { y, height, .. } => (*y, y + height),
            DrawCommand::Text { y, face, size, .. } => {
                (y - face.ascent() * size, y + face.descent() * size)
            }
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub commands: Vec<DrawCommand>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    /// Largest `y` reached by any mark on the page.
    pub fn lowest_mark(&self) -> Option<f32> {
        self.commands
            .iter()
            .map(|c| c.vertical_extent().1)
            .reduce(f32::max)
    }
}

/// Recording surface that accumulates pages of draw commands. Nothing is
/// encoded until the canvas is handed to [`crate::pdf::render`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    pages: Vec<Page>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Appends to the last page, creating the first page if needed.
    pub fn push(&mut self, command: DrawCommand) {
        if self.pages.is_empty() {
            self.add_page();
        }
        if let Some(page) = self.pages.last_mut() {
            page.commands.push(command);
        }
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        for command in commands {
            self.push(command);
        }
    }
}
