use crate::fonts::FontFace;

/// A wrapped line with its measured width.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f32,
}

fn finish_line(current: &mut String, width: f32) -> TextLine {
    TextLine {
        text: std::mem::take(current),
        width,
    }
}

/// Greedy word wrap against the core font metrics.
///
/// Whitespace runs collapse to a single space. A word wider than `max_width`
/// on its own is split at character boundaries so no line overflows; its last
/// piece starts a line that keeps accepting words.
pub fn wrap_lines(text: &str, face: FontFace, font_size: f32, max_width: f32) -> Vec<TextLine> {
    let space_w = face.space_width(font_size);
    let mut lines: Vec<TextLine> = Vec::new();
    let mut current = String::new();
    let mut current_x: f32 = 0.0;

    for word in text.split_whitespace() {
        let ww = face.text_width(word, font_size);

        if ww > max_width {
            if !current.is_empty() {
                lines.push(finish_line(&mut current, current_x));
            }
            let mut pieces = split_long_word(word, face, font_size, max_width);
            let tail = pieces.pop();
            lines.extend(pieces);
            if let Some(tail) = tail {
                current = tail.text;
                current_x = tail.width;
            }
            continue;
        }

        let proposed_x = if current.is_empty() {
            ww
        } else {
            current_x + space_w + ww
        };
        if !current.is_empty() && proposed_x > max_width {
            lines.push(finish_line(&mut current, current_x));
            current_x = ww;
        } else {
            current_x = proposed_x;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(finish_line(&mut current, current_x));
    }
    lines
}

fn split_long_word(word: &str, face: FontFace, font_size: f32, max_width: f32) -> Vec<TextLine> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_w = 0.0f32;
    for ch in word.chars() {
        let cw = face.char_width_1000(ch) * font_size / 1000.0;
        if !piece.is_empty() && piece_w + cw > max_width {
            pieces.push(finish_line(&mut piece, piece_w));
            piece_w = 0.0;
        }
        piece.push(ch);
        piece_w += cw;
    }
    if !piece.is_empty() {
        pieces.push(finish_line(&mut piece, piece_w));
    }
    pieces
}

/// Same as [`wrap_lines`], keeping only the line strings.
pub fn wrap_text(text: &str, face: FontFace, font_size: f32, max_width: f32) -> Vec<String> {
    wrap_lines(text, face, font_size, max_width)
        .into_iter()
        .map(|line| line.text)
        .collect()
}
