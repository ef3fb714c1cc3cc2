//! Greedy line breaking.
//!
//! Text is broken on whitespace and each line is filled with as many words as fit in the
//! column. Explicit newlines always start a new line. Words are never hyphenated: a word wider
//! than the column is placed on a line of its own.

use super::metrics::Face;

/// Text broken into lines for a given column width, face and size.
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    pub line_height: f32,
}

impl WrappedText {
    /// Total height of the block: line count times line height.
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }
}

/// Break `text` into lines no wider than `width` points.
///
/// Text that is empty or only whitespace produces no lines.
pub fn wrap(text: &str, width: f32, face: Face, size: f32) -> WrappedText {
    let line_height = face.line_height(size);
    if text.trim().is_empty() {
        return WrappedText {
            lines: Vec::new(),
            line_height,
        };
    }

    let space = face.text_width(" ", size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_width = face.text_width(word, size);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }

        // Blank paragraphs still take a line.
        lines.push(current);
    }

    WrappedText { lines, line_height }
}

/// Height of `text` wrapped to `width` at `size`.
pub fn measure_height(text: &str, width: f32, face: Face, size: f32) -> f32 {
    wrap(text, width, face, size).height()
}
