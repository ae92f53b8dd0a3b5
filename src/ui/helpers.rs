//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], an in-memory buffer of text and ANSI
//! escape sequences. The renderer prints the finished frame in one write, and
//! tests can inspect it without a terminal.
//!
//! Widths are counted in characters, not bytes, so accented Portuguese text
//! lines up.

use crate::ui::theme::Theme;

/// Buffer a frame is drawn into.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`, `col` (both 1-indexed).
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends text or an escape sequence.
    pub fn put(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Writes `text` centered on a line of `cols` cells, padding both sides.
    ///
    /// Text wider than the line is cut.
    pub fn centered(&mut self, text: &str, cols: usize) {
        let shown: String = text.chars().take(cols).collect();
        let width = text_width(&shown);
        let left = cols.saturating_sub(width) / 2;
        self.pad(left);
        self.put(&shown);
        self.pad(cols.saturating_sub(left + width));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text` in cells, one per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Writes `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with an exclusive end; ranges
/// past the end of the text are clipped. After each highlighted run the style
/// in `restore` is re-applied.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) {
    if ranges.is_empty() {
        canvas.put(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        canvas.put(&chars[current_pos..start].iter().collect::<String>());

        canvas.put(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.put(&Theme::bg(&theme.colors.match_highlight_bg));
        canvas.put(&chars[start..end].iter().collect::<String>());
        canvas.put(Theme::reset());
        canvas.put(restore);

        current_pos = end;
    }

    canvas.put(&chars[current_pos..].iter().collect::<String>());
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than a line are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();

        let needed = if line.is_empty() {
            text_width(&word)
        } else {
            text_width(&line) + 1 + text_width(&word)
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
