//! Header component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row`, centered, with the subtitle after a dot.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let text = match &header.subtitle {
        Some(subtitle) => format!(" {} · {subtitle} ", header.title),
        None => format!(" {} ", header.title),
    };

    canvas.move_to(row, 1);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.put(&Theme::bg(bg));
    }
    canvas.centered(&text, cols);
    canvas.put(Theme::reset());

    row + 1
}
