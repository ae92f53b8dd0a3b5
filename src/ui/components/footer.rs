//! Footer component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the key hints at `row`, centered and dimmed.
///
/// Hints wider than the terminal are cut rather than wrapped.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.centered(&footer.keybindings, cols);
    canvas.put(Theme::reset());
    row + 1
}
