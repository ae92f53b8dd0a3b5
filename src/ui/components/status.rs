//! Status message renderer (loading, error, empty results).

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusMessage};

/// Renders the message centered at `row` with its hint below.
///
/// # Returns
///
/// The next available row position.
pub fn render_status(canvas: &mut Canvas, row: usize, status: &StatusMessage, theme: &Theme, cols: usize) -> usize {
    let color = match status.kind {
        StatusKind::Error => &theme.colors.error_fg,
        StatusKind::Loading | StatusKind::Empty => &theme.colors.status_fg,
    };

    canvas.move_to(row + 1, 1);
    canvas.put(&Theme::fg(color));
    canvas.centered(&status.message, cols);
    canvas.put(Theme::reset());

    let Some(hint) = &status.hint else {
        return row + 2;
    };

    canvas.move_to(row + 2, 1);
    canvas.put(Theme::dim());
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.centered(hint, cols);
    canvas.put(Theme::reset());
    row + 3
}
