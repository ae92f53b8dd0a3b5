//! Search bar component renderer.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box starting at `row`.
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ / Buscar ferramentas...  │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// The placeholder is drawn in `placeholder_fg`, a real query in `text_normal`.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    canvas.move_to(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    let search_text: String = format!(" / {}", search.text).chars().take(inner_width).collect();
    let text_color = if search.is_placeholder {
        &theme.colors.placeholder_fg
    } else {
        &theme.colors.text_normal
    };

    canvas.move_to(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put("│");
    canvas.put(&Theme::fg(text_color));
    canvas.put(&search_text);
    canvas.pad(inner_width.saturating_sub(text_width(&search_text)));
    canvas.put(&border);
    canvas.put("│");
    canvas.put(Theme::reset());

    canvas.move_to(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    row + 3
}
