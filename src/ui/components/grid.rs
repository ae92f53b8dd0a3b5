//! Card grid renderer.
//!
//! Cards are laid out row-major in `columns` equal-width columns:
//!
//! ```text
//! [ 1] ● Slack                 [ 2] ● Trello
//! [ 3] ● Gmail                 [ 4] ● Google Sheets
//! ```
//!
//! The bullet takes the app's own color; the number is what the user types to
//! open the card.

use crate::ui::helpers::{self, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Renders `cards` from `row` down to `last_row` inclusive.
///
/// Cards that do not fit above `last_row` are left out.
///
/// # Returns
///
/// The next available row position.
pub fn render_grid(
    canvas: &mut Canvas,
    row: usize,
    last_row: usize,
    cards: &[CardItem],
    columns: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let columns = columns.max(1);
    let card_width = cols / columns;
    let mut current_row = row;

    for line in cards.chunks(columns) {
        if current_row > last_row {
            tracing::debug!(hidden = cards.len(), "grid truncated to terminal height");
            break;
        }
        for (column, card) in line.iter().enumerate() {
            canvas.move_to(current_row, column * card_width + 1);
            render_card(canvas, card, theme);
        }
        current_row += 1;
    }

    current_row
}

fn render_card(canvas: &mut Canvas, card: &CardItem, theme: &Theme) {
    canvas.put(&Theme::fg(&theme.colors.card_index_fg));
    canvas.put(&format!("[{:>2}] ", card.position));
    canvas.put(&Theme::fg(&card.color));
    canvas.put("● ");

    let mut style = Theme::fg(&theme.colors.text_normal);
    if card.is_selected {
        style.push_str(Theme::bold());
        style.push_str(Theme::underline());
    }
    canvas.put(&style);
    helpers::render_highlighted_text(canvas, &card.name, &card.highlight_ranges, theme, &style);
    canvas.put(Theme::reset());
}
