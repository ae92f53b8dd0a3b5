//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a [`Canvas`] starting at a
//! given row and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: title bar with catalog size and load time
//! - [`search`]: search input box
//! - [`status`]: loading, error and empty messages
//! - [`grid`]: card grid for the current page
//! - [`pagination`]: page selector
//! - [`detail`]: detail panel with recents
//! - [`footer`]: key hints
//!
//! # Layout Modes
//!
//! - [`render_browse_mode`]: Header + Search + Grid/Status + Pagination + Footer
//! - [`render_detail_mode`]: Header + Detail + Footer

mod detail;
mod footer;
mod grid;
mod header;
mod pagination;
mod search;
mod status;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailPanel, UIViewModel};

use detail::render_detail;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use status::render_status;

/// Prompt drawn on the last row, where the user types commands.
const PROMPT: &str = "› ";

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(color));
    canvas.put(&"─".repeat(cols));
    canvas.put(Theme::reset());
    row + 1
}

/// Draws the bottom border, the footer and the prompt, leaving the cursor after
/// the prompt.
fn render_bottom(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(canvas, footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(canvas, footer_row, &vm.footer, theme, cols);

    canvas.move_to(rows, 1);
    canvas.put(&Theme::fg(&theme.colors.card_index_fg));
    canvas.put(PROMPT);
    canvas.put(Theme::reset());
}

/// Renders the browsing layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Grid or Status message]
/// [Pagination]
/// [blank line]
/// [Border]
/// [Footer]
/// [Prompt]
/// ```
pub fn render_browse_mode(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(canvas, current_row, &vm.search_bar, theme, cols);

    let pagination_row = rows.saturating_sub(3);
    if let Some(status) = &vm.status {
        render_status(canvas, current_row, status, theme, cols);
    } else {
        let last_grid_row = pagination_row.saturating_sub(1);
        render_grid(canvas, current_row, last_grid_row, &vm.cards, vm.grid_columns, theme, cols);
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(canvas, pagination_row, pagination, theme, cols);
    }

    render_bottom(canvas, vm, theme, cols, rows);
}

/// Renders the detail layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Detail panel]
/// [Border]
/// [Footer]
/// [Prompt]
/// ```
pub fn render_detail_mode(canvas: &mut Canvas, vm: &UIViewModel, detail: &DetailPanel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);

    let last_detail_row = rows.saturating_sub(3);
    render_detail(canvas, current_row + 1, last_detail_row, detail, theme, cols);

    render_bottom(canvas, vm, theme, cols, rows);
}
