//! Pagination bar renderer.
//!
//! ```text
//!        ‹ anterior   1 … 4 [5] 6 … 12   próxima ›
//! ```
//!
//! Unavailable arrows are drawn in `page_disabled_fg`; the current page uses
//! `page_current_fg` on `page_current_bg`.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageMarker, PaginationInfo};

const PREVIOUS_LABEL: &str = "‹ anterior";
const NEXT_LABEL: &str = "próxima ›";

/// Renders the bar centered at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(canvas: &mut Canvas, row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let normal = Theme::fg(&theme.colors.text_normal);
    let disabled = Theme::fg(&theme.colors.page_disabled_fg);
    let current = format!(
        "{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.page_current_fg),
        Theme::bg(&theme.colors.page_current_bg)
    );

    let mut segments: Vec<(String, String)> = Vec::with_capacity(info.markers.len() + 2);
    segments.push((
        format!("{PREVIOUS_LABEL}  "),
        if info.has_previous { normal.clone() } else { disabled.clone() },
    ));
    for marker in &info.markers {
        match marker {
            PageMarker::Page { number, is_current: true } => segments.push((format!("[{number}]"), current.clone())),
            PageMarker::Page { number, .. } => segments.push((format!(" {number} "), normal.clone())),
            PageMarker::Gap => segments.push((" … ".to_string(), disabled.clone())),
        }
    }
    segments.push((
        format!("  {NEXT_LABEL}"),
        if info.has_next { normal } else { disabled },
    ));

    let width: usize = segments.iter().map(|(text, _)| text_width(text)).sum();
    let left = cols.saturating_sub(width) / 2;

    canvas.move_to(row, 1);
    canvas.pad(left);
    for (text, style) in &segments {
        canvas.put(style);
        canvas.put(text);
        canvas.put(Theme::reset());
    }

    row + 1
}
