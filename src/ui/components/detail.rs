//! Detail panel renderer.
//!
//! Replaces the grid while an app is open:
//!
//! ```text
//! │ ██ Slack
//! │ https://assets.example.com/slack.svg
//! │
//! │ Integre Slack com centenas de outras ferramentas através da Pluga.
//! │ Automatize tarefas e economize tempo ...
//! │
//! │ [o] Ver integrações disponíveis  https://pluga.co/ferramentas/slack
//! │
//! │ Últimas ferramentas visualizadas
//! │ [r 1] ● Trello
//! ```

use crate::ui::helpers::{self, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailPanel, RECENTS_TITLE};

/// Width of the `│ ` gutter on the left of every panel line.
const GUTTER: usize = 2;

/// Renders the panel from `row` down to `last_row` inclusive.
///
/// # Returns
///
/// The next available row position.
pub fn render_detail(
    canvas: &mut Canvas,
    row: usize,
    last_row: usize,
    detail: &DetailPanel,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut lines: Vec<String> = Vec::new();
    let text_width = cols.saturating_sub(GUTTER + 1);
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);

    lines.push(format!(
        "{}██ {normal}{}{}{}",
        Theme::fg(&detail.color),
        Theme::bold(),
        detail.name,
        Theme::reset()
    ));
    lines.push(format!("{dim}{}{}", detail.icon, Theme::reset()));
    lines.push(String::new());

    for line in helpers::wrap(&detail.description, text_width) {
        lines.push(format!("{normal}{line}{}", Theme::reset()));
    }
    lines.push(String::new());

    lines.push(format!(
        "{}[o]{} {}{}{}{}  {dim}{}{}",
        Theme::fg(&theme.colors.card_index_fg),
        Theme::reset(),
        Theme::fg(&theme.colors.link_fg),
        Theme::underline(),
        detail.link_label,
        Theme::reset(),
        detail.link,
        Theme::reset()
    ));

    if !detail.recents.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}{normal}{RECENTS_TITLE}{}", Theme::bold(), Theme::reset()));
        for recent in &detail.recents {
            lines.push(format!(
                "{}[r {}]{} {}●{} {normal}{}{}",
                Theme::fg(&theme.colors.card_index_fg),
                recent.position,
                Theme::reset(),
                Theme::fg(&recent.color),
                Theme::reset(),
                recent.name,
                Theme::reset()
            ));
        }
    }

    let gutter = format!("{}│{} ", Theme::fg(&theme.colors.detail_border), Theme::reset());
    let mut current_row = row;
    for line in &lines {
        if current_row > last_row {
            break;
        }
        canvas.move_to(current_row, 1);
        canvas.put(&gutter);
        canvas.put(line);
        current_row += 1;
    }

    current_row
}
