//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → one ANSI frame in a [`Canvas`]
//!
//! The frame starts by clearing the screen, so each render fully replaces the
//! previous one.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::Write;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the UI to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn render(state: &AppState, rows: usize, cols: usize) -> std::io::Result<()> {
    let frame = render_to_string(state, rows, cols);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}

/// Renders the UI into a string without touching the terminal.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Chooses the layout: the detail panel when open, the grid otherwise.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();
    canvas.put(CLEAR_SCREEN);

    if let Some(detail) = &vm.detail {
        components::render_detail_mode(&mut canvas, vm, detail, theme, cols, rows);
    } else {
        components::render_browse_mode(&mut canvas, vm, theme, cols, rows);
    }

    canvas.into_string()
}
