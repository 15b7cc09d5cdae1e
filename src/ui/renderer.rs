//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! Output goes to stdout as ANSI escape sequences. The caller owns the
//! terminal: clearing, flushing and cursor visibility happen in the host.

use crate::app::AppState;
use crate::ui::components;

/// Renders the UI for a `rows` x `cols` terminal.
///
/// Returns whether the last row of the collection was drawn, which the host
/// passes to `ListController::on_tail_visible`.
pub fn render(state: &AppState, rows: usize, cols: usize) -> bool {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_layout(&viewmodel, &state.theme, cols, rows);

    viewmodel.tail_visible
}
