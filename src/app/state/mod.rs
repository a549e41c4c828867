//! Application State — zentrale Datenhaltung des Selektionssubsystems.

mod preselect;
mod selection;
mod ui;
mod viewer_state;

pub use preselect::{Highlight, PreselectState, RepaintMarker};
pub use selection::{
    EntryKey, PreselectEntry, PreselectResult, SelectionEntry, SelectionGate, SelectionState,
};
pub use ui::UiState;
pub use viewer_state::ViewerState;
