//! Application Layer: Controller, Zustand, Use-Cases und Bus-Handler.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod state;
pub mod use_cases;

pub use controller::{HighlightMode, SelectController};
pub use events::SelectionChange;
pub use state::ViewerState;
