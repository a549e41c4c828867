//! Render-seitiger Teil der Selektion: Kontext-Stores pro Wurzel,
//! Traversierungs-Stack mit Reentranz-Schutz und der Feedback-Dispatcher.

pub mod context;
pub mod feedback;
pub mod traversal;

pub use context::{ContextKey, ContextRegistry, ContextStore, SelectionContext};
pub use feedback::{apply_highlight, apply_selection, apply_selection_to_root};
pub use feedback::{check_selection_style, Feedback, FeedbackKind};
pub use traversal::{ScopeToken, TraversalStack};
