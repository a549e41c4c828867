//! Querschnittliches: Optionen und Statuszeilen-Formatierung.

pub mod options;
pub mod status;

pub use options::SelectOptions;
