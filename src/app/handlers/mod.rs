//! Handler für Bus-Notifikationen.

pub mod sync;

pub use sync::apply_change;
