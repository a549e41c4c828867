//! Use-Cases: Pick-Auflösung, Hover-Hervorhebung, Klick-Selektion.

pub mod pick;
pub mod preselect;
pub mod select;

pub use pick::resolve_picked_list;
pub use preselect::{clear_highlight, set_highlight};
pub use select::set_selection;
