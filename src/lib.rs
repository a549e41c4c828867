//! Interaktive Selektion und Hervorhebung für Szenengraph-Viewer.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

#[cfg(test)]
pub mod test_scene;

pub use app::{HighlightMode, SelectController, SelectionChange, ViewerState};
pub use core::{
    DetailPath, ElementDetail, ElementKind, EntityId, NodeId, NodePath, ObjectRef, PickCandidate,
    PickIntersection, SceneModel, SelectionStyle, ViewEntity,
};
pub use render::{ContextRegistry, SelectionContext, TraversalStack};
pub use shared::SelectOptions;
