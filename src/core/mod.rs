//! Core-Domänentypen: Node-Pfade, Element-Referenzen, Pick-Daten und die
//! Kollaborateur-Schnittstellen zu Szenengraph und Dokumentmodell.

pub mod element_ref;
pub mod node_path;
pub mod pick;
pub mod scene;

pub use node_path::{NodeId, NodePath};
pub use pick::{
    ElementDetail, ElementKind, ObjectRef, PickCandidate, PickIntersection,
    PICK_COINCIDENCE_TOLERANCE,
};
pub use scene::{DetailPath, EntityId, SceneModel, SelectionStyle, ViewEntity};
