//! Gemeinsame Szenen-Fixture für die Integrationstests.
//!
//! Ein Assembly-Dokument mit zwei Boxen und einem Link, der `box1` als
//! geteilte Geometrie erneut instanziert, plus ein zweites Dokument
//! unter einer eigenen Selektionswurzel. Nicht jeder Testlauf nutzt
//! jede Hilfe, daher `allow(dead_code)`:
//!
//! ```text
//! root #1 (Assembly)          root #2 (Sketch)
//!  ├─ box1  #10                └─ pad1 #30
//!  ├─ box2  #11
//!  └─ link1 #20 ── box1-Geometrie als #10 erneut instanziert
//! ```

#![allow(dead_code)]

use std::collections::HashSet;

use cad_scene_select::{
    ContextRegistry, DetailPath, ElementDetail, ElementKind, EntityId, NodeId, NodePath, ObjectRef,
    PickIntersection, SceneModel, SelectionStyle, ViewEntity,
};
use glam::Vec3;

pub struct FixtureEntity {
    object: ObjectRef,
    path: NodePath,
    selectable: bool,
    style: SelectionStyle,
    element_prefix: String,
    detail_root: NodePath,
}

pub struct FixtureScene {
    entities: Vec<FixtureEntity>,
    bounding_boxes: HashSet<EntityId>,
}

pub fn element_name(detail: &ElementDetail) -> String {
    let kind = match detail.kind {
        ElementKind::Face => "Face",
        ElementKind::Edge => "Edge",
        ElementKind::Vertex => "Vertex",
    };
    format!("{}{}", kind, detail.index + 1)
}

fn parse_detail(leaf: &str) -> Option<ElementDetail> {
    let (kind, rest) = if let Some(rest) = leaf.strip_prefix("Face") {
        (ElementKind::Face, rest)
    } else if let Some(rest) = leaf.strip_prefix("Edge") {
        (ElementKind::Edge, rest)
    } else if let Some(rest) = leaf.strip_prefix("Vertex") {
        (ElementKind::Vertex, rest)
    } else {
        return None;
    };
    let index: u32 = rest.parse().ok()?;
    Some(ElementDetail {
        kind,
        index: index.checked_sub(1)?,
    })
}

impl ViewEntity for FixtureEntity {
    fn object(&self) -> Option<&ObjectRef> {
        Some(&self.object)
    }

    fn is_selectable(&self) -> bool {
        self.selectable
    }

    fn supports_selection_model(&self) -> bool {
        true
    }

    fn element_picked(&self, hit: &PickIntersection) -> Option<String> {
        match &hit.detail {
            Some(detail) => Some(format!("{}{}", self.element_prefix, element_name(detail))),
            None => Some(self.element_prefix.clone()),
        }
    }

    fn detail_path(&self, element: &str) -> Option<DetailPath> {
        let leaf = element.strip_prefix(&self.element_prefix).unwrap_or(element);
        Some(DetailPath {
            path: self.detail_root.clone(),
            detail: parse_detail(leaf),
        })
    }

    fn root_path(&self) -> NodePath {
        self.path.clone()
    }

    fn selection_style(&self) -> SelectionStyle {
        self.style
    }
}

impl FixtureScene {
    pub fn new() -> Self {
        let entity = |doc: &str, name: &str, path: Vec<u64>| FixtureEntity {
            object: ObjectRef::new(doc, name),
            path: NodePath::from(path.clone()),
            selectable: true,
            style: SelectionStyle::Overlay,
            element_prefix: String::new(),
            detail_root: NodePath::from(path),
        };
        let mut link1 = entity("Assembly", "link1", vec![1, 20]);
        link1.element_prefix = "box1.".to_string();
        link1.detail_root = NodePath::from(vec![1, 20, 10]);

        Self {
            entities: vec![
                entity("Assembly", "box1", vec![1, 10]),
                entity("Assembly", "box2", vec![1, 11]),
                link1,
                entity("Sketch", "pad1", vec![2, 30]),
            ],
            bounding_boxes: HashSet::new(),
        }
    }

    pub fn box1(&self) -> EntityId {
        EntityId(0)
    }

    pub fn box2(&self) -> EntityId {
        EntityId(1)
    }

    pub fn link1(&self) -> EntityId {
        EntityId(2)
    }

    pub fn pad1(&self) -> EntityId {
        EntityId(3)
    }

    pub fn set_selectable(&mut self, id: EntityId, selectable: bool) {
        self.entities[id.0 as usize].selectable = selectable;
    }

    pub fn set_style(&mut self, id: EntityId, style: SelectionStyle) {
        self.entities[id.0 as usize].style = style;
    }

    pub fn has_bounding_box(&self, id: EntityId) -> bool {
        self.bounding_boxes.contains(&id)
    }
}

impl Default for FixtureScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneModel for FixtureScene {
    fn entity_by_path(&self, path: &NodePath) -> Option<EntityId> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| path.starts_with(&e.path))
            .max_by_key(|(_, e)| e.path.len())
            .map(|(idx, _)| EntityId(idx as u64))
    }

    fn entity(&self, id: EntityId) -> Option<&dyn ViewEntity> {
        self.entities
            .get(id.0 as usize)
            .map(|e| e as &dyn ViewEntity)
    }

    fn entity_for_object(&self, document: &str, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|e| e.object.document == document && e.object.name == name)
            .map(|idx| EntityId(idx as u64))
    }

    fn entities_of_document(&self, document: &str) -> Vec<EntityId> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.object.document == document)
            .map(|(idx, _)| EntityId(idx as u64))
            .collect()
    }

    fn documents(&self) -> Vec<String> {
        let mut docs: Vec<String> = self
            .entities
            .iter()
            .map(|e| e.object.document.clone())
            .collect();
        docs.sort();
        docs.dedup();
        docs
    }

    fn set_bounding_box(&mut self, id: EntityId, visible: bool) {
        if visible {
            self.bounding_boxes.insert(id);
        } else {
            self.bounding_boxes.remove(&id);
        }
    }
}

/// Schaltet Test-Logging ein (`RUST_LOG=debug cargo test -- --nocapture`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Registry mit beiden Dokument-Wurzeln.
pub fn registry() -> ContextRegistry {
    let mut reg = ContextRegistry::new();
    reg.register_root(NodeId(1), false);
    reg.register_root(NodeId(2), false);
    reg
}

/// Roher Treffer auf einem konkreten Pfad.
pub fn hit(path: &[u64], kind: ElementKind, index: u32, point: Vec3) -> PickIntersection {
    PickIntersection {
        point,
        detail: Some(ElementDetail { kind, index }),
        path: NodePath::from(path.to_vec()),
    }
}

/// Treffer auf `Face{n}` im Ursprung.
pub fn face_hit(path: &[u64], n: u32) -> PickIntersection {
    hit(path, ElementKind::Face, n - 1, Vec3::ZERO)
}
