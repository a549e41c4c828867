//! Minimale Szenen-Attrappe für die Unit-Tests der Use-Cases.
//!
//! Zwei Boxen unter einer Selektionswurzel plus eine Link-Entität, deren
//! Elemente hierarchisch auf `box1` verweisen. Szenen-Layout:
//!
//! ```text
//! root #1
//!  ├─ box1  #10   (Doc.box1)
//!  ├─ box2  #11   (Doc.box2)
//!  └─ link1 #20   (Doc.link1) ─ verweist auf box1 (#10)
//! ```

use std::collections::HashSet;

use crate::core::{
    DetailPath, ElementDetail, ElementKind, EntityId, NodePath, ObjectRef, PickIntersection,
    SceneModel, SelectionStyle, ViewEntity,
};

/// Eine Test-Entität mit konfigurierbarem Pick-Verhalten.
pub struct TestEntity {
    object: ObjectRef,
    path: NodePath,
    selectable: bool,
    selection_model: bool,
    resolve_details: bool,
    style: SelectionStyle,
    children: Vec<EntityId>,
    /// Präfix der gelieferten Element-Namen ("box1." bei Link-Entitäten)
    element_prefix: String,
    /// Pfad, unter dem Subelemente dieser Entität gerendert werden
    detail_root: NodePath,
}

/// Baut aus einem Subelement-Detail den Element-Namen ("Face3").
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

impl ViewEntity for TestEntity {
    fn object(&self) -> Option<&ObjectRef> {
        Some(&self.object)
    }

    fn is_selectable(&self) -> bool {
        self.selectable
    }

    fn supports_selection_model(&self) -> bool {
        self.selection_model
    }

    fn element_picked(&self, hit: &PickIntersection) -> Option<String> {
        match &hit.detail {
            Some(detail) => Some(format!("{}{}", self.element_prefix, element_name(detail))),
            None => Some(self.element_prefix.clone()),
        }
    }

    fn detail_path(&self, element: &str) -> Option<DetailPath> {
        if !self.resolve_details {
            return None;
        }
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

    fn children(&self) -> Vec<EntityId> {
        self.children.clone()
    }
}

/// Szenen-Attrappe mit fester Topologie und mutierbaren Flags.
pub struct TestScene {
    entities: Vec<TestEntity>,
    bounding_boxes: HashSet<EntityId>,
}

impl TestScene {
    pub fn new() -> Self {
        let box1 = TestEntity {
            object: ObjectRef::new("Doc", "box1"),
            path: NodePath::from(vec![1, 10]),
            selectable: true,
            selection_model: true,
            resolve_details: true,
            style: SelectionStyle::Overlay,
            children: Vec::new(),
            element_prefix: String::new(),
            detail_root: NodePath::from(vec![1, 10]),
        };
        let box2 = TestEntity {
            object: ObjectRef::new("Doc", "box2"),
            path: NodePath::from(vec![1, 11]),
            selectable: true,
            selection_model: true,
            resolve_details: true,
            style: SelectionStyle::Overlay,
            children: Vec::new(),
            element_prefix: String::new(),
            detail_root: NodePath::from(vec![1, 11]),
        };
        let link1 = TestEntity {
            object: ObjectRef::new("Doc", "link1"),
            path: NodePath::from(vec![1, 20]),
            selectable: true,
            selection_model: true,
            resolve_details: true,
            style: SelectionStyle::Overlay,
            children: vec![EntityId(0)],
            element_prefix: "box1.".to_string(),
            detail_root: NodePath::from(vec![1, 20, 10]),
        };
        Self {
            entities: vec![box1, box2, link1],
            bounding_boxes: HashSet::new(),
        }
    }

    pub fn box_entity(&self) -> EntityId {
        EntityId(0)
    }

    pub fn box2_entity(&self) -> EntityId {
        EntityId(1)
    }

    pub fn link_entity(&self) -> EntityId {
        EntityId(2)
    }

    pub fn set_selectable(&mut self, id: EntityId, selectable: bool) {
        self.entities[id.0 as usize].selectable = selectable;
    }

    pub fn set_selection_model(&mut self, id: EntityId, supported: bool) {
        self.entities[id.0 as usize].selection_model = supported;
    }

    pub fn set_detail_resolution(&mut self, id: EntityId, resolve: bool) {
        self.entities[id.0 as usize].resolve_details = resolve;
    }

    pub fn set_style(&mut self, id: EntityId, style: SelectionStyle) {
        self.entities[id.0 as usize].style = style;
    }

    pub fn has_bounding_box(&self, id: EntityId) -> bool {
        self.bounding_boxes.contains(&id)
    }
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneModel for TestScene {
    fn entity_by_path(&self, path: &NodePath) -> Option<EntityId> {
        // Tiefste Entität, deren Wurzelpfad Präfix des Treffer-Pfads ist.
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
