//! Pick-Datentypen: rohe Strahl-Schnittpunkte und aufgelöste Kandidaten.

use glam::Vec3;

use super::node_path::NodePath;

/// Toleranz (Welteinheiten), innerhalb derer koinzidente Schnittpunkte als
/// derselbe Pick-Punkt gelten (Kanten/Vertices in konkaven Flächenbereichen).
pub const PICK_COINCIDENCE_TOLERANCE: f32 = 0.01;

/// Art eines Geometrie-Subelements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Fläche
    Face,
    /// Kante
    Edge,
    /// Eckpunkt
    Vertex,
}

impl ElementKind {
    /// Pick-Priorität: spezifischere Elemente gewinnen bei koinzidenten
    /// Schnittpunkten (Vertex > Edge > Face; fehlendes Detail zählt 0).
    pub fn priority(detail: Option<&ElementDetail>) -> u8 {
        match detail.map(|d| d.kind) {
            None => 0,
            Some(ElementKind::Face) => 1,
            Some(ElementKind::Edge) => 2,
            Some(ElementKind::Vertex) => 3,
        }
    }
}

/// Subelement-Beschreibung eines Schnittpunkts (Art + Index im Shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementDetail {
    /// Elementart
    pub kind: ElementKind,
    /// Index innerhalb des Shapes (Face3 → 3)
    pub index: u32,
}

/// Identität eines Dokumentobjekts, immer per Name aufgelöst.
///
/// Es werden bewusst keine Handles über Event-Grenzen hinweg gehalten:
/// der Szenengraph kann zwischen Events asynchron neu aufgebaut werden.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Name des Dokuments
    pub document: String,
    /// Name des Objekts im Dokument
    pub name: String,
}

impl ObjectRef {
    /// Erstellt eine Objekt-Referenz aus Dokument- und Objektname.
    pub fn new(document: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            name: name.into(),
        }
    }
}

/// Roher Strahl-Schnittpunkt, wie ihn der Szenengraph pro Event liefert.
///
/// Die Liste ist vom Kollaborateur bereits nach Strahltiefe geordnet.
#[derive(Debug, Clone, PartialEq)]
pub struct PickIntersection {
    /// Schnittpunkt in Weltkoordinaten
    pub point: Vec3,
    /// Getroffenes Subelement (None: kein Detail am Schnittpunkt)
    pub detail: Option<ElementDetail>,
    /// Konkreter Szenen-Pfad des getroffenen Shapes
    pub path: NodePath,
}

/// Aufgelöster, gefilterter Pick-Kandidat.
///
/// `object == None` ist der Platzhalter für "Klick auf nicht selektierbare
/// Geometrie" — unterscheidbar von "gar nichts getroffen" (leere Liste).
#[derive(Debug, Clone, PartialEq)]
pub struct PickCandidate {
    /// Schnittpunkt in Weltkoordinaten
    pub point: Vec3,
    /// Getroffenes Subelement
    pub detail: Option<ElementDetail>,
    /// Element-Referenz innerhalb des Objekts (leer = ganzes Objekt)
    pub element: String,
    /// Besitzendes Dokumentobjekt (None = Platzhalter)
    pub object: Option<ObjectRef>,
    /// Konkreter Szenen-Pfad der Instanzierung
    pub path: NodePath,
}

impl PickCandidate {
    /// Platzhalter-Kandidat für nicht selektierbare Treffer.
    pub fn placeholder(hit: &PickIntersection) -> Self {
        Self {
            point: hit.point,
            detail: hit.detail,
            element: String::new(),
            object: None,
            path: hit.path.clone(),
        }
    }

    /// Pick-Priorität des Kandidaten.
    pub fn priority(&self) -> u8 {
        ElementKind::priority(self.detail.as_ref())
    }
}
