//! Schmale Kollaborateur-Schnittstellen zum Szenengraph und Dokumentmodell.
//!
//! Der Selektionskern redet nie direkt mit dem Render-Engine-Node-Modell
//! oder dem CAD-Kernel. Stattdessen: Capability-Abfragen über `ViewEntity`
//! (ist selektierbar? unterstützt das Selektionsmodell?) und Auflösung per
//! Name über `SceneModel`. Auflösungsfehler sind nie fatal — Szenengraphen
//! werden asynchron zu anhängigen Events neu aufgebaut.

use super::node_path::NodePath;
use super::pick::{ElementDetail, ObjectRef, PickIntersection};

/// Laufzeit-Identität einer View-Entität innerhalb des Szenenmodells.
///
/// Nur innerhalb eines Event-Callbacks gültig; über Event-Grenzen hinweg
/// wird immer per `ObjectRef`-Name neu aufgelöst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Darstellungsstil einer Entität bei Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStyle {
    /// Farb-Overlay auf dem betroffenen Teilbaum (Standard)
    #[default]
    Overlay,
    /// Nur Bounding-Box einblenden, kein Overlay
    BoundingBox,
}

/// Aufgelöster Detail-Pfad eines Subelements innerhalb einer Entität.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPath {
    /// Szenen-Pfad von der Entitätswurzel zum Subelement-Node
    pub path: NodePath,
    /// Subelement-Beschreibung (None: Pfad zeigt auf ein ganzes Sub-Objekt)
    pub detail: Option<ElementDetail>,
}

/// View-seitige Repräsentation eines Dokumentobjekts.
///
/// Capability-Abfragen statt Typhierarchie: der Kern fragt nur nach dem,
/// was er braucht.
pub trait ViewEntity {
    /// Besitzendes Dokumentobjekt (None: reiner Darstellungs-Node ohne
    /// Dokumentbezug, z.B. Ursprungs-Achsen).
    fn object(&self) -> Option<&ObjectRef>;

    /// Gibt zurück, ob die Entität aktuell selektierbar ist.
    fn is_selectable(&self) -> bool;

    /// Gibt zurück, ob die Entität das elementbasierte Selektionsmodell
    /// unterstützt (alte Darstellungs-Nodes tun das nicht).
    fn supports_selection_model(&self) -> bool;

    /// Löst einen Schnittpunkt in eine Element-Referenz innerhalb des
    /// (möglicherweise verschachtelten) Objektgraphen auf.
    fn element_picked(&self, hit: &PickIntersection) -> Option<String>;

    /// Berechnet den Szenen-Pfad (und das Detail) zu einer
    /// Element-Referenz. `None`: Referenz nicht (mehr) auflösbar.
    fn detail_path(&self, element: &str) -> Option<DetailPath>;

    /// Wurzelpfad der Entität im Szenengraph.
    fn root_path(&self) -> NodePath;

    /// Darstellungsstil bei Selektion.
    fn selection_style(&self) -> SelectionStyle {
        SelectionStyle::Overlay
    }

    /// Direkte Kind-Entitäten (für Gruppen-Objekte).
    fn children(&self) -> Vec<EntityId> {
        Vec::new()
    }
}

/// Szenenmodell: Pfad- und Namensauflösung über alle View-Entitäten.
///
/// Enthält auch die Dokumentmodell-Auflösung (Name → lebendes Objekt);
/// eine separate Ein-Methoden-Schnittstelle lohnt sich nicht.
pub trait SceneModel {
    /// Löst einen konkreten Szenen-Pfad zur besitzenden Entität auf
    /// (erste Entität von der Wurzel her). `None`: Pfad veraltet oder
    /// gehört keiner Entität.
    fn entity_by_path(&self, path: &NodePath) -> Option<EntityId>;

    /// Zugriff auf eine Entität. `None`: ID nicht (mehr) gültig.
    fn entity(&self, id: EntityId) -> Option<&dyn ViewEntity>;

    /// Löst (Dokumentname, Objektname) zur View-Entität auf.
    fn entity_for_object(&self, document: &str, name: &str) -> Option<EntityId>;

    /// Alle Entitäten eines Dokuments (für Clear/Set-Resync).
    fn entities_of_document(&self, document: &str) -> Vec<EntityId>;

    /// Namen aller offenen Dokumente (für globales Clear).
    fn documents(&self) -> Vec<String>;

    /// Schaltet die Bounding-Box-Darstellung einer Entität um
    /// (Bounding-Box-Selektionsstil).
    fn set_bounding_box(&mut self, id: EntityId, visible: bool);
}
