//! Hover-Zustand: höchstens eine aktive Hervorhebung pro Szenenwurzel.
//!
//! Kein globaler Singleton — jeder Viewer besitzt seinen eigenen Zustand;
//! die "höchstens eine aktive Hervorhebung"-Semantik gilt pro Instanz.

use crate::core::{ElementDetail, NodePath};

/// Aktuell hervorgehobenes Ziel (visueller Zustand, nicht Bus-Wahrheit).
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// Konkreter Szenen-Pfad der Instanzierung
    pub path: NodePath,
    /// Element-Referenz innerhalb des Objekts
    pub element: String,
    /// Subelement-Detail für den Feedback-Pass
    pub detail: Option<ElementDetail>,
}

/// Repaint-Marker für verzögerte Cursor-Updates.
///
/// Nach einem Hover-Exit muss genau ein Render-Pass laufen, damit der
/// Cursor zurückgesetzt werden kann (ein Gate kann den Verboten-Cursor
/// hinterlassen haben).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepaintMarker {
    /// Hervorhebung aktiv
    Active,
    /// Gerade aufgehoben, Cursor-Reset steht aus
    PendingCursorReset,
    /// Ruhezustand
    #[default]
    Idle,
}

/// Zustand des Preselection-Controllers.
#[derive(Default)]
pub struct PreselectState {
    /// Aktuelle Hervorhebung (None = Idle)
    pub current: Option<Highlight>,
    /// Repaint-Marker
    pub marker: RepaintMarker,
}

impl PreselectState {
    /// Erstellt einen leeren Hover-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob (Pfad, Element) bereits hervorgehoben ist.
    pub fn is_current(&self, path: &NodePath, element: &str) -> bool {
        self.current
            .as_ref()
            .is_some_and(|h| h.path == *path && h.element == element)
    }
}
