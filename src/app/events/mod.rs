//! Selektions-Notifikationen als reine Daten.
//!
//! Jede Mutation des Selektionszustands stellt eine `SelectionChange` in
//! die Queue; der Controller entnimmt sie und synchronisiert die visuellen
//! Overlays nach. Externe Kollaborateure (Objekt-Dialoge, Skripte) stellen
//! ihre Anfragen über dieselbe Queue ein.

use glam::Vec3;

/// Änderungs-Notifikation des Selektions-Busses.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    /// Eintrag wurde zur Selektion hinzugefügt
    AddSelection {
        /// Dokumentname
        document: String,
        /// Objektname
        object: String,
        /// Element-Referenz (leer = ganzes Objekt)
        element: String,
        /// Klick-Koordinate
        point: Vec3,
    },
    /// Eintrag wurde aus der Selektion entfernt
    RmvSelection {
        /// Dokumentname
        document: String,
        /// Objektname
        object: String,
        /// Element-Referenz
        element: String,
    },
    /// Selektion eines Dokuments wurde als Ganzes ersetzt
    SetSelection {
        /// Dokumentname
        document: String,
    },
    /// Selektion wurde geleert (None = alle Dokumente)
    ClrSelection {
        /// Betroffenes Dokument
        document: Option<String>,
    },
    /// Preselektion wurde im Bus gesetzt (informativ, vom Viewer selbst)
    SetPreselect {
        /// Dokumentname
        document: String,
        /// Objektname
        object: String,
        /// Element-Referenz
        element: String,
        /// Hover-Koordinate
        point: Vec3,
    },
    /// Externer Wunsch, eine Preselektion anzuzeigen (z.B. Hover in
    /// einer Objektliste) — der Viewer soll hervorheben
    SetPreselectSignal {
        /// Dokumentname
        document: String,
        /// Objektname
        object: String,
        /// Element-Referenz
        element: String,
        /// Ziel-Koordinate
        point: Vec3,
    },
    /// Preselektion wurde aufgehoben
    RmvPreselect,
}
