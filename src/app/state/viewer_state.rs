//! Gesamtzustand eines Viewers — zentrale Datenhaltung.

use crate::shared::SelectOptions;

use super::{PreselectState, SelectionState, UiState};

/// Hauptzustand des Selektionssubsystems eines Viewers.
///
/// Ein `ViewerState` pro Top-Level-Szenenwurzel; geteilte Geometrie unter
/// mehreren Wurzeln teilt sich diesen Zustand nicht.
#[derive(Default)]
pub struct ViewerState {
    /// Selektions-Bus: selektierte Einträge + Preselektion (die Wahrheit)
    pub selection: SelectionState,
    /// Hover-Zustand (visuelle Hervorhebung)
    pub preselect: PreselectState,
    /// Statuszeile und Redraw-Anforderung
    pub ui: UiState,
    /// Laufzeit-Optionen (Farben, Toleranzen, Schalter)
    pub options: SelectOptions,
}

impl ViewerState {
    /// Erstellt einen neuen, leeren Viewer-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self {
            selection: SelectionState::new(),
            preselect: PreselectState::new(),
            ui: UiState::new(),
            options: SelectOptions::default(),
        }
    }
}
