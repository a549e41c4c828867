//! Select-Controller für zentrale Event-Verarbeitung.
//!
//! Einziger Eintrittspunkt des Subsystems: Pointer-Events vom Viewer,
//! Notifikationen vom Selektions-Bus und Moduswechsel laufen hier
//! zusammen. Alles synchron und single-threaded auf dem Event-Thread.

use log::{debug, info};

use super::handlers;
use super::state::{RepaintMarker, ViewerState};
use super::use_cases::{resolve_picked_list, set_highlight, set_selection};
use crate::core::{PickIntersection, SceneModel};
use crate::render::ContextRegistry;
use crate::shared::SelectOptions;

/// Hover-Hervorhebungsmodus des Viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightMode {
    /// Folgt der globalen Option
    #[default]
    Auto,
    /// Immer an, unabhängig von der Option
    On,
    /// Immer aus
    Off,
}

/// Orchestriert Viewer-Events und Use-Cases auf dem ViewerState.
pub struct SelectController {
    highlight_mode: HighlightMode,
    selection_mode_on: bool,
    /// Verarbeitet dieser Viewer Events selbst (Master-Viewer) oder
    /// reicht er sie nur unverändert weiter (Spiegel-Ansichten)?
    selection_role: bool,
}

impl Default for SelectController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectController {
    /// Erstellt einen neuen Controller mit Standard-Modi.
    pub fn new() -> Self {
        Self {
            highlight_mode: HighlightMode::Auto,
            selection_mode_on: true,
            selection_role: true,
        }
    }

    /// Setzt den Hover-Modus.
    pub fn set_highlight_mode(&mut self, mode: HighlightMode) {
        self.highlight_mode = mode;
    }

    /// Schaltet die Klick-Selektion des Viewers an oder aus.
    pub fn set_selection_mode(&mut self, on: bool) {
        self.selection_mode_on = on;
    }

    /// Legt fest, ob dieser Viewer Klicks selbst konsumiert.
    pub fn set_selection_role(&mut self, role: bool) {
        self.selection_role = role;
    }

    fn highlight_active(&self, state: &ViewerState) -> bool {
        match self.highlight_mode {
            HighlightMode::Auto => state.options.highlight_enabled,
            HighlightMode::On => true,
            HighlightMode::Off => false,
        }
    }

    fn selection_active(&self, state: &ViewerState) -> bool {
        self.selection_mode_on && state.options.selection_enabled
    }

    /// Verarbeitet eine Pointer-Bewegung mit roher Trefferliste.
    ///
    /// Gibt zurück, ob danach etwas hervorgehoben ist.
    pub fn handle_pointer_move(
        &mut self,
        state: &mut ViewerState,
        scene: &mut dyn SceneModel,
        registry: &mut ContextRegistry,
        hits: &[PickIntersection],
    ) -> bool {
        if !self.selection_role || !self.highlight_active(state) {
            return false;
        }

        let candidates = resolve_picked_list(scene, hits, true);
        let highlighted = set_highlight(state, registry, candidates.first());

        if !highlighted && state.preselect.marker == RepaintMarker::PendingCursorReset {
            // Aufgeschobene Cursor-Updates brauchen noch einen Frame.
            state.ui.request_redraw();
            state.preselect.marker = RepaintMarker::Idle;
        }

        self.process_changes(state, scene, registry);
        highlighted
    }

    /// Verarbeitet einen Maustasten-Release mit roher Trefferliste.
    ///
    /// Gibt zurück, ob der Klick konsumiert wurde.
    pub fn handle_button_release(
        &mut self,
        state: &mut ViewerState,
        scene: &mut dyn SceneModel,
        registry: &mut ContextRegistry,
        hits: &[PickIntersection],
        ctrl_down: bool,
    ) -> bool {
        if !self.selection_role || !self.selection_active(state) {
            return false;
        }

        let single_pick = !state.options.want_picked_list;
        let candidates = resolve_picked_list(scene, hits, single_pick);

        let handled = if candidates.is_empty() {
            // Klick ins Leere: lässt die Selektion stehen und konsumiert
            // nichts (Kamera-Navigation bleibt möglich).
            false
        } else {
            set_selection(state, scene, registry, &candidates, ctrl_down)
        };

        self.process_changes(state, scene, registry);
        handled
    }

    /// Verarbeitet eine externe Bus-Notifikation.
    pub fn handle_change(
        &mut self,
        state: &mut ViewerState,
        scene: &mut dyn SceneModel,
        registry: &mut ContextRegistry,
        change: &crate::app::events::SelectionChange,
    ) {
        handlers::apply_change(state, scene, registry, change);
        self.process_changes(state, scene, registry);
    }

    /// Zieht alle aufgelaufenen Notifikationen nach.
    fn process_changes(
        &mut self,
        state: &mut ViewerState,
        scene: &mut dyn SceneModel,
        registry: &mut ContextRegistry,
    ) {
        // Nachziehen kann neue Notifikationen erzeugen (z.B. SetPreselect
        // beim Hervorheben); die zweite Runde ist immer rein informativ.
        for _ in 0..4 {
            let changes = state.selection.drain_changes();
            if changes.is_empty() {
                break;
            }
            debug!("Resync: {} Notifikationen", changes.len());
            for change in &changes {
                handlers::apply_change(state, scene, registry, change);
            }
        }
    }

    /// Lädt die Optionen von der Standard-Position.
    pub fn load_options(&mut self, state: &mut ViewerState) {
        state.options = SelectOptions::load_from_file(&SelectOptions::config_path());
        info!(
            "Selektion: Hover {}, Klick {}",
            state.options.highlight_enabled, state.options.selection_enabled
        );
    }

    /// Speichert die Optionen an der Standard-Position.
    pub fn save_options(&self, state: &ViewerState) -> anyhow::Result<()> {
        state.options.save_to_file(&SelectOptions::config_path())
    }
}
