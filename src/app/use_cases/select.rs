//! Klick-Selektion.
//!
//! Entscheidet pro Klick zwischen Toggle (Ctrl), Neuselektion und dem
//! Aufstieg in der Element-Hierarchie: wer ein bereits selektiertes
//! Element erneut anklickt, selektiert die nächsthöhere Ebene.

use log::debug;

use crate::app::state::{SelectionEntry, ViewerState};
use crate::core::{element_ref, DetailPath, PickCandidate, SceneModel};
use crate::render::{apply_selection, check_selection_style, ContextRegistry, Feedback, FeedbackKind};
use crate::shared::status;

/// Verarbeitet einen Klick mit aufgelösten Pick-Kandidaten.
///
/// Gibt zurück, ob der Klick konsumiert wurde. Der erste Kandidat ist
/// der Primärtreffer; die übrigen bilden den Batch koinzidenter Treffer
/// (nur bei voller Trefferliste mehr als einer).
pub fn set_selection(
    state: &mut ViewerState,
    scene: &mut dyn SceneModel,
    registry: &mut ContextRegistry,
    candidates: &[PickCandidate],
    ctrl_down: bool,
) -> bool {
    let Some(primary) = candidates.first() else {
        return false;
    };
    let Some(object) = primary.object.clone() else {
        // Platzhalter: Klick auf nicht selektierbare Geometrie.
        return false;
    };
    let Some(entity_id) = scene.entity_for_object(&object.document, &object.name) else {
        debug!("Klick auf verwaistes Objekt {}.{}", object.document, object.name);
        return false;
    };

    let batch: Vec<SelectionEntry> = if candidates.len() > 1 {
        candidates
            .iter()
            .skip(1)
            .filter_map(|c| {
                c.object.as_ref().map(|o| SelectionEntry {
                    object: o.clone(),
                    element: c.element.clone(),
                    point: c.point,
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    if ctrl_down {
        if state
            .selection
            .is_selected(&object.document, &object.name, &primary.element)
        {
            state.selection.rmv_selection(&object, &primary.element, &batch);
        } else {
            state
                .selection
                .add_selection(&object, &primary.element, primary.point, &batch);
        }
        // Overlays zieht der Notifikations-Resync nach.
        return true;
    }

    // Hierarchie-Abgleich: deckt ein bestehender Eintrag das geklickte
    // Element ab, wird eine Ebene aufgestiegen statt neu selektiert.
    let stored = state
        .selection
        .selected_element(&object, &primary.element)
        .map(str::to_string);

    let mut element = primary.element.clone();
    let mut ascended = false;
    let mut parent_path: Option<DetailPath> = None;
    if let Some(stored) = stored {
        if let Some(parent) = element_ref::ascend(&stored) {
            parent_path = scene
                .entity(entity_id)
                .and_then(|e| e.detail_path(&parent));
            element = parent;
            ascended = true;
        }
    }

    state.selection.clear_selection(Some(&object.document));
    let added = state
        .selection
        .add_selection(&object, &element, primary.point, &batch);
    if !added {
        return true;
    }

    if !state.options.highlight_enabled {
        state.ui.status_message = Some(status::select_message(
            &object.document,
            &object.name,
            &element,
            primary.point,
        ));
    }

    let color = state.options.selection_color;
    if ascended {
        // Aufstieg markiert die ganze Ebene; wenn sich die Eltern-Referenz
        // nicht zu einem Pfad auflösen lässt, bleibt der geklickte Pfad
        // das Ziel.
        if check_selection_style(FeedbackKind::All, entity_id, scene) {
            let path = parent_path
                .map(|p| p.path)
                .unwrap_or_else(|| primary.path.clone());
            apply_selection(
                registry,
                &mut state.ui,
                &path,
                &Feedback::new(FeedbackKind::All, color, None),
            );
        }
    } else {
        apply_selection(
            registry,
            &mut state.ui,
            &primary.path,
            &Feedback::new(FeedbackKind::Append, color, primary.detail),
        );
    }
    true
}
