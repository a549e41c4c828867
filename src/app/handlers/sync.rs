//! Nachzieh-Synchronisation der visuellen Overlays.
//!
//! Jede Bus-Notifikation wird per Name neu aufgelöst und als Feedback auf
//! die aktuelle Szene angewendet. Dadurch bleiben Overlays auch dann
//! korrekt, wenn die Mutation nicht vom Viewer selbst kam (Skripte,
//! Objekt-Dialoge) oder der Szenengraph zwischenzeitlich neu aufgebaut
//! wurde.

use log::trace;

use crate::app::events::SelectionChange;
use crate::app::state::ViewerState;
use crate::app::use_cases::{clear_highlight, set_highlight};
use crate::core::{EntityId, NodePath, PickCandidate, SceneModel};
use crate::render::{
    apply_selection, apply_selection_to_root, check_selection_style, ContextRegistry, Feedback,
    FeedbackKind,
};

/// Wendet eine einzelne Bus-Notifikation auf die Overlays an.
pub fn apply_change(
    state: &mut ViewerState,
    scene: &mut dyn SceneModel,
    registry: &mut ContextRegistry,
    change: &SelectionChange,
) {
    match change {
        SelectionChange::AddSelection {
            document,
            object,
            element,
            ..
        } => {
            if state.options.selection_enabled {
                let kind = if element.is_empty() {
                    FeedbackKind::All
                } else {
                    FeedbackKind::Append
                };
                apply_to_object(state, scene, registry, document, object, element, kind);
            }
        }
        SelectionChange::RmvSelection {
            document,
            object,
            element,
        } => {
            if state.options.selection_enabled {
                let kind = if element.is_empty() {
                    FeedbackKind::None
                } else {
                    FeedbackKind::Remove
                };
                apply_to_object(state, scene, registry, document, object, element, kind);
            }
        }
        SelectionChange::SetSelection { document } => {
            if state.options.selection_enabled {
                resync_document(state, scene, registry, document);
            }
        }
        SelectionChange::ClrSelection { document } => {
            if state.options.selection_enabled {
                match document {
                    Some(doc) => resync_document(state, scene, registry, doc),
                    None => {
                        for doc in scene.documents() {
                            resync_document(state, scene, registry, &doc);
                        }
                    }
                }
            }
        }
        SelectionChange::SetPreselectSignal {
            document,
            object,
            element,
            point,
        } => {
            if state.options.highlight_enabled {
                let target = resolve_candidate(scene, document, object, element, *point);
                set_highlight(state, registry, target.as_ref());
            }
        }
        SelectionChange::SetPreselect { .. } => {
            // Vom Viewer selbst ausgelöst, Overlay ist schon aktuell.
        }
        SelectionChange::RmvPreselect => {
            // Nur aufheben, wenn der Bus nicht gerade eine neue
            // Preselektion trägt (Wechsel-Hover löst Rmv+Set aus).
            if state.options.highlight_enabled && state.selection.preselect().is_none() {
                clear_highlight(state, registry);
            }
        }
    }
}

/// Löst ein Objekt+Element zum Feedback-Ziel auf und wendet es an.
fn apply_to_object(
    state: &mut ViewerState,
    scene: &mut dyn SceneModel,
    registry: &mut ContextRegistry,
    document: &str,
    object: &str,
    element: &str,
    kind: FeedbackKind,
) {
    let Some(entity_id) = scene.entity_for_object(document, object) else {
        trace!("Resync: {}.{} nicht mehr in der Szene", document, object);
        return;
    };
    let Some(entity) = scene.entity(entity_id) else {
        return;
    };
    let (path, detail) = match entity.detail_path(element) {
        Some(dp) => (dp.path, dp.detail),
        None => (entity.root_path(), None),
    };
    if !check_selection_style(kind, entity_id, scene) {
        return;
    }
    let color = state.options.selection_color;
    apply_selection(
        registry,
        &mut state.ui,
        &path,
        &Feedback {
            kind,
            color,
            detail,
            secondary: false,
        },
    );
}

/// Gleicht alle Entitäten eines Dokuments mit dem Bus-Zustand ab.
///
/// Abgewählte Teilbäume werden zuerst über den O(1)-Store-Reset ihrer
/// Wurzel geleert — das räumt auch Einträge unter tieferen
/// Instanzierungs-Pfaden ab. Erst danach werden die verbliebenen
/// Selektionen neu aufgetragen, sonst würde der Reset sie mitnehmen.
fn resync_document(
    state: &mut ViewerState,
    scene: &mut dyn SceneModel,
    registry: &mut ContextRegistry,
    document: &str,
) {
    let color = state.options.selection_color;
    let mut selected_entities: Vec<(EntityId, NodePath)> = Vec::new();
    for entity_id in scene.entities_of_document(document) {
        let Some(entity) = scene.entity(entity_id) else {
            continue;
        };
        let Some(object) = entity.object().cloned() else {
            continue;
        };
        let path = entity.root_path();
        let selected =
            entity.is_selectable() && state.selection.entries().any(|e| e.object == object);
        if selected {
            selected_entities.push((entity_id, path));
            continue;
        }
        if !check_selection_style(FeedbackKind::None, entity_id, scene) {
            continue;
        }
        apply_selection_to_root(
            registry,
            &mut state.ui,
            &path,
            &Feedback::new(FeedbackKind::None, color, None),
        );
    }
    for (entity_id, path) in selected_entities {
        if !check_selection_style(FeedbackKind::All, entity_id, scene) {
            continue;
        }
        apply_selection(
            registry,
            &mut state.ui,
            &path,
            &Feedback::new(FeedbackKind::All, color, None),
        );
    }
}

fn resolve_candidate(
    scene: &dyn SceneModel,
    document: &str,
    object: &str,
    element: &str,
    point: glam::Vec3,
) -> Option<PickCandidate> {
    let entity = scene.entity(scene.entity_for_object(document, object)?)?;
    let dp = entity.detail_path(element)?;
    Some(PickCandidate {
        point,
        detail: dp.detail,
        element: element.to_string(),
        object: entity.object().cloned(),
        path: dp.path,
    })
}
