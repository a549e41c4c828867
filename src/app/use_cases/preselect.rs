//! Hover-Hervorhebung (Preselektion).
//!
//! Hält pro Viewer genau eine aktive Hervorhebung. Wiederholte
//! Hover-Events auf demselben Pfad+Element sind Idempotenz-Fälle und
//! erzeugen weder Notifikationen noch Redraws.

use log::trace;

use crate::app::state::{Highlight, PreselectResult, RepaintMarker, ViewerState};
use crate::core::PickCandidate;
use crate::render::{apply_highlight, ContextRegistry};
use crate::shared::status;

/// Setzt oder löscht die Hover-Hervorhebung.
///
/// `target == None` ist der Hover-Exit. Gibt zurück, ob danach etwas
/// hervorgehoben ist.
pub fn set_highlight(
    state: &mut ViewerState,
    registry: &mut ContextRegistry,
    target: Option<&PickCandidate>,
) -> bool {
    let color = state.options.highlight_color;

    let Some(candidate) = target else {
        return clear_highlight(state, registry);
    };
    let Some(object) = &candidate.object else {
        // Platzhalter (nicht selektierbare Geometrie): wie Hover-Exit.
        return clear_highlight(state, registry);
    };

    if state.preselect.is_current(&candidate.path, &candidate.element) {
        return true;
    }

    state.ui.status_message = Some(status::preselect_message(
        &object.document,
        &object.name,
        &candidate.element,
        candidate.point,
    ));

    let result = state
        .selection
        .set_preselect(object, &candidate.element, candidate.point);

    if result == PreselectResult::Rejected {
        trace!(
            "Preselektion abgelehnt: {}.{}.{}",
            object.document,
            object.name,
            candidate.element
        );
        return clear_highlight(state, registry);
    }

    if let Some(old) = state.preselect.current.take() {
        if old.path != candidate.path || old.element != candidate.element {
            apply_highlight(registry, &mut state.ui, &old.path, false, color, None);
        }
    }

    apply_highlight(
        registry,
        &mut state.ui,
        &candidate.path,
        true,
        color,
        candidate.detail,
    );
    state.preselect.current = Some(Highlight {
        path: candidate.path.clone(),
        element: candidate.element.clone(),
        detail: candidate.detail,
    });
    state.preselect.marker = RepaintMarker::Active;
    true
}

/// Löscht die aktuelle Hervorhebung und die Bus-Preselektion.
pub fn clear_highlight(state: &mut ViewerState, registry: &mut ContextRegistry) -> bool {
    state.selection.rmv_preselect();
    if let Some(old) = state.preselect.current.take() {
        let color = state.options.highlight_color;
        apply_highlight(registry, &mut state.ui, &old.path, false, color, None);
        state.preselect.marker = RepaintMarker::PendingCursorReset;
        state.ui.status_message = None;
    }
    false
}
