//! Render-Feedback-Dispatcher: überträgt Selektions-/Hover-Entscheidungen
//! in die Kontext-Stores des betroffenen Pfades — und nur dieses Pfades.
//!
//! Der Dispatcher hält keine Selektions-Wahrheit. Er markiert Kontexte und
//! fordert einen Redraw an; der eigentliche Render-Pass liest die Kontexte
//! während der Traversierung wieder aus.

use crate::app::state::UiState;
use crate::core::{ElementDetail, EntityId, NodePath, SceneModel, SelectionStyle};

use super::context::ContextRegistry;

/// Art der Feedback-Anwendung auf einen Ziel-Pfad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Selektion entfernen (ganzer Scope)
    None,
    /// Dieses Subelement zusätzlich markieren
    Append,
    /// Alle Subelemente markieren (ganzes Objekt / Hierarchie-Ebene)
    All,
    /// Dieses Subelement abwählen
    Remove,
}

/// Feedback-Auftrag für den Dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feedback {
    /// Art der Anwendung
    pub kind: FeedbackKind,
    /// Overlay-Farbe (RGBA)
    pub color: [f32; 4],
    /// Betroffenes Subelement (None = ganze Instanzierung)
    pub detail: Option<ElementDetail>,
    /// Sekundärer Kontext (Annotation/Bounding-Box-Teilbäume)
    pub secondary: bool,
}

impl Feedback {
    /// Erstellt einen primären Feedback-Auftrag.
    pub fn new(kind: FeedbackKind, color: [f32; 4], detail: Option<ElementDetail>) -> Self {
        Self {
            kind,
            color,
            detail,
            secondary: false,
        }
    }
}

/// Prüft den Selektionsstil der Entität und schaltet ggf. die Bounding-Box.
///
/// Gibt `false` zurück, wenn das normale Overlay unterdrückt werden soll:
/// beim Bounding-Box-Stil ersetzt die Box das Overlay beim Selektieren,
/// sonst gäbe es doppeltes visuelles Feedback.
pub fn check_selection_style(
    kind: FeedbackKind,
    entity: EntityId,
    scene: &mut dyn SceneModel,
) -> bool {
    if !matches!(kind, FeedbackKind::All | FeedbackKind::None) {
        return true;
    }
    let style = scene
        .entity(entity)
        .map(|e| e.selection_style())
        .unwrap_or_default();
    if style == SelectionStyle::BoundingBox {
        let selected = kind == FeedbackKind::All;
        scene.set_bounding_box(entity, selected);
        if selected {
            return false;
        }
    }
    true
}

/// Wendet einen Selektions-Feedback-Auftrag auf einen konkreten Pfad an.
pub fn apply_selection(
    registry: &mut ContextRegistry,
    ui: &mut UiState,
    path: &NodePath,
    feedback: &Feedback,
) {
    let Some(target) = path.tail() else {
        return;
    };

    match feedback.kind {
        FeedbackKind::All | FeedbackKind::Append => {
            let slot = if feedback.secondary {
                registry.lookup_or_create_secondary(path, target)
            } else {
                registry.lookup_or_create(path, target)
            };
            let Some(ctx) = slot else { return };
            if feedback.kind == FeedbackKind::All {
                ctx.selected_all = true;
                ctx.selected_details.clear();
            } else {
                match feedback.detail {
                    Some(detail) => {
                        ctx.selected_details.insert(detail);
                    }
                    None => ctx.selected_all = true,
                }
            }
            ctx.color = Some(feedback.color);
        }
        FeedbackKind::Remove | FeedbackKind::None => {
            let slot = if feedback.secondary {
                registry.lookup_mut_secondary(path, target)
            } else {
                registry.lookup_mut(path, target)
            };
            let Some(ctx) = slot else { return };
            if feedback.kind == FeedbackKind::Remove {
                match feedback.detail {
                    Some(detail) => {
                        ctx.selected_details.remove(&detail);
                    }
                    None => {
                        ctx.selected_all = false;
                        ctx.selected_details.clear();
                    }
                }
            } else {
                ctx.selected_all = false;
                ctx.selected_details.clear();
                ctx.color = None;
            }
            if !ctx.is_visible() {
                if feedback.secondary {
                    registry.remove_secondary(path, target);
                } else {
                    registry.remove(path, target);
                }
            }
        }
    }

    ui.request_redraw();
}

/// Wendet einen Selektions-Feedback-Auftrag auf einen ganzen Teilbaum an.
///
/// "Select none" an einer primären Wurzel leert deren Kontext-Store in
/// O(1), statt potentiell viele Kind-Nodes zu besuchen.
pub fn apply_selection_to_root(
    registry: &mut ContextRegistry,
    ui: &mut UiState,
    root_path: &NodePath,
    feedback: &Feedback,
) {
    if feedback.kind == FeedbackKind::None
        && !feedback.secondary
        && registry.reset_subtree(root_path)
    {
        ui.request_redraw();
        return;
    }
    apply_selection(registry, ui, root_path, feedback);
}

/// Setzt oder löscht die Hover-Hervorhebung auf einem konkreten Pfad.
pub fn apply_highlight(
    registry: &mut ContextRegistry,
    ui: &mut UiState,
    path: &NodePath,
    highlighted: bool,
    color: [f32; 4],
    detail: Option<ElementDetail>,
) {
    let Some(target) = path.tail() else {
        return;
    };

    if highlighted {
        if let Some(ctx) = registry.lookup_or_create(path, target) {
            ctx.highlighted = true;
            ctx.highlight_detail = detail;
            ctx.color = Some(color);
        }
    } else if let Some(ctx) = registry.lookup_mut(path, target) {
        ctx.highlighted = false;
        ctx.highlight_detail = None;
        if !ctx.is_visible() {
            registry.remove(path, target);
        }
    }

    ui.request_redraw();
}
