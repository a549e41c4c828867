//! Kontext-Registry und Traversierungs-Stack im Zusammenspiel mit dem
//! Feedback-Dispatcher: Schlüssel-Ableitung, Instanz-Isolation und der
//! O(1)-Reset an der Wurzel.

use cad_scene_select::app::state::UiState;
use cad_scene_select::render::{
    apply_selection, apply_selection_to_root, Feedback, FeedbackKind,
};
use cad_scene_select::{ContextRegistry, NodeId, NodePath, TraversalStack};

const GREEN: [f32; 4] = [0.1, 0.8, 0.1, 1.0];

fn registry() -> ContextRegistry {
    let mut reg = ContextRegistry::new();
    reg.register_root(NodeId(1), false);
    reg.register_root(NodeId(2), false);
    reg
}

#[test]
fn test_verschachtelte_wurzeln_trennen_instanzen() {
    let mut reg = ContextRegistry::new();
    reg.register_root(NodeId(1), false);
    reg.register_root(NodeId(4), false);

    // Geometrie #9 einmal direkt, einmal unter der inneren Wurzel #4.
    let direct = NodePath::from(vec![1, 9]);
    let nested = NodePath::from(vec![1, 4, 9]);
    let mut ui = UiState::new();

    let fb = Feedback::new(FeedbackKind::All, GREEN, None);
    apply_selection(&mut reg, &mut ui, &direct, &fb);

    assert!(reg.lookup(&direct, NodeId(9)).is_some());
    assert!(reg.lookup(&nested, NodeId(9)).is_none());
}

#[test]
fn test_reset_an_der_wurzel_wirkt_auf_alle_kontexte_darunter() {
    let mut reg = registry();
    let mut ui = UiState::new();
    let fb = Feedback::new(FeedbackKind::All, GREEN, None);

    for node in [10u64, 11, 12] {
        apply_selection(&mut reg, &mut ui, &NodePath::from(vec![1, node]), &fb);
    }
    apply_selection(&mut reg, &mut ui, &NodePath::from(vec![2, 30]), &fb);

    let none = Feedback::new(FeedbackKind::None, GREEN, None);
    apply_selection_to_root(&mut reg, &mut ui, &NodePath::from(vec![1]), &none);

    for node in [10u64, 11, 12] {
        assert!(reg.lookup(&NodePath::from(vec![1, node]), NodeId(node)).is_none());
    }
    assert!(
        reg.lookup(&NodePath::from(vec![2, 30]), NodeId(30)).is_some(),
        "fremde Wurzel bleibt unberührt"
    );
}

#[test]
fn test_traversierung_findet_kontext_unter_aktuellem_stack() {
    let mut reg = ContextRegistry::new();
    reg.register_root(NodeId(1), false);
    reg.register_root(NodeId(4), false);
    let mut ui = UiState::new();

    let nested = NodePath::from(vec![1, 4, 9]);
    let fb = Feedback::new(FeedbackKind::All, GREEN, None);
    apply_selection(&mut reg, &mut ui, &nested, &fb);

    let mut stack = TraversalStack::new();
    let outer = stack.enter(NodeId(1), false).expect("äußere Wurzel");
    assert!(
        stack.context(&reg, NodeId(9)).is_none(),
        "ohne innere Wurzel kein Treffer"
    );
    let inner = stack.enter(NodeId(4), false).expect("innere Wurzel");
    assert!(stack.context(&reg, NodeId(9)).is_some_and(|c| c.selected_all));
    stack.exit(inner);
    stack.exit(outer);
}

#[test]
fn test_pfad_ohne_registrierte_wurzel_traegt_keinen_kontext() {
    let mut reg = registry();
    let mut ui = UiState::new();
    let orphan = NodePath::from(vec![99, 100]);

    let fb = Feedback::new(FeedbackKind::All, GREEN, None);
    apply_selection(&mut reg, &mut ui, &orphan, &fb);
    assert!(reg.lookup(&orphan, NodeId(100)).is_none());
}

#[test]
fn test_sekundaerer_kontext_lebt_getrennt_vom_primaeren() {
    let mut reg = ContextRegistry::new();
    reg.register_root(NodeId(1), false);
    reg.register_root(NodeId(7), true);
    let mut ui = UiState::new();

    let path = NodePath::from(vec![1, 7, 40]);
    let mut fb = Feedback::new(FeedbackKind::All, GREEN, None);
    fb.secondary = true;
    apply_selection(&mut reg, &mut ui, &path, &fb);

    assert!(reg.lookup(&path, NodeId(40)).is_none(), "primär leer");

    // O(1)-Reset der primären Wurzel lässt Sekundär-Kontexte stehen.
    let none = Feedback::new(FeedbackKind::None, GREEN, None);
    apply_selection_to_root(&mut reg, &mut ui, &NodePath::from(vec![1]), &none);

    let mut rmv = Feedback::new(FeedbackKind::None, GREEN, None);
    rmv.secondary = true;
    apply_selection(&mut reg, &mut ui, &path, &rmv);
    // kein Panik-Fall: doppeltes Entfernen ist ein No-op
    apply_selection(&mut reg, &mut ui, &path, &rmv);
}
