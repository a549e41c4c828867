//! Traversierungs-Stack für Render-Pässe mit Re-Entry-Schutz.
//!
//! Render-Delegation kann rekursiv sein (ein Node rendert über einen
//! Delegations-Pfad erneut in sich hinein). Der Schutz ist hier ein
//! Visitations-Token pro Traversierung statt eines mutierbaren Flags am
//! Node — so bleibt der Szenengraph selbst unverändert und mehrere
//! Traversierungen könnten später nebeneinander existieren.

use std::collections::HashSet;

use crate::core::{NodeId, NodePath};

use super::context::{ContextRegistry, SelectionContext};

/// Token für einen betretenen Wurzel-Scope; beim `exit` zurückgeben.
#[derive(Debug, PartialEq, Eq)]
pub struct ScopeToken {
    root: NodeId,
    secondary: bool,
}

/// Stack der aktuell betretenen Selektionswurzeln eines Render-Passes.
///
/// Neben den Wurzel-Stacks führt er den wörtlichen Pfad aller betretenen
/// Nodes mit; Kontexte sind über diesen konkreten Pfad geschlüsselt, damit
/// Instanzierungen hinter gewöhnlichen Zwischen-Nodes getrennt bleiben.
#[derive(Debug, Default)]
pub struct TraversalStack {
    primary: Vec<NodeId>,
    secondary: Vec<NodeId>,
    path: Vec<NodeId>,
    active: HashSet<NodeId>,
}

impl TraversalStack {
    /// Erstellt einen leeren Traversierungs-Stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Betritt eine Selektionswurzel.
    ///
    /// `None`, wenn die Wurzel in dieser Traversierung bereits aktiv ist
    /// (rekursive Delegation) — der Aufrufer rendert dann ohne erneutes
    /// Push weiter, sonst entstünden doppelte Stack-Einträge.
    pub fn enter(&mut self, root: NodeId, secondary: bool) -> Option<ScopeToken> {
        if !self.active.insert(root) {
            return None;
        }
        if !secondary {
            self.primary.push(root);
        }
        self.secondary.push(root);
        self.path.push(root);
        Some(ScopeToken { root, secondary })
    }

    /// Verlässt eine Selektionswurzel wieder.
    pub fn exit(&mut self, token: ScopeToken) {
        debug_assert_eq!(self.path.last(), Some(&token.root));
        self.path.pop();
        debug_assert_eq!(self.secondary.last(), Some(&token.root));
        self.secondary.pop();
        if !token.secondary {
            debug_assert_eq!(self.primary.last(), Some(&token.root));
            self.primary.pop();
        }
        self.active.remove(&token.root);
    }

    /// Betritt einen gewöhnlichen (nicht scope-bildenden) Node.
    pub fn enter_node(&mut self, node: NodeId) {
        self.path.push(node);
    }

    /// Verlässt einen gewöhnlichen Node wieder.
    pub fn exit_node(&mut self, node: NodeId) {
        debug_assert_eq!(self.path.last(), Some(&node));
        self.path.pop();
    }

    /// Tiefe des primären Stacks.
    pub fn depth(&self) -> usize {
        self.primary.len()
    }

    /// Wörtlicher Pfad aller aktuell betretenen Nodes.
    pub fn current_path(&self) -> NodePath {
        NodePath::from_nodes(self.path.clone())
    }

    /// Liest den Kontext des Ziel-Nodes unter dem aktuellen Stack
    /// (während des Render-Passes).
    pub fn context<'a>(
        &self,
        registry: &'a ContextRegistry,
        target: NodeId,
    ) -> Option<&'a SelectionContext> {
        let mut path = self.current_path();
        path.push(target);
        registry.lookup(&path, target)
    }
}
