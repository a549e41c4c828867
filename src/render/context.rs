//! Selektions-Kontext-Cache, geschlüsselt über konkrete Instanzierungs-Pfade.
//!
//! Jede Selektionswurzel (scope-bildender Node im Szenengraph) besitzt einen
//! eigenen Store. Schlüssel sind die wörtlichen Ahnen-Pfade unterhalb der
//! besitzenden Wurzel — absichtlich NICHT über geteilte Teilbäume
//! kanonisiert: zwei Instanzierungen derselben Geometrie bekommen zwei
//! unabhängige Einträge, auch wenn sich ihre Pfade nur in gewöhnlichen
//! Zwischen-Nodes unterscheiden. Das ist der ganze Zweck des Stores.

use std::collections::{HashMap, HashSet};

use crate::core::{ElementDetail, NodeId, NodePath};

/// Transienter visueller Zustand einer Instanzierung.
///
/// Niemals Selektions-Wahrheit: die liegt im `SelectionState`; hier wird
/// nur abgeleitet, was der nächste Render-Pass einfärben soll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionContext {
    /// Ganzes Objekt selektiert darstellen
    pub selected_all: bool,
    /// Einzeln selektierte Subelemente
    pub selected_details: HashSet<ElementDetail>,
    /// Hervorhebung (Hover) aktiv
    pub highlighted: bool,
    /// Hervorgehobenes Subelement (None = ganze Instanzierung)
    pub highlight_detail: Option<ElementDetail>,
    /// Farb-Override für den Render-Pass
    pub color: Option<[f32; 4]>,
}

impl SelectionContext {
    /// Gibt zurück, ob der Kontext irgendeinen sichtbaren Effekt trägt.
    pub fn is_visible(&self) -> bool {
        self.selected_all || self.highlighted || !self.selected_details.is_empty()
    }
}

/// Kontext-Schlüssel: Ziel-Node, gefolgt von der wörtlichen Node-Folge
/// zwischen besitzender Wurzel und Ziel.
pub type ContextKey = Vec<NodeId>;

/// Kontext-Store einer Selektionswurzel.
#[derive(Debug, Default)]
pub struct ContextStore {
    map: HashMap<ContextKey, SelectionContext>,
}

impl ContextStore {
    /// Sucht den Kontext zu einem Schlüssel.
    pub fn lookup(&self, key: &ContextKey) -> Option<&SelectionContext> {
        self.map.get(key)
    }

    /// Sucht oder erzeugt den Kontext zu einem Schlüssel.
    pub fn lookup_or_create(&mut self, key: ContextKey) -> &mut SelectionContext {
        self.map.entry(key).or_default()
    }

    /// Entfernt einen Kontext.
    pub fn remove(&mut self, key: &ContextKey) {
        self.map.remove(key);
    }

    /// Leert den kompletten Store in O(1) statt den Teilbaum zu
    /// traversieren — der Zeitgewinn ist bei großen Gruppen erheblich.
    pub fn reset(&mut self) {
        self.map.clear();
    }

    /// Anzahl gecachter Kontexte.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Gibt zurück, ob der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Registry aller Selektionswurzeln mit ihren Stores.
///
/// Primäre Kontexte: besitzt die äußerste Wurzel entlang des Pfades,
/// geschlüsselt über den wörtlichen Pfad unterhalb dieser Wurzel (mit dem
/// Ziel-Node vorn). Sekundäre Kontexte (Annotation/Bounding-Box-Teilbäume):
/// besitzt die innerste Wurzel, geschlüsselt über höchstens (Ziel-Node,
/// äußerste Wurzel) — das begrenzt den Speicher für Overlay-Kontexte.
#[derive(Debug, Default)]
pub struct ContextRegistry {
    primary_roots: HashSet<NodeId>,
    secondary_roots: HashSet<NodeId>,
    stores: HashMap<NodeId, ContextStore>,
    secondary_stores: HashMap<NodeId, ContextStore>,
}

impl ContextRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Node als Selektionswurzel.
    pub fn register_root(&mut self, root: NodeId, secondary: bool) {
        if secondary {
            self.secondary_roots.insert(root);
        } else {
            self.primary_roots.insert(root);
        }
    }

    /// Gibt zurück, ob ein Node eine (primäre) Selektionswurzel ist.
    pub fn is_primary_root(&self, node: NodeId) -> bool {
        self.primary_roots.contains(&node)
    }

    /// Gibt zurück, ob ein Node eine sekundäre Selektionswurzel ist.
    pub fn is_secondary_root(&self, node: NodeId) -> bool {
        self.secondary_roots.contains(&node)
    }

    /// Wurzel-Stack (primäre und sekundäre Wurzeln) entlang eines Pfades;
    /// Grundlage der sekundären Kontext-Schlüssel.
    pub fn roots_along(&self, path: &NodePath) -> Vec<NodeId> {
        path.nodes()
            .iter()
            .copied()
            .filter(|n| self.primary_roots.contains(n) || self.secondary_roots.contains(n))
            .collect()
    }

    /// Position und Id der äußersten primären Wurzel entlang des Pfades.
    fn front_primary_root(&self, path: &NodePath) -> Option<(usize, NodeId)> {
        path.nodes()
            .iter()
            .enumerate()
            .find(|(_, n)| self.primary_roots.contains(n))
            .map(|(pos, n)| (pos, *n))
    }

    /// Primärer Kontext-Schlüssel: Ziel-Node, dann die wörtliche
    /// Node-Folge zwischen besitzender Wurzel und Ziel. Instanzierungen
    /// unter verschiedenen Zwischen-Nodes bleiben so getrennt.
    fn primary_key(path: &NodePath, front_pos: usize, target: NodeId) -> ContextKey {
        let mut inner = &path.nodes()[front_pos + 1..];
        if inner.last() == Some(&target) {
            inner = &inner[..inner.len() - 1];
        }
        let mut key = Vec::with_capacity(inner.len() + 1);
        key.push(target);
        key.extend_from_slice(inner);
        key
    }

    /// Sekundärer Kontext-Schlüssel: (Ziel-Node) oder (Ziel-Node, äußerste
    /// Wurzel) bei tieferen Stacks.
    fn secondary_key(stack: &[NodeId], target: NodeId) -> ContextKey {
        let mut key = Vec::with_capacity(2);
        key.push(target);
        if stack.len() > 1 {
            key.push(stack[0]);
        }
        key
    }

    /// Liest den primären Kontext für den Ziel-Node eines Pfades.
    pub fn lookup(&self, path: &NodePath, target: NodeId) -> Option<&SelectionContext> {
        let (pos, front) = self.front_primary_root(path)?;
        self.stores
            .get(&front)?
            .lookup(&Self::primary_key(path, pos, target))
    }

    /// Liest oder erzeugt den primären Kontext für den Ziel-Node.
    ///
    /// `None`, wenn entlang des Pfades keine Selektionswurzel liegt
    /// (solche Nodes tragen keinen Kontext).
    pub fn lookup_or_create(
        &mut self,
        path: &NodePath,
        target: NodeId,
    ) -> Option<&mut SelectionContext> {
        let (pos, front) = self.front_primary_root(path)?;
        Some(
            self.stores
                .entry(front)
                .or_default()
                .lookup_or_create(Self::primary_key(path, pos, target)),
        )
    }

    /// Liest den primären Kontext mutierbar, ohne ihn anzulegen.
    pub fn lookup_mut(
        &mut self,
        path: &NodePath,
        target: NodeId,
    ) -> Option<&mut SelectionContext> {
        let (pos, front) = self.front_primary_root(path)?;
        self.stores
            .get_mut(&front)?
            .map
            .get_mut(&Self::primary_key(path, pos, target))
    }

    /// Liest den sekundären Kontext mutierbar, ohne ihn anzulegen.
    pub fn lookup_mut_secondary(
        &mut self,
        path: &NodePath,
        target: NodeId,
    ) -> Option<&mut SelectionContext> {
        let stack = self.roots_along(path);
        let back = *stack.last()?;
        self.secondary_stores
            .get_mut(&back)?
            .map
            .get_mut(&Self::secondary_key(&stack, target))
    }

    /// Entfernt den sekundären Kontext des Ziel-Nodes.
    pub fn remove_secondary(&mut self, path: &NodePath, target: NodeId) {
        let stack = self.roots_along(path);
        if let Some(back) = stack.last() {
            if let Some(store) = self.secondary_stores.get_mut(back) {
                store.remove(&Self::secondary_key(&stack, target));
            }
        }
    }

    /// Entfernt den primären Kontext des Ziel-Nodes.
    pub fn remove(&mut self, path: &NodePath, target: NodeId) {
        if let Some((pos, front)) = self.front_primary_root(path) {
            if let Some(store) = self.stores.get_mut(&front) {
                store.remove(&Self::primary_key(path, pos, target));
            }
        }
    }

    /// Liest oder erzeugt den sekundären Kontext des Ziel-Nodes.
    pub fn lookup_or_create_secondary(
        &mut self,
        path: &NodePath,
        target: NodeId,
    ) -> Option<&mut SelectionContext> {
        let stack = self.roots_along(path);
        let back = *stack.last()?;
        Some(
            self.secondary_stores
                .entry(back)
                .or_default()
                .lookup_or_create(Self::secondary_key(&stack, target)),
        )
    }

    /// Leert den Store des Teilbaums, dessen Wurzel vorderste Wurzel des
    /// Pfades ist — der O(1)-Ersatz für eine Teilbaum-Traversierung bei
    /// "select none".
    pub fn reset_subtree(&mut self, path: &NodePath) -> bool {
        match self.front_primary_root(path) {
            Some((_, front)) => {
                if let Some(store) = self.stores.get_mut(&front) {
                    store.reset();
                }
                true
            }
            None => false,
        }
    }

    /// Direkter Zugriff auf den Store einer Wurzel (für Tests/Diagnose).
    pub fn store(&self, root: NodeId) -> Option<&ContextStore> {
        self.stores.get(&root)
    }
}
