//! Szenen-Node-Identitäten und konkrete Instanzierungs-Pfade.
//!
//! Ein `NodePath` beschreibt genau eine Instanzierung von möglicherweise
//! geteilter Geometrie: die geordnete Folge der Node-IDs von der Szenenwurzel
//! bis zum Blatt. Dieselbe Geometrie kann unter vielen Pfaden auftauchen
//! (Links/Instancing) — der Pfad, nicht der Node, ist die Identität.

use std::fmt;

/// Stabile Identität eines Szenen-Nodes.
///
/// Bewusst keine Adresse/Referenz: IDs bleiben über kleinere
/// Szenenmutationen innerhalb eines Frames gültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geordnete Folge von Node-IDs von der Wurzel bis zum Ziel-Node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    nodes: Vec<NodeId>,
}

impl NodePath {
    /// Erstellt einen leeren Pfad (kein Ziel).
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Erstellt einen Pfad aus einer Wurzel-zu-Blatt-Folge.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Anzahl der Nodes im Pfad.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt zurück, ob der Pfad leer ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Die Node-Folge von der Wurzel bis zum Ziel.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Letzter Node des Pfades (das konkrete Ziel).
    pub fn tail(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Erster Node des Pfades (die Wurzel der Traversierung).
    pub fn head(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Gibt zurück, ob `prefix` ein Präfix dieses Pfades ist
    /// (`containsPath`-Semantik: der Event-Pfad muss unter dem
    /// aktuellen Traversierungspfad liegen).
    pub fn starts_with(&self, prefix: &NodePath) -> bool {
        self.nodes.len() >= prefix.nodes.len()
            && self.nodes[..prefix.nodes.len()] == prefix.nodes[..]
    }

    /// Kürzt den Pfad auf die ersten `len` Nodes.
    pub fn truncated(&self, len: usize) -> NodePath {
        Self {
            nodes: self.nodes[..len.min(self.nodes.len())].to_vec(),
        }
    }

    /// Hängt einen Node an das Pfadende an.
    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }
}

impl From<Vec<u64>> for NodePath {
    fn from(raw: Vec<u64>) -> Self {
        Self {
            nodes: raw.into_iter().map(NodeId).collect(),
        }
    }
}
