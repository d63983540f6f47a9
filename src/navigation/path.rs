//! Breadcrumb trail of visited objects.

use serde::{Deserialize, Serialize};

use crate::graph::TechObject;
use crate::types::{AbstractionLevel, TechObjectId};

/// Summary of one visited object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    pub id: TechObjectId,
    pub name: String,
    pub level: AbstractionLevel,
}

impl From<&TechObject> for NavigationNode {
    fn from(object: &TechObject) -> Self {
        Self {
            id: object.id().clone(),
            name: object.name().to_string(),
            level: object.level(),
        }
    }
}

/// Ordered, immutable list of visited nodes. Every operation returns a new
/// path; existing paths are never modified.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationPath {
    nodes: Vec<NavigationNode>,
}

impl NavigationPath {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append `object`, unless the last node already has its id (a repeated
    /// click on the current node).
    pub fn add(&self, object: &TechObject) -> Self {
        self.add_node(object.into())
    }

    /// Like [`add`](Self::add), for a prepared node.
    pub fn add_node(&self, node: NavigationNode) -> Self {
        if self.last().map(|last| last.id == node.id).unwrap_or(false) {
            return self.clone();
        }
        let mut nodes = self.nodes.clone();
        nodes.push(node);
        Self { nodes }
    }

    /// Nodes `0..=to_index`. An index past the end keeps the whole path.
    pub fn slice(&self, to_index: usize) -> Self {
        let end = to_index.saturating_add(1).min(self.nodes.len());
        Self {
            nodes: self.nodes[..end].to_vec(),
        }
    }

    pub fn nodes(&self) -> &[NavigationNode] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&NavigationNode> {
        self.nodes.get(index)
    }

    pub fn last(&self) -> Option<&NavigationNode> {
        self.nodes.last()
    }

    /// Index of the most recent node with `id`.
    pub fn position(&self, id: &TechObjectId) -> Option<usize> {
        self.nodes.iter().rposition(|n| &n.id == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " > ")?;
            }
            write!(f, "{}", node.name)?;
        }
        Ok(())
    }
}
