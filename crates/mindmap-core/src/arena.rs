//! Arena storage for mind-map nodes.
//!
//! Every [`Node`] lives in a single [`NodeArena`] and is referred to through a
//! lightweight [`NodeId`] handle. The diagram's active collection and each
//! node's children list are independent containers of such handles, so a
//! handle may remain in a children list after its node has left the active
//! collection.
//!
//! Records are never freed: a [`NodeId`] stays dereferenceable for the life
//! of the arena it was issued by.

use std::fmt;

use log::trace;

use crate::node::Node;

/// Handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the record inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Append-only node storage.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its handle.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        trace!(id = id.0, text = node.text(); "Inserted node into arena");
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Total number of records ever inserted.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends `child` to the children list of `parent`.
    ///
    /// Returns `false` if `parent` is not a handle of this arena. No cycle
    /// check is performed; callers must never make a node its own ancestor.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        match self.node_mut(parent) {
            Some(node) => {
                node.add_child(child);
                true
            }
            None => false,
        }
    }

    /// Returns true if `candidate` is reachable from `ancestor` through one or
    /// more children links.
    ///
    /// The search is a plain depth-first recursion. It does not terminate if
    /// the children graph below `ancestor` contains a cycle.
    pub fn is_descendant(&self, ancestor: NodeId, candidate: NodeId) -> bool {
        let Some(node) = self.node(ancestor) else {
            return false;
        };

        if node.children().contains(&candidate) {
            return true;
        }

        node.children()
            .iter()
            .any(|&child| self.is_descendant(child, candidate))
    }
}
