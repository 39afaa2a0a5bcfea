//! Arena-backed binary search tree storage.

use std::fmt;

use generational_arena::{Arena, Index};
use serde::Serialize;
use tracing::instrument;

use crate::domain::error::DomainError;

/// Handle of a node inside its owning [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl NodeId {
    /// Arena slot of the node. Slots are handed out in insertion order.
    pub fn slot(&self) -> usize {
        self.0.into_raw_parts().0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.slot())
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// One tree vertex: an integer key and its two optional children.
#[derive(Debug)]
pub struct Node {
    value: i64,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Unbalanced binary search tree.
///
/// Left subtrees hold keys strictly less than their parent, right subtrees hold
/// keys greater or equal. A tree always has a root; "no tree" is modelled as
/// `Option<SearchTree>` by callers. Nodes are only ever appended, so a tree is
/// effectively immutable once [`crate::domain::build`] returns it.
#[derive(Debug)]
pub struct SearchTree {
    arena: Arena<Node>,
    root: NodeId,
}

impl SearchTree {
    pub(crate) fn with_root(value: i64) -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(Node::leaf(value)));
        Self { arena, root }
    }

    /// Insert `value` below the root: less goes left, everything else goes right.
    ///
    /// Walks down iteratively until it finds an empty child slot and hangs a new
    /// leaf there. Duplicates therefore always land in the right subtree.
    pub(crate) fn insert(&mut self, value: i64) -> NodeId {
        let mut current = self.root;
        loop {
            // ids never dangle: nodes are never removed from the arena
            let node = &self.arena[current.0];
            let side = if value < node.value {
                Side::Left
            } else {
                Side::Right
            };
            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let child = NodeId(self.arena.insert(Node::leaf(value)));
                    let parent = &mut self.arena[current.0];
                    match side {
                        Side::Left => parent.left = Some(child),
                        Side::Right => parent.right = Some(child),
                    }
                    return child;
                }
            }
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id.0)
    }

    /// Like [`node`](Self::node), but an unknown id is an error.
    pub fn try_node(&self, id: NodeId) -> Result<&Node, DomainError> {
        self.node(id).ok_or(DomainError::UnknownNode(id))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a built tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path. A lone root has height 1.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 1)];

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.node(idx) {
                for child in [node.left, node.right].into_iter().flatten() {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Leaf values, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<i64> {
        self.iter_preorder()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.value)
            .collect()
    }
}
