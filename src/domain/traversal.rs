//! Depth-first traversals over a [`SearchTree`].
//!
//! All three orders are driven by explicit stacks instead of recursion, so a
//! degenerate tree (sorted input) cannot exhaust the call stack.

use std::fmt;

use tracing::instrument;

use crate::domain::arena::{Node, NodeId, SearchTree};

impl SearchTree {
    /// Node, then left subtree, then right subtree.
    pub fn iter_preorder(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Left subtree, then node, then right subtree. Non-decreasing for a BST.
    pub fn iter_inorder(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// Left subtree, then right subtree, then node.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }
}

pub struct PreOrderIterator<'a> {
    tree: &'a SearchTree,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a SearchTree) -> Self {
        Self {
            tree,
            stack: vec![tree.root()],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                // right first so that left is popped first
                self.stack.extend(node.right());
                self.stack.extend(node.left());
                return Some((current, node));
            }
        }
        None
    }
}

pub struct InOrderIterator<'a> {
    tree: &'a SearchTree,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a SearchTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: Some(tree.root()),
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.cursor {
            self.stack.push(current);
            self.cursor = self.tree.node(current).and_then(Node::left);
        }
        let current = self.stack.pop()?;
        let node = self.tree.node(current)?;
        self.cursor = node.right();
        Some((current, node))
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a SearchTree,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a SearchTree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root(), false)],
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                if visited {
                    return Some((current, node));
                }
                self.stack.push((current, true));
                if let Some(right) = node.right() {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.left() {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}

/// The three canonical depth-first orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Pre,
    In,
    Post,
}

impl Traversal {
    pub const ALL: [Traversal; 3] = [Traversal::Pre, Traversal::In, Traversal::Post];

    pub fn name(self) -> &'static str {
        match self {
            Traversal::Pre => "preorder",
            Traversal::In => "inorder",
            Traversal::Post => "postorder",
        }
    }

    /// Values in this order. No tree means an empty sequence.
    pub fn traverse(self, tree: Option<&SearchTree>) -> Vec<i64> {
        match self {
            Traversal::Pre => preorder(tree),
            Traversal::In => inorder(tree),
            Traversal::Post => postorder(tree),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[instrument(level = "trace", skip(tree))]
pub fn preorder(tree: Option<&SearchTree>) -> Vec<i64> {
    tree.map(|t| t.iter_preorder().map(|(_, n)| n.value()).collect())
        .unwrap_or_default()
}

#[instrument(level = "trace", skip(tree))]
pub fn inorder(tree: Option<&SearchTree>) -> Vec<i64> {
    tree.map(|t| t.iter_inorder().map(|(_, n)| n.value()).collect())
        .unwrap_or_default()
}

#[instrument(level = "trace", skip(tree))]
pub fn postorder(tree: Option<&SearchTree>) -> Vec<i64> {
    tree.map(|t| t.iter_postorder().map(|(_, n)| n.value()).collect())
        .unwrap_or_default()
}

/// All three orders of one tree, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversals {
    pub preorder: Vec<i64>,
    pub inorder: Vec<i64>,
    pub postorder: Vec<i64>,
}

impl Traversals {
    pub fn of(tree: Option<&SearchTree>) -> Self {
        Self {
            preorder: preorder(tree),
            inorder: inorder(tree),
            postorder: postorder(tree),
        }
    }

    pub fn get(&self, order: Traversal) -> &[i64] {
        match order {
            Traversal::Pre => &self.preorder,
            Traversal::In => &self.inorder,
            Traversal::Post => &self.postorder,
        }
    }
}
