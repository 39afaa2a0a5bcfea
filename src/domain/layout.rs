//! 2-D drawing geometry for an external tree renderer.
//!
//! The root sits at the origin. Each level down moves one unit in negative y,
//! and a child is shifted left or right of its parent by an offset that halves
//! with every level, so subtrees never cross.

use serde::Serialize;
use tracing::instrument;

use crate::domain::arena::{NodeId, SearchTree, Side};
use crate::domain::error::DomainError;

/// A node with its computed drawing position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    #[serde(serialize_with = "serialize_id")]
    pub id: NodeId,
    pub value: i64,
    pub depth: usize,
    pub x: f64,
    pub y: f64,
}

/// A directed parent→child link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    #[serde(serialize_with = "serialize_id")]
    pub parent: NodeId,
    #[serde(serialize_with = "serialize_id")]
    pub child: NodeId,
    pub side: Side,
}

/// Everything a renderer needs: positioned nodes (preorder) and edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeLayout {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<Edge>,
}

fn serialize_id<S: serde::Serializer>(id: &NodeId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(id.slot() as u64)
}

/// Horizontal distance between a node at `depth` and its children.
pub fn child_offset(depth: usize) -> f64 {
    let exponent = i32::try_from(depth).unwrap_or(i32::MAX);
    0.5_f64.powi(exponent)
}

/// Place every node of `tree`. Fails only if the tree links to a node it does not own.
#[instrument(level = "debug", skip(tree), fields(nodes = tree.len()))]
pub fn layout(tree: &SearchTree) -> Result<TreeLayout, DomainError> {
    let mut result = TreeLayout::default();
    let mut stack = vec![(tree.root(), 0usize, 0.0_f64)];

    while let Some((id, depth, x)) = stack.pop() {
        let node = tree.try_node(id)?;
        result.nodes.push(PlacedNode {
            id,
            value: node.value(),
            depth,
            x,
            // not -(depth): the root must get +0.0, not -0.0
            y: 0.0 - depth as f64,
        });

        let offset = child_offset(depth);
        // right pushed first: nodes come out in preorder
        for (side, dx) in [(Side::Right, offset), (Side::Left, -offset)] {
            if let Some(child) = node.child(side) {
                stack.push((child, depth + 1, x + dx));
            }
        }
        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                result.edges.push(Edge {
                    parent: id,
                    child,
                    side,
                });
            }
        }
    }

    Ok(result)
}
