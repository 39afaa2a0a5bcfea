/*
Terminal rendering of a search tree via termtree.

termtree only knows ordered children, so a missing left child would make a lone
right child look like a left one. Children are therefore labelled with their side.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{DomainError, NodeId, SearchTree, Side};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Result<Tree<String>, DomainError>;
}

impl TreeNodeConvert for SearchTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Result<Tree<String>, DomainError> {
        fn build_tree(
            tree: &SearchTree,
            node_idx: NodeId,
            prefix: Option<&str>,
        ) -> Result<Tree<String>, DomainError> {
            let node = tree.try_node(node_idx)?;
            let label = match prefix {
                Some(p) => format!("{p}: {}", node.value()),
                None => node.value().to_string(),
            };
            let mut parent_tree = Tree::new(label);
            for side in [Side::Left, Side::Right] {
                if let Some(child_idx) = node.child(side) {
                    let prefix = match side {
                        Side::Left => "L",
                        Side::Right => "R",
                    };
                    parent_tree.push(build_tree(tree, child_idx, Some(prefix))?);
                }
            }
            Ok(parent_tree)
        }

        build_tree(self, self.root(), None)
    }
}
