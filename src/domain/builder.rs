//! Tree builder: turns an ordered sequence of integers into a [`SearchTree`].

use tracing::{debug, instrument};

use crate::domain::arena::SearchTree;

/// Incrementally constructs a search tree by sequential insertion.
///
/// The first value becomes the root, every later value is inserted below it.
/// Nothing is rebalanced, so the shape depends on insertion order.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Option<SearchTree>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: i64) -> &mut Self {
        match self.tree.as_mut() {
            Some(tree) => {
                let id = tree.insert(value);
                debug!(value, node = %id, "inserted");
            }
            None => {
                debug!(value, "root");
                self.tree = Some(SearchTree::with_root(value));
            }
        }
        self
    }

    pub fn extend(&mut self, values: &[i64]) -> &mut Self {
        for &value in values {
            self.insert(value);
        }
        self
    }

    /// Hand out the finished tree; `None` if nothing was inserted.
    pub fn finish(self) -> Option<SearchTree> {
        self.tree
    }
}

/// Build a tree from `values` in order. An empty slice yields no tree.
#[instrument(level = "debug", skip(values), fields(count = values.len()))]
pub fn build(values: &[i64]) -> Option<SearchTree> {
    let mut builder = TreeBuilder::new();
    builder.extend(values);
    builder.finish()
}
