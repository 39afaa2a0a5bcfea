//! Build-and-inspect use case: values in, tree plus everything needed to show it out.

use tracing::{info, instrument};

use crate::application::ApplicationResult;
use crate::domain::{build, layout, SearchTree, TreeLayout, Traversals};

/// Shape statistics shown next to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSummary {
    pub nodes: usize,
    pub height: usize,
    pub leaves: usize,
}

/// One build request: the input values and the tree made from them.
#[derive(Debug)]
pub struct TreeSession {
    values: Vec<i64>,
    tree: Option<SearchTree>,
}

impl TreeSession {
    #[instrument(level = "debug", skip(values), fields(count = values.len()))]
    pub fn from_values(values: Vec<i64>) -> Self {
        let tree = build(&values);
        match &tree {
            Some(t) => info!(nodes = t.len(), height = t.height(), "tree built"),
            None => info!("no input provided, nothing built"),
        }
        Self { values, tree }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn tree(&self) -> Option<&SearchTree> {
        self.tree.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    pub fn traversals(&self) -> Traversals {
        Traversals::of(self.tree())
    }

    /// Drawing geometry, None without a tree.
    pub fn layout(&self) -> ApplicationResult<Option<TreeLayout>> {
        Ok(self.tree().map(layout).transpose()?)
    }

    pub fn summary(&self) -> TreeSummary {
        self.tree().map_or(
            TreeSummary {
                nodes: 0,
                height: 0,
                leaves: 0,
            },
            |t| TreeSummary {
                nodes: t.len(),
                height: t.height(),
                leaves: t.leaves().len(),
            },
        )
    }
}
