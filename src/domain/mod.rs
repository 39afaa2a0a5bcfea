//! Domain layer: the binary search tree and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod layout;
pub mod traversal;

pub use arena::{Node, NodeId, SearchTree, Side};
pub use builder::{build, TreeBuilder};
pub use error::DomainError;
pub use layout::{layout, Edge, PlacedNode, TreeLayout};
pub use traversal::{inorder, postorder, preorder, Traversal, Traversals};
