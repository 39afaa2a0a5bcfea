//! bstview: build unbalanced binary search trees from integer lists and inspect them.
//!
//! Layers, innermost first:
//! - [`domain`]: the tree, the builder, traversals and drawing layout
//! - [`application`]: typed input parsing and the build use case
//! - [`infrastructure`]: I/O boundary traits and wiring
//! - [`cli`]: the command-line presentation layer

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use domain::{build, inorder, postorder, preorder, SearchTree};
