//! A small in-memory directory tree addressed by slash-delimited paths.
//!
//! ### Overview
//!
//! `dir-tree-kit` keeps a hierarchy of named directories under a single synthetic root and lets
//! you work with it through plain path strings such as `"Pictures/Camera Roll/2025"`.
//!
//! **Key ideas**:
//! - **Lazy creation**: `insert()` creates only the segments that are missing, and is idempotent.
//! - **Cascading removal**: `delete()` drops a directory together with everything below it.
//! - **Deterministic listings**: `list()` walks depth-first with children in sorted name order.
//! - **Observable**: plug a [`TreeObserver`] in to audit every structural change.
//!
//! ```
//! use dir_tree_kit::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.insert("Pictures/Screenshots");
//! tree.insert("Pictures/Camera Roll/2025");
//!
//! assert!(tree.exists("Pictures/Camera Roll"));
//! assert_eq!(
//!     tree.list("Pictures").unwrap(),
//!     vec!["Pictures/", "  Camera Roll/", "    2025/", "  Screenshots/"]
//! );
//! ```

mod core;
mod tree;

pub use crate::core::{Result, TreeError};
pub use tree::{Node, NodeId, PathTree, TracingObserver, TreeConfig, TreeObserver};
