//! Hooks for auditing structural changes.

use std::sync::Arc;

use tracing::info;

use super::NodeId;

/// Receives a notification for every structural change made to a [`PathTree`](crate::PathTree).
///
/// Both methods default to doing nothing, so implementors only override what they need.
/// `parent_path` is the full path (root name included) of the directory that gained or lost
/// the child.
pub trait TreeObserver: Send + Sync {
    /// Called once per newly created node, parents before children.
    fn node_created(&self, id: NodeId, name: &str, parent_path: &str) {
        let _ = (id, name, parent_path);
    }

    /// Called once per `delete()`; `removed` counts the node and all of its descendants.
    fn subtree_removed(&self, name: &str, parent_path: &str, removed: usize) {
        let _ = (name, parent_path, removed);
    }
}

impl<T: TreeObserver + ?Sized> TreeObserver for Arc<T> {
    fn node_created(&self, id: NodeId, name: &str, parent_path: &str) {
        (**self).node_created(id, name, parent_path);
    }

    fn subtree_removed(&self, name: &str, parent_path: &str, removed: usize) {
        (**self).subtree_removed(name, parent_path, removed);
    }
}

/// Reports changes as `tracing` events at `INFO` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TreeObserver for TracingObserver {
    fn node_created(&self, _id: NodeId, name: &str, parent_path: &str) {
        info!(name, parent = parent_path, "adding directory");
    }

    fn subtree_removed(&self, name: &str, parent_path: &str, removed: usize) {
        info!(
            name,
            parent = parent_path,
            removed,
            "deleting directory and all its subdirectories"
        );
    }
}
