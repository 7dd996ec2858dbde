mod config;
mod node;
mod observer;
mod path_tree;

pub use config::TreeConfig;
pub use node::{Node, NodeId};
pub use observer::{TracingObserver, TreeObserver};
pub use path_tree::PathTree;
