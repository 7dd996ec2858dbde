use std::collections::BTreeMap;

/// Handle to a node stored in a [`PathTree`](crate::PathTree).
///
/// Ids are cheap to copy and compare; two ids are equal only if they name the same node. Once
/// a node is deleted its id goes stale and is never handed out again: a reused slot carries a
/// new generation, and a slot that runs out of generations is retired.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

/// A single directory.
///
/// The `parent` link is a plain [`NodeId`]: it is only used to rebuild full paths and owns
/// nothing. Children are keyed by name, and each key equals the child's own `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    children: BTreeMap<String, NodeId>,
}

impl Node {
    pub(crate) fn new(name: &str, parent: Option<NodeId>) -> Node {
        Node {
            name: name.to_owned(),
            parent,
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Children in ascending name order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(name, &id)| (name.as_str(), id))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn attach(&mut self, name: &str, id: NodeId) {
        self.children.insert(name.to_owned(), id);
    }

    pub(crate) fn detach(&mut self, name: &str) -> Option<NodeId> {
        self.children.remove(name)
    }
}
