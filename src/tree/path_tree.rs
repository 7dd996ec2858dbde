//! The path-addressed directory tree.

use std::fmt;

use tracing::{debug, trace};

use super::{Node, NodeId, TreeConfig, TreeObserver};
use crate::core::{Result, TreeError, utils};

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// An in-memory hierarchy of named directories, addressed by slash-delimited paths.
///
/// Every path is resolved from the synthetic root: `"Pictures/Camera Roll"` means "the child
/// `Camera Roll` of the root's child `Pictures`". The empty path is the root itself.
///
/// ### Internal state
///
/// * `slots` — Arena holding every node. A [`NodeId`] is an index into it plus a generation
///   counter, which is bumped whenever the slot is freed so that old ids stop resolving.
/// * `free` — Indices of freed slots, reused by later insertions. A slot whose generation
///   counter is exhausted is never put back here.
/// * `root` — Id of the root node; created in the constructor, never freed.
/// * `observer` — Optional [`TreeObserver`] told about every creation and removal.
///
/// ### Invariants
///
/// 1. **Single root**: exactly one node has no parent, and it cannot be deleted.
/// 2. **Name consistency**: a child's key in its parent's map always equals its `name`.
/// 3. **Strict tree**: every non-root node is reachable from exactly one parent; no cycles.
/// 4. **Sibling uniqueness**: inserting an existing name returns the existing node.
///
/// ### Lifecycle
///
/// - Nodes are only created by `insert()`, one per missing segment, root to leaf.
/// - `delete()` unlinks a node from its parent, then frees it and all of its descendants by
///   walking child links downwards. Parent links are never followed during removal.
///
/// ### Thread Safety
///
/// `PathTree` is `Send + Sync`, but mutations take `&mut self`: writers must be serialized by
/// the caller. Wrap it in `RwLock<PathTree>` to share it between threads; readers (`lookup()`,
/// `list()`) can then run in parallel while no writer holds the lock.
///
/// ### Example
///
/// ```
/// use dir_tree_kit::PathTree;
///
/// let mut tree = PathTree::new();
/// let chrome = tree.insert("Pictures/saved pictures/web images/Chrome");
///
/// assert_eq!(tree.lookup("Pictures/saved pictures/web images/Chrome"), Ok(chrome));
/// assert_eq!(tree.delete("Pictures/saved pictures"), Ok(3));
/// assert!(!tree.exists("Pictures/saved pictures/web images/Chrome"));
/// ```
pub struct PathTree {
    config: TreeConfig,
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    len: usize,
    observer: Option<Box<dyn TreeObserver>>,
}

impl PathTree {
    /// Creates an empty tree with a root named `Root`.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Creates an empty tree whose root name and listing indent come from `config`.
    pub fn with_config(config: TreeConfig) -> Self {
        let root = NodeId {
            index: 0,
            generation: 0,
        };
        let slots = vec![Slot {
            generation: root.generation,
            node: Some(Node::new(&config.root_name, None)),
        }];

        Self {
            config,
            slots,
            free: Vec::new(),
            root,
            len: 1,
            observer: None,
        }
    }

    /// Builder form of `set_observer()`.
    pub fn with_observer(mut self, observer: impl TreeObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    /// Installs `observer`, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl TreeObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer; later changes go unreported.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Changes the per-level prefix used by `list()`.
    pub fn set_indent(&mut self, indent: impl Into<String>) {
        self.config.indent = indent.into();
    }

    /// Returns the settings the tree was built with, including any later `set_indent()`.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Returns the id of the root node. It stays valid for the lifetime of the tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the name of the root node.
    pub fn root_name(&self) -> &str {
        self.live(self.root).name()
    }

    /// Number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.len == 1
    }

    /// Returns the node behind `id`, or `None` if it has been deleted.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Rebuilds the full path of `id` from its parent links, starting with the root's name,
    /// e.g. `Root/Pictures/Camera Roll`. Returns `None` for a stale id.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.node(id)?;
            names.push(node.name());
            current = node.parent();
        }

        let mut path = String::new();
        for (i, name) in names.iter().rev().enumerate() {
            if i > 0 {
                path.push(utils::SEPARATOR);
            }
            path.push_str(name);
        }
        Some(path)
    }

    /// Ensures every segment of `path` exists and returns the node of the last one.
    ///
    /// Existing segments are walked through untouched; from the first missing segment on, a new
    /// node is created for each remaining one. Inserting a path that already exists changes
    /// nothing and returns the same id. The empty path returns the root.
    pub fn insert(&mut self, path: &str) -> NodeId {
        let mut segments = utils::segments(path).peekable();
        let mut current = self.root;

        while let Some(child) = segments
            .peek()
            .and_then(|segment| self.live(current).child(segment))
        {
            current = child;
            segments.next();
        }

        for segment in segments {
            current = self.create_child(current, segment);
        }
        current
    }

    /// Resolves `path` to a node id.
    ///
    /// # Returns
    /// * `Ok(NodeId)` - the node at `path`; the root for the empty path.
    /// * `Err(TreeError::NotFound)` - some segment has no matching child.
    pub fn lookup(&self, path: &str) -> Result<NodeId> {
        self.walk(path, utils::segments(path))
    }

    /// Same walk as `lookup()`, returning the node itself.
    pub fn get_node(&self, path: &str) -> Result<&Node> {
        self.lookup(path).map(|id| self.live(id))
    }

    /// Checks whether `path` resolves to a directory.
    ///
    /// # Arguments
    /// * `path` - slash-delimited path from the root; the empty path is the root itself.
    ///
    /// # Returns
    /// * `true` if every segment of `path` exists, `false` otherwise.
    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// Removes the directory at `path` together with all of its subdirectories.
    ///
    /// Returns the number of removed nodes.
    ///
    /// # Errors
    /// * `TreeError::RootRemoval` - `path` is empty; the root is left in place.
    /// * `TreeError::NotFound` - any segment of `path` is missing. The tree is left unchanged.
    pub fn delete(&mut self, path: &str) -> Result<usize> {
        let segments: Vec<_> = utils::segments(path).collect();
        let (&name, parent_segments) = segments.split_last().ok_or(TreeError::RootRemoval)?;
        let parent = self.walk(path, parent_segments.iter().copied())?;
        let target = self.live_mut(parent).detach(name).ok_or_else(|| {
            trace!(path, segment = name, "path does not resolve");
            TreeError::not_found(path, name)
        })?;

        let removed = self.release_subtree(target);
        debug!(path, removed, "removed directory");

        if let Some(observer) = &self.observer {
            let parent_path = self.path_of(parent).unwrap_or_default();
            observer.subtree_removed(name, &parent_path, removed);
        }
        Ok(removed)
    }

    /// Lists the subtree at `path`, one line per directory.
    ///
    /// Lines come in depth-first pre-order with siblings sorted by name. Each line is the
    /// directory name plus a trailing `/`, prefixed by the configured indent once per level
    /// below the listed directory:
    ///
    /// ```text
    /// web images/
    ///   Chrome/
    ///   Firefox/
    /// ```
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        self.list_with_indent(path, 0)
    }

    /// Like `list()`, but the listed directory itself is already indented `base_depth` levels.
    pub fn list_with_indent(&self, path: &str, base_depth: usize) -> Result<Vec<String>> {
        let start = self.lookup(path)?;
        let mut lines = Vec::new();
        let mut stack = vec![(start, base_depth)];

        while let Some((id, depth)) = stack.pop() {
            let node = self.live(id);
            lines.push(format!(
                "{}{}{}",
                self.config.indent.repeat(depth),
                node.name(),
                utils::SEPARATOR
            ));
            // reversed so the smallest name is popped first
            stack.extend(node.children().rev().map(|(_, child)| (child, depth + 1)));
        }
        Ok(lines)
    }

    /// The listing of `path` joined with newlines.
    pub fn render(&self, path: &str) -> Result<String> {
        Ok(self.list(path)?.join("\n"))
    }

    /// Follows `segments` down from the root. Errors name `path`, the path as the caller
    /// wrote it.
    fn walk<'a>(&self, path: &str, segments: impl Iterator<Item = &'a str>) -> Result<NodeId> {
        let mut current = self.root;
        for segment in segments {
            current = self.live(current).child(segment).ok_or_else(|| {
                trace!(path, segment, "path does not resolve");
                TreeError::not_found(path, segment)
            })?;
        }
        Ok(current)
    }

    fn live(&self, id: NodeId) -> &Node {
        match self.node(id) {
            Some(node) => node,
            None => unreachable!("tree holds a stale id {id:?}"),
        }
    }

    fn live_mut(&mut self, id: NodeId) -> &mut Node {
        match self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
        {
            Some(node) => node,
            None => unreachable!("tree holds a stale id {id:?}"),
        }
    }

    fn create_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = self.alloc(Node::new(name, Some(parent)));
        self.live_mut(parent).attach(name, id);
        debug!(name, "created directory");

        if let Some(observer) = &self.observer {
            let parent_path = self.path_of(parent).unwrap_or_default();
            observer.node_created(id, name, &parent_path);
        }
        id
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Frees `top` and everything below it. `top` must already be unlinked from its parent.
    ///
    /// A freed slot goes back on the free list under the next generation. A slot whose
    /// generation is exhausted is retired instead, so old ids can never match a new node.
    fn release_subtree(&mut self, top: NodeId) -> usize {
        let mut removed = 0;
        let mut stack = vec![top];
        while let Some(id) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(id.index)
                .filter(|slot| slot.generation == id.generation)
            else {
                continue;
            };
            let Some(node) = slot.node.take() else {
                continue;
            };
            if let Some(next) = slot.generation.checked_add(1) {
                slot.generation = next;
                self.free.push(id.index);
            }
            self.len -= 1;
            removed += 1;
            stack.extend(node.children().map(|(_, child)| child));
        }
        removed
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathTree")
            .field("config", &self.config)
            .field("len", &self.len)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
