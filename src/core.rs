use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

/// Failures reported by [`PathTree`](crate::PathTree) operations.
///
/// A failed operation never mutates the tree: every error is raised while the path is still
/// being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `path` does not resolve; `segment` is the first step with no matching child.
    #[error("directory not found: '{path}' (no '{segment}')")]
    NotFound { path: String, segment: String },

    #[error("the root directory cannot be removed")]
    RootRemoval,
}

impl TreeError {
    pub(crate) fn not_found(path: &str, segment: &str) -> Self {
        TreeError::NotFound {
            path: path.to_owned(),
            segment: segment.to_owned(),
        }
    }

    /// Returns true for `NotFound`, false for every other kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }
}

pub mod utils {
    pub const SEPARATOR: char = '/';

    /// Splits `path` into traversal steps. The empty path has no steps (it is the root); any
    /// other path is split on every separator, so `"a//b"` yields an empty middle segment.
    pub fn segments(path: &str) -> impl Iterator<Item = &str> {
        (!path.is_empty())
            .then(|| path.split(SEPARATOR))
            .into_iter()
            .flatten()
    }
}
