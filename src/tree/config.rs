/// Construction-time settings for a [`PathTree`](crate::PathTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Name of the synthetic root; shows up in `path_of()` and in listings of the whole tree.
    pub root_name: String,
    /// Prefix repeated once per depth level in listings.
    pub indent: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_name: String::from("Root"),
            indent: String::from("  "),
        }
    }
}

impl TreeConfig {
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TreeConfig::default();
        assert_eq!(config.root_name, "Root");
        assert_eq!(config.indent, "  ");
    }

    #[test]
    fn test_builder() {
        let config = TreeConfig::default()
            .with_root_name("home")
            .with_indent("\t");
        assert_eq!(config.root_name, "home");
        assert_eq!(config.indent, "\t");
    }
}
