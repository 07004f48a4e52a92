use std::fmt;

/// The open set ran dry before any goal node was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNotFound {
    /// Number of nodes expanded before giving up.
    pub expanded: usize,
}

impl fmt::Display for PathNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path not found: goal unreachable after expanding {} nodes",
            self.expanded
        )
    }
}

impl std::error::Error for PathNotFound {}
