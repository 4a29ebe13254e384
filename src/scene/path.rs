// src/scene/path.rs
//! Hierarchical node paths.
//!
//! A node is addressed by its full path from the scene root, with segments
//! joined by `|` and a leading separator: `|rig|light1|lightShape1`. Path
//! string length is monotonic with depth under this scheme, which the batch
//! renamer relies on for its processing order.

use std::fmt;

/// Segment separator used in full node paths
pub const SEPARATOR: char = '|';

/// Full path of a scene-graph node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(String);

impl NodePath {
    /// Creates a path from its string form, adding the leading separator
    /// if the caller left it off.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.starts_with(SEPARATOR) {
            Self(path)
        } else {
            Self(format!("{}{}", SEPARATOR, path))
        }
    }

    /// Path of a root-level node with the given name
    pub fn root(name: &str) -> Self {
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment (the node's own name)
    pub fn short_name(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or("")
    }

    /// Path of the parent node, or `None` for root-level nodes
    pub fn parent(&self) -> Option<NodePath> {
        let idx = self.0.rfind(SEPARATOR)?;
        if idx == 0 {
            None
        } else {
            Some(Self(self.0[..idx].to_string()))
        }
    }

    /// Path of a direct child with the given name
    pub fn child(&self, name: &str) -> NodePath {
        Self(format!("{}{}{}", self.0, SEPARATOR, name))
    }

    /// Number of segments in the path
    pub fn depth(&self) -> usize {
        self.0.matches(SEPARATOR).count()
    }

    /// Same node with the last segment replaced
    pub fn with_short_name(&self, name: &str) -> NodePath {
        match self.parent() {
            Some(parent) => parent.child(name),
            None => Self::root(name),
        }
    }

    /// True when `self` is strictly below `ancestor`
    pub fn is_descendant_of(&self, ancestor: &NodePath) -> bool {
        self.0.len() > ancestor.0.len()
            && self.0.starts_with(&ancestor.0)
            && self.0[ancestor.0.len()..].starts_with(SEPARATOR)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_is_last_segment() {
        let path = NodePath::new("|rig|light1|lightShape1");
        assert_eq!(path.short_name(), "lightShape1");
        assert_eq!(NodePath::root("top").short_name(), "top");
    }

    #[test]
    fn parent_of_root_node_is_none() {
        assert_eq!(NodePath::root("top").parent(), None);
        assert_eq!(
            NodePath::new("|a|b").parent(),
            Some(NodePath::root("a"))
        );
    }

    #[test]
    fn descendant_check_respects_segment_boundaries() {
        let a = NodePath::new("|group");
        let b = NodePath::new("|group|child");
        let c = NodePath::new("|group2");
        assert!(b.is_descendant_of(&a));
        assert!(!c.is_descendant_of(&a));
        assert!(!a.is_descendant_of(&a));
    }

    #[test]
    fn deeper_paths_are_longer_strings() {
        let parent = NodePath::new("|a|bbbbbbbbbb");
        let child = parent.child("c");
        assert!(child.as_str().len() > parent.as_str().len());
    }
}
