// src/scene/memory.rs
//! In-memory scene graph.
//!
//! A [`SceneGraph`] implementation with no host behind it. Used as the test
//! double for the renamer and the light panel, and usable directly when the
//! crate runs headless.

use std::collections::{BTreeMap, HashMap};

use super::graph::{AttrValue, SceneError, SceneGraph};
use super::path::NodePath;

#[derive(Debug, Clone)]
struct Node {
    node_type: String,
    attrs: HashMap<String, AttrValue>,
}

/// In-memory scene graph
///
/// Nodes are keyed by full path; parent/child structure is implicit in the
/// paths. Iteration order is deterministic (path order).
#[derive(Default)]
pub struct MemoryScene {
    nodes: BTreeMap<NodePath, Node>,
    selection: Vec<NodePath>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current selection
    pub fn select(&mut self, paths: &[NodePath]) {
        self.selection = paths.to_vec();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.nodes.contains_key(path)
    }

    fn node(&self, path: &NodePath) -> Result<&Node, SceneError> {
        self.nodes
            .get(path)
            .ok_or_else(|| SceneError::NodeNotFound(path.clone()))
    }

    fn sibling_exists(&self, parent: Option<&NodePath>, name: &str) -> bool {
        let candidate = match parent {
            Some(parent) => parent.child(name),
            None => NodePath::root(name),
        };
        self.nodes.contains_key(&candidate)
    }

    /// Uniquifies a node name against its siblings by bumping a trailing
    /// counter, so `pointLight1` becomes `pointLight2` when taken.
    fn ensure_unique_name(&self, parent: Option<&NodePath>, desired: &str) -> String {
        if !self.sibling_exists(parent, desired) {
            return desired.to_string();
        }

        let stem = desired.trim_end_matches(|c: char| c.is_ascii_digit());
        let mut counter: u32 = desired[stem.len()..].parse().unwrap_or(1);
        let mut candidate = desired.to_string();

        while self.sibling_exists(parent, &candidate) {
            counter += 1;
            candidate = format!("{}{}", stem, counter);
        }

        candidate
    }

    /// Collects a path and all of its descendants
    fn subtree(&self, path: &NodePath) -> Vec<NodePath> {
        self.nodes
            .keys()
            .filter(|p| *p == path || p.is_descendant_of(path))
            .cloned()
            .collect()
    }
}

impl SceneGraph for MemoryScene {
    fn ls(&self) -> Vec<NodePath> {
        self.nodes.keys().cloned().collect()
    }

    fn ls_type(&self, node_type: &str) -> Vec<NodePath> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.node_type == node_type)
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn selection(&self) -> Vec<NodePath> {
        self.selection.clone()
    }

    fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, SceneError> {
        self.node(path)?;
        Ok(self
            .nodes
            .keys()
            .filter(|p| p.parent().as_ref() == Some(path))
            .cloned()
            .collect())
    }

    fn node_type(&self, path: &NodePath) -> Result<String, SceneError> {
        Ok(self.node(path)?.node_type.clone())
    }

    fn create_node(
        &mut self,
        node_type: &str,
        name: &str,
        parent: Option<&NodePath>,
    ) -> Result<NodePath, SceneError> {
        if let Some(parent) = parent {
            self.node(parent)?;
        }

        let name = self.ensure_unique_name(parent, name);
        let path = match parent {
            Some(parent) => parent.child(&name),
            None => NodePath::root(&name),
        };

        self.nodes.insert(
            path.clone(),
            Node {
                node_type: node_type.to_string(),
                attrs: HashMap::new(),
            },
        );

        Ok(path)
    }

    fn get_attr(&self, path: &NodePath, attr: &str) -> Result<AttrValue, SceneError> {
        self.node(path)?
            .attrs
            .get(attr)
            .cloned()
            .ok_or_else(|| SceneError::AttrNotFound {
                path: path.clone(),
                attr: attr.to_string(),
            })
    }

    fn set_attr(
        &mut self,
        path: &NodePath,
        attr: &str,
        value: AttrValue,
    ) -> Result<(), SceneError> {
        let node = self
            .nodes
            .get_mut(path)
            .ok_or_else(|| SceneError::NodeNotFound(path.clone()))?;
        node.attrs.insert(attr.to_string(), value);
        Ok(())
    }

    fn rename(&mut self, path: &NodePath, new_short_name: &str) -> Result<NodePath, SceneError> {
        self.node(path)?;

        let new_path = path.with_short_name(new_short_name);
        if new_path == *path {
            return Ok(new_path);
        }
        if self.nodes.contains_key(&new_path) {
            return Err(SceneError::NameTaken(new_short_name.to_string()));
        }

        // Move the node and every descendant to the new prefix.
        for old in self.subtree(path) {
            let node = self.nodes.remove(&old).ok_or_else(|| {
                SceneError::NodeNotFound(old.clone())
            })?;
            let suffix = &old.as_str()[path.as_str().len()..];
            let moved = NodePath::new(format!("{}{}", new_path.as_str(), suffix));
            self.nodes.insert(moved.clone(), node);

            if let Some(slot) = self.selection.iter_mut().find(|p| **p == old) {
                *slot = moved;
            }
        }

        Ok(new_path)
    }

    fn delete(&mut self, path: &NodePath) -> Result<(), SceneError> {
        self.node(path)?;

        for doomed in self.subtree(path) {
            self.nodes.remove(&doomed);
            self.selection.retain(|p| *p != doomed);
        }

        Ok(())
    }
}
