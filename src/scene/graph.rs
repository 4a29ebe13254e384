// src/scene/graph.rs
//! Scene-graph capability interface.
//!
//! Everything the tools in this crate do to a scene goes through the
//! [`SceneGraph`] trait: list nodes, create them, read and write attributes,
//! rename, delete. Host applications implement it over their own object
//! model; [`MemoryScene`](super::MemoryScene) implements it in-memory for
//! headless use and tests.

use cgmath::Vector3;

use super::path::NodePath;

/// Attribute value stored on a scene node
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Float(f32),
    Vec3(Vector3<f32>),
    Bool(bool),
    Str(String),
}

impl AttrValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vector3<f32>> {
        match self {
            AttrValue::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// Errors surfaced by scene-graph operations
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// No node exists at the given path
    #[error("no node at {0}")]
    NodeNotFound(NodePath),

    /// The node exists but carries no attribute with that name
    #[error("node {path} has no attribute `{attr}`")]
    AttrNotFound { path: NodePath, attr: String },

    /// The attribute holds a different value kind than the one requested
    #[error("attribute `{attr}` on {path} holds a different value kind")]
    AttrType { path: NodePath, attr: String },

    /// A sibling with the requested name already exists
    #[error("a sibling named `{0}` already exists")]
    NameTaken(String),
}

/// Narrow read/write interface to a host scene graph
///
/// The trait is deliberately small: the renamer and the light panel only
/// need listing, creation, attribute access, rename and delete. Selection
/// is read-only here; changing it is the host's business.
pub trait SceneGraph {
    /// Every node in the scene, as full paths
    fn ls(&self) -> Vec<NodePath>;

    /// Every node of the given type tag
    fn ls_type(&self, node_type: &str) -> Vec<NodePath>;

    /// Currently selected nodes
    fn selection(&self) -> Vec<NodePath>;

    /// Direct children of a node
    fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, SceneError>;

    /// Type tag of a node (e.g. `transform`, `mesh`, `pointLight`)
    fn node_type(&self, path: &NodePath) -> Result<String, SceneError>;

    /// Creates a node of the given type under `parent` (or at the root).
    ///
    /// The requested name is uniquified against existing siblings; the
    /// path actually used is returned.
    fn create_node(
        &mut self,
        node_type: &str,
        name: &str,
        parent: Option<&NodePath>,
    ) -> Result<NodePath, SceneError>;

    fn get_attr(&self, path: &NodePath, attr: &str) -> Result<AttrValue, SceneError>;

    fn set_attr(&mut self, path: &NodePath, attr: &str, value: AttrValue)
        -> Result<(), SceneError>;

    /// Renames a node, keeping it under the same parent. Descendant paths
    /// move with it. Returns the node's new path.
    fn rename(&mut self, path: &NodePath, new_short_name: &str) -> Result<NodePath, SceneError>;

    /// Deletes a node and its whole subtree
    fn delete(&mut self, path: &NodePath) -> Result<(), SceneError>;
}
