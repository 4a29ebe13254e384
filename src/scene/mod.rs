//! # Scene Module
//!
//! Narrow capability layer over a host scene graph. The tools in this crate
//! never talk to a host directly; they go through the [`SceneGraph`] trait,
//! which keeps them testable without one. [`MemoryScene`] is the bundled
//! in-memory implementation.

pub mod graph;
pub mod memory;
pub mod path;

// Re-export main types
pub use graph::{AttrValue, SceneError, SceneGraph};
pub use memory::MemoryScene;
pub use path::NodePath;
