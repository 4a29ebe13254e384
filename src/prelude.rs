//! # Lightdesk Prelude
//!
//! Convenient single import for typical embedding code:
//!
//! ```rust
//! use lightdesk::prelude::*;
//! ```

// Re-export scene capability types
pub use crate::scene::{AttrValue, MemoryScene, NodePath, SceneError, SceneGraph};

// Re-export renamer entry points
pub use crate::rename::{apply_suffixes, RenameError, SuffixTable};

// Re-export light panel types
pub use crate::lights::{
    light_panel, LightKind, LightManager, LightPanelState, LightRecord,
};
pub use crate::ui::PanelDock;

// Re-export common external dependencies
pub use cgmath::Vector3;
pub use imgui::Ui;
