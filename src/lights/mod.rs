//! # Lights Module
//!
//! Everything behind the lighting panel: the recognized light kinds, the
//! row controller that mirrors scene lights, the light-file format, and
//! the immediate-mode panel itself.
//!
//! The controller never touches a host directly; both it and the panel go
//! through [`SceneGraph`](crate::scene::SceneGraph), so the whole module
//! runs headless in tests.

pub mod kind;
pub mod manager;
pub mod panel;
pub mod records;

// Re-export main types
pub use kind::LightKind;
pub use manager::{LightManager, LightRow};
pub use panel::{light_panel, LightPanelState};
pub use records::{
    default_export_dir, read_light_file, write_light_file, LightFile, LightIoError, LightRecord,
};
