// src/lib.rs
//! Lightdesk
//!
//! Lighting-panel and batch-renaming utilities for 3D content tools. The
//! host application's scene graph sits behind a narrow capability trait,
//! so everything here also runs headless against the bundled in-memory
//! scene.

pub mod lights;
pub mod prelude;
pub mod rename;
pub mod scene;
pub mod ui;

// Re-export main types for convenience
pub use lights::LightManager;
pub use scene::{MemoryScene, SceneGraph};

/// Creates a light manager already populated from the given scene
pub fn light_manager(scene: &dyn SceneGraph) -> LightManager {
    let mut manager = LightManager::new();
    manager.populate(scene);
    manager
}
