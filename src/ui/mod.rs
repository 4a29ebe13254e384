//! # User Interface Module
//!
//! Dear ImGui glue for hosting the crate's panels. The panels themselves
//! are plain functions taking `&imgui::Ui` plus the state they front, so a
//! host embeds them in whatever frame loop it already runs:
//!
//! ```no_run
//! use lightdesk::lights::{light_panel, LightManager, LightPanelState};
//! use lightdesk::scene::MemoryScene;
//! use lightdesk::ui::PanelDock;
//!
//! let mut scene = MemoryScene::new();
//! let mut manager = LightManager::new();
//! let mut panel_state = LightPanelState::default();
//! let mut dock = PanelDock::new();
//! dock.open("Lighting Manager");
//!
//! // inside the host's per-frame UI callback:
//! # fn per_frame(ui: &imgui::Ui, dock: &PanelDock, panel_state: &mut LightPanelState,
//! #              manager: &mut LightManager, scene: &mut MemoryScene) {
//! if dock.is_open("Lighting Manager") {
//!     light_panel(ui, panel_state, manager, scene);
//! }
//! # }
//! ```
//!
//! [`PanelDock`] keeps the "single instance per panel name" rule explicit
//! instead of hiding it in a module-level singleton.

pub mod dock;

// Re-export main types
pub use dock::PanelDock;
