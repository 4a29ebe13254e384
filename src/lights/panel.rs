// src/lights/panel.rs
//! Lighting panel for embedding hosts
//!
//! Draws the light manager as an immediate-mode window: a light-type
//! selector with a Create button, one row per light (visibility checkbox,
//! Solo toggle, Delete, intensity slider and a color swatch opening the
//! color editor), and Export / Import / Refresh along the bottom.

use std::path::{Path, PathBuf};

use imgui::StyleColor;

use crate::scene::SceneGraph;

use super::kind::LightKind;
use super::manager::LightManager;
use super::records::default_export_dir;

/// UI state owned by the panel between frames
pub struct LightPanelState {
    /// Index into [`LightKind::ALL`] for the type selector
    pub selected_kind: usize,
    /// Path buffer for the import field
    pub import_path: String,
    /// Where the last export landed, for display
    pub last_export: Option<PathBuf>,
}

impl Default for LightPanelState {
    fn default() -> Self {
        Self {
            selected_kind: 0,
            import_path: String::new(),
            last_export: None,
        }
    }
}

/// Draws the lighting panel
///
/// # Arguments
/// * `ui` - ImGui UI context
/// * `state` - Panel UI state kept across frames
/// * `manager` - Light manager the panel fronts
/// * `scene` - Scene the manager operates on
pub fn light_panel(
    ui: &imgui::Ui,
    state: &mut LightPanelState,
    manager: &mut LightManager,
    scene: &mut dyn SceneGraph,
) {
    let display_size = ui.io().display_size;
    // Guard against invalid display size that could cause crashes
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }
    let panel_width = (display_size[0] * 0.25).max(360.0).min(480.0);
    let panel_height = (display_size[1] * 0.7).max(420.0);

    ui.window("Lighting Manager")
        .size([panel_width, panel_height], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            render_create_controls(ui, state, manager, scene);
            ui.separator();
            render_light_rows(ui, manager, scene);
            ui.separator();
            render_file_controls(ui, state, manager, scene);
        });
}

/// Renders the light-type selector and Create button
fn render_create_controls(
    ui: &imgui::Ui,
    state: &mut LightPanelState,
    manager: &mut LightManager,
    scene: &mut dyn SceneGraph,
) {
    let labels: Vec<&str> = LightKind::ALL.iter().map(|kind| kind.label()).collect();

    ui.set_next_item_width(-80.0);
    ui.combo_simple_string("##light_type", &mut state.selected_kind, &labels);
    ui.same_line();
    if ui.button("Create") {
        let kind = LightKind::ALL[state.selected_kind];
        if let Err(err) = manager.create_light(scene, kind) {
            log::warn!("could not create {}: {}", kind, err);
        }
    }
}

/// Renders one row per light inside a scrolling region
fn render_light_rows(ui: &imgui::Ui, manager: &mut LightManager, scene: &mut dyn SceneGraph) {
    if manager.is_empty() {
        render_empty_state(ui);
        return;
    }

    ui.child_window("light_rows")
        .size([0.0, -64.0])
        .border(true)
        .build(|| {
            let mut pending_delete = None;

            for i in 0..manager.row_count() {
                let _row_id = ui.push_id_usize(i);

                let (label, mut enabled, solo, mut intensity, mut color) = {
                    let row = &manager.rows()[i];
                    (
                        row.transform.short_name().to_string(),
                        row.enabled,
                        row.solo,
                        row.intensity,
                        row.color,
                    )
                };

                if ui.checkbox(&label, &mut enabled) {
                    if let Err(err) = manager.set_visibility(scene, i, enabled) {
                        log::warn!("could not toggle {}: {}", label, err);
                    }
                }

                ui.same_line();
                {
                    // Held-down look while the row is soloed
                    let _solo_style = solo.then(|| {
                        ui.push_style_color(StyleColor::Button, [0.26, 0.59, 0.98, 1.0])
                    });
                    if ui.small_button("Solo") {
                        if let Err(err) = manager.set_solo(scene, i, !solo) {
                            log::warn!("could not solo {}: {}", label, err);
                        }
                    }
                }

                ui.same_line();
                if ui.small_button("Delete") {
                    pending_delete = Some(i);
                }

                ui.set_next_item_width(-40.0);
                if ui.slider("##intensity", 1.0, 1000.0, &mut intensity) {
                    if let Err(err) = manager.set_intensity(scene, i, intensity) {
                        log::warn!("could not set intensity on {}: {}", label, err);
                    }
                }

                ui.same_line();
                ui.set_next_item_width(-1.0);
                if ui.color_edit3("##color", &mut color) {
                    if let Err(err) = manager.set_color(scene, i, color) {
                        log::warn!("could not set color on {}: {}", label, err);
                    }
                }

                ui.spacing();
            }

            if let Some(index) = pending_delete {
                if let Err(err) = manager.delete_light(scene, index) {
                    log::warn!("could not delete light: {}", err);
                }
            }
        });
}

/// Renders the Export / Import / Refresh strip
fn render_file_controls(
    ui: &imgui::Ui,
    state: &mut LightPanelState,
    manager: &mut LightManager,
    scene: &mut dyn SceneGraph,
) {
    if ui.button("Export") {
        match manager.export_lights(scene, &default_export_dir()) {
            Ok(path) => state.last_export = Some(path),
            Err(err) => log::warn!("export failed: {}", err),
        }
    }

    ui.same_line();
    if ui.button("Import") {
        let path = Path::new(&state.import_path);
        if let Err(err) = manager.import_lights(scene, path) {
            log::warn!("import from {} failed: {}", path.display(), err);
        }
    }

    ui.same_line();
    if ui.button("Refresh") {
        manager.populate(scene);
    }

    ui.set_next_item_width(-1.0);
    ui.input_text("##import_path", &mut state.import_path)
        .hint("light file to import")
        .build();

    if let Some(path) = &state.last_export {
        ui.text_disabled(format!("saved {}", path.display()));
    }
}

/// Renders empty state when the scene has no lights
fn render_empty_state(ui: &imgui::Ui) {
    ui.spacing();
    ui.child_window("empty_state")
        .size([0.0, -64.0])
        .border(false)
        .build(|| {
            ui.text("No Lights");
            ui.spacing();
            ui.text("Create one with the selector above,");
            ui.text("or Import a saved light file.");
        });
}
