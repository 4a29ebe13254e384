// src/lights/manager.rs
//! Light panel controller.
//!
//! [`LightManager`] keeps one [`LightRow`] per scene light and pushes every
//! user action through the [`SceneGraph`] interface: create, delete, solo,
//! visibility, intensity and color edits, plus light-file export/import.
//! It holds no host handles, only node paths.

use std::path::{Path, PathBuf};

use cgmath::Vector3;

use crate::scene::{AttrValue, NodePath, SceneError, SceneGraph};

use super::kind::LightKind;
use super::records::{read_light_file, write_light_file, LightFile, LightIoError, LightRecord};

/// One on-screen row, correlated with one light in the scene
#[derive(Debug, Clone)]
pub struct LightRow {
    /// Transform node parenting the light shape
    pub transform: NodePath,
    /// Shape node carrying the light definition
    pub shape: NodePath,
    /// Checkbox state, mirroring the transform's visibility
    pub enabled: bool,
    /// Whether this row's solo toggle is down
    pub solo: bool,
    /// Slider state for the shape's intensity
    pub intensity: f32,
    /// Swatch cache of the shape's color
    pub color: [f32; 3],
}

/// Controller behind the lighting panel
#[derive(Default)]
pub struct LightManager {
    rows: Vec<LightRow>,
}

impl LightManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[LightRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&LightRow> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rebuilds every row from the scene's current lights.
    ///
    /// All previous rows are discarded first; one row is added per shape
    /// node whose type is a recognized light tag.
    pub fn populate(&mut self, scene: &dyn SceneGraph) {
        self.rows.clear();

        let mut shapes: Vec<NodePath> = Vec::new();
        for kind in LightKind::ALL {
            shapes.extend(scene.ls_type(kind.type_tag()));
        }
        shapes.sort();

        for shape in shapes {
            self.add_row(scene, shape);
        }
    }

    fn add_row(&mut self, scene: &dyn SceneGraph, shape: NodePath) {
        let transform = shape.parent().unwrap_or_else(|| shape.clone());
        self.rows.push(LightRow {
            enabled: bool_attr(scene, &transform, "visibility", true),
            intensity: float_attr(scene, &shape, "intensity", 1.0),
            color: vec3_attr(scene, &shape, "color", Vector3::new(1.0, 1.0, 1.0)).into(),
            transform,
            shape,
            solo: false,
        });
    }

    /// Creates a light of the given kind and adds a row for it.
    ///
    /// The light takes the host's two-node shape: a transform node
    /// parenting a single shape node that carries the light definition.
    /// Returns the new shape path.
    pub fn create_light(
        &mut self,
        scene: &mut dyn SceneGraph,
        kind: LightKind,
    ) -> Result<NodePath, SceneError> {
        let tag = kind.type_tag();
        let transform = scene.create_node("transform", &format!("{}1", tag), None)?;

        // pointLight2 parents pointLightShape2
        let short = transform.short_name();
        let stem = short.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = &short[stem.len()..];
        let shape = scene.create_node(tag, &format!("{}Shape{}", stem, digits), Some(&transform))?;

        scene.set_attr(&transform, "translate", AttrValue::Vec3(Vector3::new(0.0, 0.0, 0.0)))?;
        scene.set_attr(&transform, "rotate", AttrValue::Vec3(Vector3::new(0.0, 0.0, 0.0)))?;
        scene.set_attr(&transform, "visibility", AttrValue::Bool(true))?;
        scene.set_attr(&shape, "intensity", AttrValue::Float(1.0))?;
        scene.set_attr(&shape, "color", AttrValue::Vec3(Vector3::new(1.0, 1.0, 1.0)))?;

        log::debug!("created {} at {}", kind, transform);
        self.add_row(scene, shape.clone());
        Ok(shape)
    }

    /// Removes a row and deletes its light's transform node (and with it
    /// the shape) from the scene.
    pub fn delete_light(
        &mut self,
        scene: &mut dyn SceneGraph,
        index: usize,
    ) -> Result<(), SceneError> {
        if index >= self.rows.len() {
            return Ok(());
        }
        let row = self.rows.remove(index);
        scene.delete(&row.transform)
    }

    /// Toggles solo on one row.
    ///
    /// Every row other than the sender is disabled while solo is on and
    /// re-enabled when it goes off. Concurrent solos are not coordinated
    /// beyond "whoever is not the sender gets disabled".
    pub fn set_solo(
        &mut self,
        scene: &mut dyn SceneGraph,
        index: usize,
        value: bool,
    ) -> Result<(), SceneError> {
        if index >= self.rows.len() {
            return Ok(());
        }
        self.rows[index].solo = value;

        for i in 0..self.rows.len() {
            if i == index {
                continue;
            }
            self.rows[i].enabled = !value;
            let transform = self.rows[i].transform.clone();
            scene.set_attr(&transform, "visibility", AttrValue::Bool(!value))?;
        }
        Ok(())
    }

    /// Shows or hides one light via its transform's visibility
    pub fn set_visibility(
        &mut self,
        scene: &mut dyn SceneGraph,
        index: usize,
        visible: bool,
    ) -> Result<(), SceneError> {
        if let Some(row) = self.rows.get_mut(index) {
            row.enabled = visible;
            scene.set_attr(&row.transform, "visibility", AttrValue::Bool(visible))?;
        }
        Ok(())
    }

    pub fn set_intensity(
        &mut self,
        scene: &mut dyn SceneGraph,
        index: usize,
        intensity: f32,
    ) -> Result<(), SceneError> {
        if let Some(row) = self.rows.get_mut(index) {
            row.intensity = intensity;
            scene.set_attr(&row.shape, "intensity", AttrValue::Float(intensity))?;
        }
        Ok(())
    }

    /// Applies a picked color to both the light and the row's swatch
    pub fn set_color(
        &mut self,
        scene: &mut dyn SceneGraph,
        index: usize,
        color: [f32; 3],
    ) -> Result<(), SceneError> {
        if let Some(row) = self.rows.get_mut(index) {
            row.color = color;
            scene.set_attr(&row.shape, "color", AttrValue::Vec3(color.into()))?;
        }
        Ok(())
    }

    /// Exports every displayed light to a timestamped file under `dir`.
    ///
    /// A row whose nodes have vanished from the scene is logged and left
    /// out; the rest of the batch is still written. Returns the path of
    /// the file written.
    pub fn export_lights(
        &self,
        scene: &dyn SceneGraph,
        dir: &Path,
    ) -> Result<PathBuf, LightIoError> {
        let mut records = LightFile::new();

        for row in &self.rows {
            match self.gather_record(scene, row) {
                Ok(record) => {
                    records.insert(row.transform.as_str().to_string(), record);
                }
                Err(err) => {
                    log::warn!("skipping {} during export: {}", row.transform, err);
                }
            }
        }

        write_light_file(dir, &records)
    }

    fn gather_record(
        &self,
        scene: &dyn SceneGraph,
        row: &LightRow,
    ) -> Result<LightRecord, SceneError> {
        let light_type = scene.node_type(&row.shape)?;
        Ok(LightRecord {
            translate: vec3_attr(scene, &row.transform, "translate", Vector3::new(0.0, 0.0, 0.0))
                .into(),
            rotation: vec3_attr(scene, &row.transform, "rotate", Vector3::new(0.0, 0.0, 0.0))
                .into(),
            light_type,
            intensity: float_attr(scene, &row.shape, "intensity", 1.0),
            color: vec3_attr(scene, &row.shape, "color", Vector3::new(1.0, 1.0, 1.0)).into(),
        })
    }

    /// Imports lights from a file chosen by the caller.
    ///
    /// Each record creates a light of the matching kind and then sets
    /// intensity, color, translation and rotation from the record. A
    /// record whose type tag matches no recognized kind is logged and
    /// skipped. Rows are rebuilt from the scene afterwards.
    pub fn import_lights(
        &mut self,
        scene: &mut dyn SceneGraph,
        path: &Path,
    ) -> Result<(), LightIoError> {
        let records = read_light_file(path)?;

        for (name, record) in records {
            let Some(kind) = LightKind::from_type_tag(&record.light_type) else {
                log::info!(
                    "no corresponding light type for {} (tag `{}`)",
                    name,
                    record.light_type
                );
                continue;
            };

            let shape = self.create_light(scene, kind)?;
            let transform = shape.parent().unwrap_or_else(|| shape.clone());

            scene.set_attr(&shape, "intensity", AttrValue::Float(record.intensity))?;
            scene.set_attr(&shape, "color", AttrValue::Vec3(record.color.into()))?;
            scene.set_attr(&transform, "translate", AttrValue::Vec3(record.translate.into()))?;
            scene.set_attr(&transform, "rotate", AttrValue::Vec3(record.rotation.into()))?;
        }

        self.populate(scene);
        Ok(())
    }
}

fn bool_attr(scene: &dyn SceneGraph, path: &NodePath, attr: &str, default: bool) -> bool {
    scene
        .get_attr(path, attr)
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(default)
}

fn float_attr(scene: &dyn SceneGraph, path: &NodePath, attr: &str, default: f32) -> f32 {
    scene
        .get_attr(path, attr)
        .ok()
        .and_then(|v| v.as_float())
        .unwrap_or(default)
}

fn vec3_attr(
    scene: &dyn SceneGraph,
    path: &NodePath,
    attr: &str,
    default: Vector3<f32>,
) -> Vector3<f32> {
    scene
        .get_attr(path, attr)
        .ok()
        .and_then(|v| v.as_vec3())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;

    #[test]
    fn create_light_builds_transform_plus_shape() {
        let mut scene = MemoryScene::new();
        let mut manager = LightManager::new();

        let shape = manager
            .create_light(&mut scene, LightKind::Point)
            .unwrap();

        assert_eq!(shape, NodePath::new("|pointLight1|pointLightShape1"));
        assert_eq!(scene.node_type(&shape).unwrap(), "pointLight");
        assert_eq!(manager.row_count(), 1);

        let transform = shape.parent().unwrap();
        assert_eq!(scene.children(&transform).unwrap(), vec![shape]);
    }

    #[test]
    fn second_light_of_a_kind_gets_the_next_number() {
        let mut scene = MemoryScene::new();
        let mut manager = LightManager::new();

        manager.create_light(&mut scene, LightKind::Spot).unwrap();
        let second = manager.create_light(&mut scene, LightKind::Spot).unwrap();

        assert_eq!(second, NodePath::new("|spotLight2|spotLightShape2"));
    }

    #[test]
    fn populate_rebuilds_rows_from_scene() {
        let mut scene = MemoryScene::new();
        let mut manager = LightManager::new();
        manager.create_light(&mut scene, LightKind::Point).unwrap();
        manager.create_light(&mut scene, LightKind::Area).unwrap();

        let mut fresh = LightManager::new();
        fresh.populate(&scene);
        assert_eq!(fresh.row_count(), 2);
    }

    #[test]
    fn populate_ignores_non_light_nodes() {
        let mut scene = MemoryScene::new();
        scene.create_node("mesh", "teapot1", None).unwrap();
        let mut manager = LightManager::new();
        manager.populate(&scene);
        assert!(manager.is_empty());
    }

    #[test]
    fn delete_removes_row_and_transform_subtree() {
        let mut scene = MemoryScene::new();
        let mut manager = LightManager::new();
        let shape = manager.create_light(&mut scene, LightKind::Point).unwrap();
        let transform = shape.parent().unwrap();

        manager.delete_light(&mut scene, 0).unwrap();

        assert!(manager.is_empty());
        assert!(!scene.contains(&transform));
        assert!(!scene.contains(&shape));
    }
}
