// src/lights/records.rs
//! Light file serialization.
//!
//! One export writes a single JSON object whose keys are the lights'
//! transform paths and whose values are [`LightRecord`]s. There is no
//! schema version field; the format is exactly what the panel gathers.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Per-light export/import unit
///
/// Color always has exactly 3 components, each in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRecord {
    pub translate: [f32; 3],
    pub rotation: [f32; 3],
    #[serde(rename = "lightType")]
    pub light_type: String,
    pub intensity: f32,
    pub color: [f32; 3],
}

/// Contents of one light file, keyed by transform path
pub type LightFile = BTreeMap<String, LightRecord>;

/// Errors from reading or writing light files
#[derive(thiserror::Error, Debug)]
pub enum LightIoError {
    #[error("light file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("light file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Scene(#[from] crate::scene::SceneError),
}

/// Default directory for exported light files:
/// `<per-user data dir>/lightManager`
pub fn default_export_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lightManager")
}

/// File name for an export started now: `lightfile_<MMDDHH>.json`
pub fn export_file_name() -> String {
    format!("lightfile_{}.json", Local::now().format("%m%d%H"))
}

/// Writes a timestamped light file into `dir`, creating the directory if
/// it is absent. Returns the path written.
pub fn write_light_file(dir: &Path, records: &LightFile) -> Result<PathBuf, LightIoError> {
    fs::create_dir_all(dir)?;

    let path = dir.join(export_file_name());
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json)?;

    log::info!("saved light file to {}", path.display());
    Ok(path)
}

/// Reads a light file written by [`write_light_file`]
pub fn read_light_file(path: &Path) -> Result<LightFile, LightIoError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_use_the_on_disk_names() {
        let record = LightRecord {
            translate: [1.0, 2.0, 3.0],
            rotation: [0.0, 90.0, 0.0],
            light_type: "pointLight".to_string(),
            intensity: 2.5,
            color: [1.0, 0.5, 0.25],
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"lightType\""));
        assert!(json.contains("\"translate\""));
        assert!(json.contains("\"rotation\""));

        let back: LightRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn export_file_name_shape() {
        let name = export_file_name();
        assert!(name.starts_with("lightfile_"));
        assert!(name.ends_with(".json"));
        // MMDDHH timestamp
        assert_eq!(name.len(), "lightfile_".len() + 6 + ".json".len());
    }
}
