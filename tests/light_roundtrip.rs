//! Light manager behavior: persistence round-trips and solo handling.

use anyhow::Result;
use cgmath::Vector3;
use lightdesk::lights::{read_light_file, write_light_file, LightFile, LightRecord};
use lightdesk::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn export_then_import_round_trips_light_values() -> Result<()> {
    init_logging();
    let mut scene = MemoryScene::new();
    let mut manager = LightManager::new();

    let shape = manager.create_light(&mut scene, LightKind::Spot)?;
    let transform = shape.parent().unwrap();
    manager.set_intensity(&mut scene, 0, 42.5)?;
    manager.set_color(&mut scene, 0, [0.25, 0.5, 1.0])?;
    scene.set_attr(
        &transform,
        "translate",
        AttrValue::Vec3(Vector3::new(1.0, 2.0, -3.0)),
    )?;
    scene.set_attr(
        &transform,
        "rotate",
        AttrValue::Vec3(Vector3::new(0.0, 45.0, 90.0)),
    )?;

    let dir = tempfile::tempdir()?;
    let file = manager.export_lights(&scene, dir.path())?;

    let mut fresh_scene = MemoryScene::new();
    let mut fresh_manager = LightManager::new();
    fresh_manager.import_lights(&mut fresh_scene, &file)?;

    assert_eq!(fresh_manager.row_count(), 1);
    let row = fresh_manager.row(0).unwrap();
    assert_eq!(fresh_scene.node_type(&row.shape)?, "spotLight");
    assert_eq!(
        fresh_scene.get_attr(&row.shape, "intensity")?,
        AttrValue::Float(42.5)
    );
    assert_eq!(
        fresh_scene.get_attr(&row.shape, "color")?,
        AttrValue::Vec3(Vector3::new(0.25, 0.5, 1.0))
    );
    assert_eq!(
        fresh_scene.get_attr(&row.transform, "translate")?,
        AttrValue::Vec3(Vector3::new(1.0, 2.0, -3.0))
    );
    assert_eq!(
        fresh_scene.get_attr(&row.transform, "rotate")?,
        AttrValue::Vec3(Vector3::new(0.0, 45.0, 90.0))
    );

    Ok(())
}

#[test]
fn export_writes_one_record_per_displayed_light() -> Result<()> {
    init_logging();
    let mut scene = MemoryScene::new();
    let mut manager = LightManager::new();
    manager.create_light(&mut scene, LightKind::Point)?;
    manager.create_light(&mut scene, LightKind::Area)?;

    let dir = tempfile::tempdir()?;
    let file = manager.export_lights(&scene, dir.path())?;
    let records = read_light_file(&file)?;

    assert_eq!(records.len(), 2);
    assert!(records.contains_key("|pointLight1"));
    assert!(records.contains_key("|areaLight1"));
    assert_eq!(records["|pointLight1"].light_type, "pointLight");

    Ok(())
}

#[test]
fn crate_root_constructor_populates_from_the_scene() -> Result<()> {
    init_logging();
    let mut scene = MemoryScene::new();
    let mut setup = LightManager::new();
    setup.create_light(&mut scene, LightKind::Volume)?;

    let manager = lightdesk::light_manager(&scene);
    assert_eq!(manager.row_count(), 1);

    Ok(())
}

#[test]
fn import_skips_unrecognized_light_types() -> Result<()> {
    init_logging();
    let mut records = LightFile::new();
    records.insert(
        "|mysteryLight1".to_string(),
        LightRecord {
            translate: [0.0; 3],
            rotation: [0.0; 3],
            light_type: "mysteryLight".to_string(),
            intensity: 5.0,
            color: [1.0, 0.0, 0.0],
        },
    );
    records.insert(
        "|pointLight1".to_string(),
        LightRecord {
            translate: [0.0; 3],
            rotation: [0.0; 3],
            light_type: "pointLight".to_string(),
            intensity: 3.0,
            color: [0.0, 1.0, 0.0],
        },
    );

    let dir = tempfile::tempdir()?;
    let file = write_light_file(dir.path(), &records)?;

    let mut scene = MemoryScene::new();
    let mut manager = LightManager::new();
    manager.import_lights(&mut scene, &file)?;

    // the unknown record is skipped, the rest of the batch proceeds
    assert_eq!(manager.row_count(), 1);
    assert_eq!(
        scene.node_type(&manager.row(0).unwrap().shape)?,
        "pointLight"
    );

    Ok(())
}

#[test]
fn import_from_a_missing_file_is_an_error() {
    init_logging();
    let mut scene = MemoryScene::new();
    let mut manager = LightManager::new();

    let result = manager.import_lights(&mut scene, std::path::Path::new("/no/such/lightfile.json"));
    assert!(result.is_err());
    assert!(manager.is_empty());
}

#[test]
fn solo_disables_every_other_light() -> Result<()> {
    init_logging();
    let mut scene = MemoryScene::new();
    let mut manager = LightManager::new();
    manager.create_light(&mut scene, LightKind::Point)?;
    manager.create_light(&mut scene, LightKind::Spot)?;
    manager.create_light(&mut scene, LightKind::Directional)?;

    manager.set_solo(&mut scene, 1, true)?;

    for (i, row) in manager.rows().iter().enumerate() {
        let visible = scene
            .get_attr(&row.transform, "visibility")?
            .as_bool()
            .unwrap();
        if i == 1 {
            assert!(visible, "soloed light stays visible");
            assert!(row.solo);
        } else {
            assert!(!visible, "other lights are hidden");
            assert!(!row.enabled);
        }
    }

    Ok(())
}

#[test]
fn un_soloing_restores_the_other_lights() -> Result<()> {
    init_logging();
    let mut scene = MemoryScene::new();
    let mut manager = LightManager::new();
    manager.create_light(&mut scene, LightKind::Point)?;
    manager.create_light(&mut scene, LightKind::Spot)?;

    manager.set_solo(&mut scene, 0, true)?;
    manager.set_solo(&mut scene, 0, false)?;

    for row in manager.rows() {
        assert!(row.enabled);
        assert_eq!(
            scene.get_attr(&row.transform, "visibility")?,
            AttrValue::Bool(true)
        );
    }

    Ok(())
}
