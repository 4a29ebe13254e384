// src/rename/mod.rs
//! # Batch Renamer
//!
//! Appends type-based suffixes to scene objects in one pass. An object's
//! effective type is usually its own, but a node with exactly one child is
//! typed by that child: hosts commonly model a light or a mesh as a
//! transform parenting a single shape, and the transform should be named
//! after what it carries.
//!
//! Objects are processed deepest-first (by path string length) so renaming
//! a parent never invalidates the stored path of a descendant that is still
//! waiting its turn.

pub mod suffix;

pub use suffix::SuffixTable;

use crate::scene::{NodePath, SceneError, SceneGraph};

/// Errors from a rename pass
#[derive(thiserror::Error, Debug)]
pub enum RenameError {
    /// `selection_only` was requested with nothing selected
    #[error("nothing is selected")]
    EmptySelection,

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Runs a suffixing pass over the scene.
///
/// With `selection_only` set, only the selected nodes and their descendants
/// are processed; otherwise the whole scene is. Returns the processed
/// paths in processing order, reflecting any rename performed at each
/// position. Running the pass twice is a no-op the second time.
///
/// An object whose rename fails (say the target name is already taken by
/// a sibling) is logged and skipped; the rest of the batch proceeds.
///
/// # Arguments
/// * `scene` - Scene to operate on
/// * `table` - Suffix rules for this pass
/// * `selection_only` - Restrict the pass to the current selection
pub fn apply_suffixes(
    scene: &mut dyn SceneGraph,
    table: &SuffixTable,
    selection_only: bool,
) -> Result<Vec<NodePath>, RenameError> {
    let mut objects = if selection_only {
        let selection = scene.selection();
        if selection.is_empty() {
            return Err(RenameError::EmptySelection);
        }
        with_descendants(scene, selection)
    } else {
        scene.ls()
    };

    // Deepest first: a path is always longer than its ancestor's.
    objects.sort_by(|a, b| b.as_str().len().cmp(&a.as_str().len()));

    for i in 0..objects.len() {
        let path = objects[i].clone();

        let children = scene.children(&path)?;
        let effective_type = if children.len() == 1 {
            scene.node_type(&children[0])?
        } else {
            scene.node_type(&path)?
        };

        let Some(suffix) = table.suffix_for(&effective_type) else {
            continue;
        };

        let short_name = path.short_name();
        if short_name.ends_with(&format!("_{}", suffix)) {
            continue;
        }

        let new_name = format!("{}_{}", short_name, suffix);
        log::debug!("renaming {} -> {}", path, new_name);
        match scene.rename(&path, &new_name) {
            Ok(renamed) => objects[i] = renamed,
            // Only the empty-selection precondition aborts; a bad item
            // is skipped and the rest of the batch proceeds.
            Err(err) => log::info!("skipping {}: {}", path, err),
        }
    }

    Ok(objects)
}

/// Expands a node set to include every descendant, without duplicates
fn with_descendants(scene: &dyn SceneGraph, roots: Vec<NodePath>) -> Vec<NodePath> {
    let mut result: Vec<NodePath> = Vec::new();
    for path in scene.ls() {
        if roots
            .iter()
            .any(|root| path == *root || path.is_descendant_of(root))
            && !result.contains(&path)
        {
            result.push(path);
        }
    }
    result
}
