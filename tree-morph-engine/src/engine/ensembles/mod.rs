//! The five ensemble variants and their per-frame updaters.
//!
//! Every updater follows the same pass: blend the dual placement by the
//! shared morph progress, add the ensemble's secondary motion, orient, scale,
//! and write the result into the instance buffer or the entity transform.
//! All updaters run after the progress advance within the same tick, so they
//! observe one frozen progress value per frame.

pub mod captions;
pub mod ornaments;
pub mod particles;
pub mod photo_frames;
pub mod star;

use bevy::prelude::*;
use constants::scene::SCENE_ROOT_Y;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::scene::ContentRoot;

/// Spawns the scene root and every ensemble that needs no loaded content.
pub fn spawn_scene_content(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let root = commands
        .spawn((
            ContentRoot::default(),
            Transform::from_xyz(0.0, SCENE_ROOT_Y, 0.0),
            Visibility::default(),
        ))
        .id();

    let mut rng = rand::rng();
    particles::spawn_particles(&mut commands, &mut meshes, root, &mut rng);
    ornaments::spawn_ornaments(&mut commands, &mut meshes, root, &mut rng);
    star::spawn_star(&mut commands, &mut meshes, &mut materials, root);
}

/// Spawns the manifest-driven ensembles once the scene content is loaded.
pub fn spawn_manifest_ensembles(
    mut commands: Commands,
    manifest: Option<Res<SceneManifest>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    roots: Query<Entity, With<ContentRoot>>,
) {
    let Some(manifest) = manifest else {
        return;
    };
    let Ok(root) = roots.single() else {
        return;
    };

    let mut rng = rand::rng();
    captions::spawn_captions(&mut commands, &manifest, root, &mut rng);
    photo_frames::spawn_photo_frames(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &manifest,
        root,
        &mut rng,
    );
    info!(
        "Spawned {} captions and {} photo frames",
        manifest.captions.len(),
        manifest.photos.len()
    );
}
