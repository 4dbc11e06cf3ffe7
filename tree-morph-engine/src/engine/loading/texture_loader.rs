use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;

use super::progress::LoadingProgress;

/// Handles for the photo textures, requested as soon as the manifest is in.
/// The frames load the same paths, so the asset server shares the work; this
/// resource only exists to track readiness.
#[derive(Resource, Default)]
pub struct PhotoTextures {
    pub handles: Vec<Handle<Image>>,
}

pub fn request_photo_textures(
    manifest: Option<Res<SceneManifest>>,
    asset_server: Res<AssetServer>,
    mut textures: ResMut<PhotoTextures>,
    mut progress: ResMut<LoadingProgress>,
) {
    if progress.photos_requested {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    textures.handles = manifest
        .photos
        .iter()
        .map(|photo| asset_server.load(photo.image.as_str()))
        .collect();
    progress.photos_requested = true;
    println!("Requested {} photo textures", textures.handles.len());
}

pub fn check_photo_textures(
    asset_server: Res<AssetServer>,
    textures: Res<PhotoTextures>,
    mut progress: ResMut<LoadingProgress>,
) {
    if !progress.photos_requested || progress.photos_loaded {
        return;
    }
    let all_loaded = textures
        .handles
        .iter()
        .all(|handle| asset_server.is_loaded_with_dependencies(handle));
    if all_loaded {
        progress.photos_loaded = true;
        info!("All photo textures resident");
    }
}
