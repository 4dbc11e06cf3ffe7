use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;

use super::progress::LoadingProgress;

const MANIFEST_PATH: &str = "scene/manifest.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

/// Kicks off the manifest load at startup.
pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    println!("Loading scene manifest from: {MANIFEST_PATH}");
    loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Promotes the manifest to a resource once the asset is in. A load failure
/// leaves the app in the loading state; Bevy reports the asset error itself.
pub fn poll_manifest(
    mut progress: ResMut<LoadingProgress>,
    loader: Res<ManifestLoader>,
    manifests: Res<Assets<SceneManifest>>,
    mut commands: Commands,
) {
    if progress.manifest_loaded {
        return;
    }
    let Some(ref handle) = loader.handle else {
        return;
    };
    if let Some(manifest) = manifests.get(handle) {
        println!("✓ Scene manifest loaded");
        commands.insert_resource(manifest.clone());
        progress.manifest_loaded = true;
    }
}
