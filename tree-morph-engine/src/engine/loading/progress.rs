use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub photos_requested: bool,
    pub photos_loaded: bool,
}
