use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct LoadingText;

/// The scene runs once the manifest is in; photo textures keep streaming in
/// behind it.
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.manifest_loaded {
        println!("→ Scene content ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn update_loading_text(
    progress: Res<LoadingProgress>,
    mut query: Query<&mut Text, With<LoadingText>>,
) {
    for mut text in &mut query {
        text.0 = if !progress.manifest_loaded {
            "Loading scene manifest...".to_string()
        } else if !progress.photos_loaded {
            "Loading photos...".to_string()
        } else {
            String::new()
        };
    }
}

pub fn despawn_loading_text(
    mut commands: Commands,
    query: Query<Entity, With<LoadingText>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
