use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    Window {
        title: "Tree Morph".into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
