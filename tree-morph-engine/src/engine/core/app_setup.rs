use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::camera::{FOV_DEGREES, ORBIT_TARGET};
use constants::palette::{EMERALD_DEEP, GOLD_METALLIC, GOLD_ROSE};

// Crate engine modules
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::{OrbitCamera, Viewpoint, camera_controller, update_viewpoint};
use crate::engine::core::app_state::{
    AppState, FpsText, LoadingText, despawn_loading_text, fps_text_update_system,
    transition_to_running, update_loading_text,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::ensembles::captions::{update_caption_overlays, update_captions};
use crate::engine::ensembles::ornaments::update_ornaments;
use crate::engine::ensembles::particles::update_particles;
use crate::engine::ensembles::photo_frames::{apply_frame_hover, update_photo_frames};
use crate::engine::ensembles::star::update_star;
use crate::engine::ensembles::{spawn_manifest_ensembles, spawn_scene_content};
use crate::engine::loading::{
    LoadingProgress, ManifestLoader, PhotoTextures, check_photo_textures, poll_manifest,
    request_photo_textures, start_loading,
};
use crate::engine::morph::{MorphProgress, SceneModeState, advance_morph_progress};
use crate::engine::render::InstancedEnsemblePlugin;
use crate::engine::scene::rotate_scene_root;
// Crate interaction and gesture modules
use crate::gesture::cursor::{spawn_gesture_cursor, update_gesture_cursor};
use crate::gesture::{GestureControl, GestureState, LandmarkFeed, drain_landmark_feed};
use crate::interaction::{ClickTracker, handle_scene_click, update_frame_hover};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(InstancedEnsemblePlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<PhotoTextures>()
        .init_resource::<SceneModeState>()
        .init_resource::<MorphProgress>()
        .init_resource::<OrbitCamera>()
        .init_resource::<Viewpoint>()
        .init_resource::<ClickTracker>()
        .init_resource::<GestureState>()
        .init_resource::<GestureControl>()
        .insert_resource(LandmarkFeed::disconnected())
        .insert_resource(ClearColor(EMERALD_DEEP));

    // State-based system scheduling
    app.add_systems(Startup, (setup, spawn_scene_content, start_loading).chain())
        .add_systems(
            Update,
            (poll_manifest, update_loading_text, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        // Photo textures keep streaming in regardless of state.
        .add_systems(
            Update,
            (request_photo_textures, check_photo_textures).chain(),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (spawn_manifest_ensembles, despawn_loading_text),
        );

    // The runtime chain fixes the per-tick order: inputs first, then the
    // single progress advance, then every ensemble against that one frozen
    // progress value.
    let runtime_systems = (
        drain_landmark_feed,
        handle_scene_click,
        update_frame_hover,
        apply_frame_hover,
        advance_morph_progress,
        camera_controller,
        update_viewpoint,
        rotate_scene_root,
        update_particles,
        update_ornaments,
        update_captions,
        update_caption_overlays,
        update_photo_frames,
        update_star,
        update_gesture_cursor,
    )
        .chain();
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));
    app.add_systems(Update, fps_text_update_system);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

// Startup system that only handles basic scene scaffolding
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_ui(&mut commands);
    spawn_gesture_cursor(&mut commands);
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 1.0, 35.0).looking_at(ORBIT_TARGET, Vec3::Y),
        DistanceFog {
            color: EMERALD_DEEP,
            falloff: FogFalloff::Linear {
                start: 15.0,
                end: 60.0,
            },
            ..default()
        },
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: EMERALD_DEEP,
        brightness: 80.0,
        ..default()
    });

    // Key light, warm gold from above.
    commands.spawn((
        SpotLight {
            color: GOLD_METALLIC,
            intensity: 5_000_000.0,
            range: 80.0,
            outer_angle: 0.4,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(15.0, 20.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    // Cool rim light from behind.
    commands.spawn((
        SpotLight {
            color: Color::srgb(0.667, 0.867, 1.0),
            intensity: 3_000_000.0,
            range: 80.0,
            outer_angle: 0.6,
            ..default()
        },
        Transform::from_xyz(-15.0, 10.0, -20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    // Rose fill.
    commands.spawn((
        PointLight {
            color: GOLD_ROSE,
            intensity: 500_000.0,
            range: 40.0,
            ..default()
        },
        Transform::from_xyz(-10.0, 0.0, 10.0),
    ));
}

fn spawn_ui(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(GOLD_METALLIC),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("Loading scene manifest..."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(GOLD_METALLIC),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(48.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                LoadingText,
            ));
        });
}
