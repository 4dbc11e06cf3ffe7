use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::camera::{
    AUTO_ROTATE_PROGRESS, AUTO_ROTATE_SPEED, MAX_DISTANCE, MAX_PITCH, MIN_DISTANCE, MIN_PITCH,
    ORBIT_TARGET, PITCH_SENSITIVITY, POSE_LERP_RATE, START_DISTANCE, YAW_SENSITIVITY,
    ZOOM_LINE_STEP, ZOOM_PIXEL_STEP,
};

use crate::engine::morph::MorphProgress;

/// Spherical orbit rig around the tree. Pan is deliberately not offered;
/// the scene is built around a fixed focus point.
#[derive(Resource)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: ORBIT_TARGET,
            yaw: 0.0,
            pitch: 0.0,
            distance: START_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Camera position implied by the current orbit parameters.
    pub fn eye_position(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        self.target + rotation * (Vec3::Z * self.distance)
    }
}

/// The camera position and forward axis as seen by this frame's update pass.
/// Written once per tick, read by every billboard and by the focus anchor.
#[derive(Resource, Default)]
pub struct Viewpoint {
    pub position: Vec3,
    pub forward: Vec3,
}

pub fn camera_controller(
    mut cameras: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    progress: Res<MorphProgress>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * YAW_SENSITIVITY;
        orbit.pitch = (orbit.pitch + mouse_delta.y * PITCH_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * ZOOM_LINE_STEP,
            MouseScrollUnit::Pixel => ev.y * ZOOM_PIXEL_STEP,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        // Dolly speed scales with distance so zoom feels uniform.
        let dolly = orbit.distance * 0.1;
        orbit.distance = (orbit.distance - scroll_accum * dolly).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    // Once the tree is mostly assembled the rig orbits on its own.
    if progress.value > AUTO_ROTATE_PROGRESS {
        orbit.yaw += AUTO_ROTATE_SPEED * time.delta_secs();
    }

    let target_pos = orbit.eye_position();
    let lerp_factor = (POSE_LERP_RATE * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_factor);
    camera_transform.look_at(orbit.target, Vec3::Y);
}

/// Freezes the camera pose for this tick's ensemble updates.
pub fn update_viewpoint(
    cameras: Query<&GlobalTransform, With<Camera3d>>,
    mut viewpoint: ResMut<Viewpoint>,
) {
    let Ok(global) = cameras.single() else {
        return;
    };
    viewpoint.position = global.translation();
    viewpoint.forward = global.forward().into();
}
