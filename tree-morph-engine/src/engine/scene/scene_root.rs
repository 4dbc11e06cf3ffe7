use bevy::prelude::*;
use constants::scene::{SCENE_SPIN_SPEED, SCENE_YAW_DAMPING_RATE};

use crate::engine::morph::damp;
use crate::gesture::{GestureControl, GestureState};

/// Root entity all ensembles hang off. The root spins slowly so the scene
/// never sits still; an active open hand takes over and steers the yaw
/// directly. The smoothing of the gesture signal happens here, not in the
/// classifier.
#[derive(Component, Default)]
pub struct ContentRoot {
    pub yaw: f32,
}

pub fn rotate_scene_root(
    time: Res<Time>,
    control: Res<GestureControl>,
    gesture: Res<GestureState>,
    mut roots: Query<(&mut ContentRoot, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut root, mut transform) in &mut roots {
        let steering = control.enabled && gesture.active;
        match gesture.rotation_target {
            Some(target) if steering => {
                root.yaw = damp(root.yaw, target, SCENE_YAW_DAMPING_RATE, dt);
            }
            _ => {
                root.yaw += SCENE_SPIN_SPEED * dt;
            }
        }
        transform.rotation = Quat::from_rotation_y(root.yaw);
    }
}
