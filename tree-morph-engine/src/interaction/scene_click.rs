use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::ensembles::photo_frames::{FrameBounds, PhotoFrame};
use crate::engine::morph::SceneModeState;

use super::ray::ray_hits_obb;

/// Drag-versus-click discrimination: a release counts as a click only if the
/// cursor barely moved since the press, so orbiting the camera never toggles
/// the scene.
const CLICK_SLOP_PX: f32 = 5.0;

#[derive(Resource, Default)]
pub struct ClickTracker {
    press_position: Option<Vec2>,
}

/// One handler owns the activate event: a click that lands on a photo frame
/// toggles that frame's focus, any other click (and the space bar) toggles
/// the scene mode.
pub fn handle_scene_click(
    buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut tracker: ResMut<ClickTracker>,
    mut frames: Query<(&GlobalTransform, &FrameBounds, &mut PhotoFrame)>,
    mut mode: ResMut<SceneModeState>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        mode.toggle();
        info!("Scene mode: {:?}", mode.current);
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        tracker.press_position = window.cursor_position();
        return;
    }
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Some(press) = tracker.press_position.take() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if cursor.distance(press) > CLICK_SLOP_PX {
        return;
    }

    if let Some((_, _, mut frame)) = pick_frame(cursor, &cameras, &mut frames) {
        frame.focus = frame.focus.toggled();
        info!("Photo frame focus: {:?}", frame.focus);
        return;
    }

    mode.toggle();
    info!("Scene mode: {:?}", mode.current);
}

/// Marks the nearest frame under the cursor hovered, every frame.
pub fn update_frame_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut frames: Query<(&GlobalTransform, &FrameBounds, &mut PhotoFrame)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let hovered = pick_frame(cursor, &cameras, &mut frames).map(|(entity_index, _, _)| entity_index);

    for (index, (_, _, mut frame)) in frames.iter_mut().enumerate() {
        let is_hovered = hovered == Some(index);
        // Only touch the component when the flag actually flips; the
        // material swap listens for changes.
        if frame.hovered != is_hovered {
            frame.hovered = is_hovered;
        }
    }
}

/// Nearest ray hit among the frames, as (iteration index, distance, frame).
fn pick_frame<'a>(
    cursor: Vec2,
    cameras: &Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    frames: &'a mut Query<(&GlobalTransform, &FrameBounds, &mut PhotoFrame)>,
) -> Option<(usize, f32, Mut<'a, PhotoFrame>)> {
    let Ok((camera_xf, camera)) = cameras.single() else {
        return None;
    };
    let Ok(ray) = camera.viewport_to_world(camera_xf, cursor) else {
        return None;
    };
    let origin = ray.origin;
    let direction = ray.direction.as_vec3();

    let mut best: Option<(usize, f32)> = None;
    for (index, (xf, FrameBounds(size), _)) in frames.iter().enumerate() {
        if let Some(t) = ray_hits_obb(origin, direction, xf, *size) {
            if t > 0.0 && best.is_none_or(|(_, best_t)| t < best_t) {
                best = Some((index, t));
            }
        }
    }

    let (index, t) = best?;
    let (_, _, frame) = frames.iter_mut().nth(index)?;
    Some((index, t, frame))
}
