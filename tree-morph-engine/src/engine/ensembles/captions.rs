use bevy::prelude::*;
use constants::scene::{
    CAPTION_BASE_FONT_PX, CAPTION_FLOAT_AMPLITUDE, CAPTION_FLOAT_FREQUENCY, CAPTION_OPACITY_BASE,
    CAPTION_OPACITY_GAIN, CAPTION_PHASE_STEP, CAPTION_RING_LIFT, CAPTION_RING_RADIUS_FACTOR,
    CAPTION_RING_Z_SHIFT, CAPTION_SCALE_BASE, CAPTION_SCALE_GAIN, CAPTION_SCATTER_ANGLE_OFFSET,
    CAPTION_SCATTER_JITTER_Y, CAPTION_SCATTER_RADIUS, TREE_HEIGHT, TREE_RADIUS_BASE,
};
use rand::Rng;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::Viewpoint;
use crate::engine::morph::MorphProgress;
use crate::engine::placement::DualPlacement;
use crate::engine::placement::ring::{offset_ring_position, ring_position};
use crate::engine::scene::ContentRoot;

/// A floating text member. The 3D transform is the renderer contract; the
/// glyphs themselves are drawn by the screen-space overlay below.
#[derive(Component)]
pub struct Caption {
    pub text: String,
    pub color: Color,
    pub size: f32,
    pub placement: DualPlacement,
    pub phase: f32,
    pub opacity: f32,
}

/// UI node that projects one caption into the viewport.
#[derive(Component)]
pub struct CaptionOverlay {
    pub target: Entity,
}

/// Captions ring the tree, stepped up its height.
pub fn caption_tree_position(index: usize, count: usize) -> Vec3 {
    let radius = TREE_RADIUS_BASE * CAPTION_RING_RADIUS_FACTOR;
    let height_step = TREE_HEIGHT / (count as f32 + 1.0);
    let y = index as f32 * height_step - TREE_HEIGHT / 2.0 + CAPTION_RING_LIFT;
    ring_position(index, count, radius, y) + Vec3::new(0.0, 0.0, CAPTION_RING_Z_SHIFT)
}

/// Scattered captions drift on a wide ring with randomized height.
pub fn caption_scatter_position(index: usize, count: usize, rng: &mut impl Rng) -> Vec3 {
    let y = rng.random_range(-CAPTION_SCATTER_JITTER_Y / 2.0..CAPTION_SCATTER_JITTER_Y / 2.0);
    offset_ring_position(
        index,
        count,
        CAPTION_SCATTER_RADIUS,
        y,
        CAPTION_SCATTER_ANGLE_OFFSET,
    )
}

pub fn spawn_captions(
    commands: &mut Commands,
    manifest: &SceneManifest,
    root: Entity,
    rng: &mut impl Rng,
) {
    let count = manifest.captions.len();
    for (index, entry) in manifest.captions.iter().enumerate() {
        let tree = caption_tree_position(index, count);
        let scatter = caption_scatter_position(index, count, rng);
        let color = entry.color();

        let caption = commands
            .spawn((
                Caption {
                    text: entry.text.clone(),
                    color,
                    size: entry.size,
                    placement: DualPlacement::new(scatter, tree),
                    phase: index as f32 * CAPTION_PHASE_STEP,
                    opacity: CAPTION_OPACITY_BASE,
                },
                Transform::from_translation(scatter),
                Visibility::default(),
                ChildOf(root),
            ))
            .id();

        commands.spawn((
            Text::new(entry.text.clone()),
            TextFont {
                font_size: entry.size * CAPTION_BASE_FONT_PX,
                ..default()
            },
            TextColor(color),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            CaptionOverlay { target: caption },
        ));
    }
}

/// Blend, float, billboard. The camera position is pulled into the spinning
/// root's local frame so the world-space facing survives the group rotation.
pub fn update_captions(
    time: Res<Time>,
    progress: Res<MorphProgress>,
    viewpoint: Res<Viewpoint>,
    roots: Query<&GlobalTransform, With<ContentRoot>>,
    mut captions: Query<(&mut Caption, &mut Transform)>,
) {
    let Ok(root_global) = roots.single() else {
        return;
    };
    let local_cam = root_global
        .affine()
        .inverse()
        .transform_point3(viewpoint.position);

    let t = time.elapsed_secs();
    let p = progress.value;

    for (mut caption, mut transform) in &mut captions {
        let mut position = caption.placement.blend(p);
        position.y += (t * CAPTION_FLOAT_FREQUENCY + caption.phase).sin() * CAPTION_FLOAT_AMPLITUDE;
        transform.translation = position;

        let away = position - local_cam;
        if away.length_squared() > 1e-6 {
            transform.look_to(away, Vec3::Y);
        }

        transform.scale = Vec3::splat(CAPTION_SCALE_BASE + CAPTION_SCALE_GAIN * p);
        caption.opacity = CAPTION_OPACITY_BASE + CAPTION_OPACITY_GAIN * p;
    }
}

/// Projects each caption onto the viewport and fades it with the morph.
pub fn update_caption_overlays(
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    captions: Query<(&Caption, &Transform, &GlobalTransform)>,
    mut overlays: Query<(
        &CaptionOverlay,
        &mut Node,
        &mut TextFont,
        &mut TextColor,
        &mut Visibility,
    )>,
) {
    let Ok((camera, camera_global)) = cameras.single() else {
        return;
    };

    for (overlay, mut node, mut font, mut color, mut visibility) in &mut overlays {
        let Ok((caption, transform, global)) = captions.get(overlay.target) else {
            continue;
        };
        match camera.world_to_viewport(camera_global, global.translation()) {
            Ok(screen) => {
                *visibility = Visibility::Visible;
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                font.font_size = caption.size * CAPTION_BASE_FONT_PX * transform.scale.x;
                color.0 = caption.color.with_alpha(caption.opacity);
            }
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tree_positions_step_up_the_height() {
        let count = 5;
        let mut last_y = f32::NEG_INFINITY;
        for i in 0..count {
            let p = caption_tree_position(i, count);
            assert!(p.y > last_y);
            last_y = p.y;
            let ring = Vec3::new(p.x, 0.0, p.z - CAPTION_RING_Z_SHIFT);
            assert!((ring.length() - TREE_RADIUS_BASE * CAPTION_RING_RADIUS_FACTOR).abs() < 1e-3);
        }
    }

    #[test]
    fn scatter_ring_is_wide_and_jittered_vertically() {
        let mut rng = StdRng::seed_from_u64(53);
        for i in 0..5 {
            let p = caption_scatter_position(i, 5, &mut rng);
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!((horizontal - CAPTION_SCATTER_RADIUS).abs() < 1e-3);
            assert!(p.y.abs() <= CAPTION_SCATTER_JITTER_Y / 2.0);
        }
    }
}
