use bevy::math::FloatExt;
use bevy::prelude::*;
use constants::palette::{GOLD_BRIGHT, GOLD_METALLIC};
use constants::scene::{
    FRAME_BORDER, FRAME_DEPTH, FRAME_FLOAT_AMPLITUDE, FRAME_FOCUS_BLEND, FRAME_FOCUS_DISTANCE,
    FRAME_FOCUS_SCALE, FRAME_HEIGHT, FRAME_PHASE_STEP, FRAME_RING_RADIUS_FACTOR,
    FRAME_RING_VERTICAL_SPREAD, FRAME_SCALE_FORMED, FRAME_SCALE_SCATTERED,
    FRAME_SCATTER_ANGLE_OFFSET, FRAME_SCATTER_JITTER_Y, FRAME_SCATTER_RADIUS,
    FRAME_SCATTER_Z_BIAS, FRAME_WIDTH, TREE_RADIUS_BASE,
};
use rand::Rng;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::Viewpoint;
use crate::engine::morph::MorphProgress;
use crate::engine::placement::DualPlacement;
use crate::engine::placement::ring::{offset_ring_position, ring_position};
use crate::engine::scene::ContentRoot;

/// Per-frame interaction state. While focused, the ensemble interpolation is
/// suspended and the frame chases a viewer-relative anchor instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Following,
    Focused,
}

impl FocusState {
    pub fn toggled(self) -> Self {
        match self {
            FocusState::Following => FocusState::Focused,
            FocusState::Focused => FocusState::Following,
        }
    }
}

#[derive(Component)]
pub struct PhotoFrame {
    pub placement: DualPlacement,
    pub phase: f32,
    pub focus: FocusState,
    pub hovered: bool,
}

/// Unscaled pick-box extent; the live scale rides in the transform.
#[derive(Component)]
pub struct FrameBounds(pub Vec3);

#[derive(Component)]
pub struct FrameBorderMaterials {
    pub border: Entity,
    pub normal: Handle<StandardMaterial>,
    pub hovered: Handle<StandardMaterial>,
}

/// Frames hang embedded in the tree, spread over its height.
pub fn frame_tree_position(index: usize, count: usize) -> Vec3 {
    let radius = TREE_RADIUS_BASE * FRAME_RING_RADIUS_FACTOR;
    let y = if count > 1 {
        (index as f32 / (count as f32 - 1.0)) * FRAME_RING_VERTICAL_SPREAD
            - FRAME_RING_VERTICAL_SPREAD / 2.0
    } else {
        0.0
    };
    ring_position(index, count, radius, y)
}

/// Scattered frames circle the viewer, biased toward the camera side.
pub fn frame_scatter_position(index: usize, count: usize, rng: &mut impl Rng) -> Vec3 {
    let y = rng.random_range(-FRAME_SCATTER_JITTER_Y / 2.0..FRAME_SCATTER_JITTER_Y / 2.0);
    offset_ring_position(
        index,
        count,
        FRAME_SCATTER_RADIUS,
        y,
        FRAME_SCATTER_ANGLE_OFFSET,
    ) + Vec3::new(0.0, 0.0, FRAME_SCATTER_Z_BIAS)
}

pub fn spawn_photo_frames(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    manifest: &SceneManifest,
    root: Entity,
    rng: &mut impl Rng,
) {
    let count = manifest.photos.len();
    if count == 0 {
        return;
    }

    let border_mesh = meshes.add(Cuboid::new(
        FRAME_WIDTH + FRAME_BORDER,
        FRAME_HEIGHT + FRAME_BORDER,
        FRAME_DEPTH,
    ));
    let photo_mesh = meshes.add(Rectangle::new(FRAME_WIDTH, FRAME_HEIGHT));
    let normal_material = materials.add(StandardMaterial {
        base_color: GOLD_METALLIC,
        metallic: 1.0,
        perceptual_roughness: 0.2,
        ..default()
    });
    let hover_material = materials.add(StandardMaterial {
        base_color: GOLD_BRIGHT,
        metallic: 1.0,
        perceptual_roughness: 0.2,
        ..default()
    });

    for (index, entry) in manifest.photos.iter().enumerate() {
        let tree = frame_tree_position(index, count);
        let scatter = frame_scatter_position(index, count, rng);
        let photo_material = materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(0.95),
            base_color_texture: Some(asset_server.load(entry.image.as_str())),
            unlit: true,
            cull_mode: None,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        let frame = commands
            .spawn((
                PhotoFrame {
                    placement: DualPlacement::new(scatter, tree),
                    phase: index as f32 * FRAME_PHASE_STEP,
                    focus: FocusState::default(),
                    hovered: false,
                },
                FrameBounds(Vec3::new(
                    FRAME_WIDTH + FRAME_BORDER,
                    FRAME_HEIGHT + FRAME_BORDER,
                    FRAME_DEPTH,
                )),
                Transform::from_translation(scatter).with_scale(Vec3::splat(FRAME_SCALE_SCATTERED)),
                Visibility::default(),
                ChildOf(root),
            ))
            .id();

        let border = commands
            .spawn((
                Mesh3d(border_mesh.clone()),
                MeshMaterial3d(normal_material.clone()),
                Transform::from_xyz(0.0, 0.0, -0.03),
                ChildOf(frame),
            ))
            .id();
        commands.spawn((
            Mesh3d(photo_mesh.clone()),
            MeshMaterial3d(photo_material),
            Transform::IDENTITY,
            ChildOf(frame),
        ));
        commands.entity(frame).insert(FrameBorderMaterials {
            border,
            normal: normal_material.clone(),
            hovered: hover_material.clone(),
        });
    }
}

/// Following frames ride the ensemble interpolation; focused frames chase a
/// camera-relative anchor. Both scale transitions blend per frame at a fixed
/// factor, decoupled from the morph progress clock.
pub fn update_photo_frames(
    time: Res<Time>,
    progress: Res<MorphProgress>,
    viewpoint: Res<Viewpoint>,
    roots: Query<&GlobalTransform, With<ContentRoot>>,
    mut frames: Query<(&PhotoFrame, &mut Transform)>,
) {
    let Ok(root_global) = roots.single() else {
        return;
    };
    let to_local = root_global.affine().inverse();
    let local_cam = to_local.transform_point3(viewpoint.position);

    let t = time.elapsed_secs();
    let p = progress.value;

    for (frame, mut transform) in &mut frames {
        match frame.focus {
            FocusState::Following => {
                let mut position = frame.placement.blend(p);
                position.y += (t + frame.phase).sin() * FRAME_FLOAT_AMPLITUDE;
                transform.translation = position;

                let target_scale = FRAME_SCALE_SCATTERED.lerp(FRAME_SCALE_FORMED, p);
                let scale = transform.scale.x.lerp(target_scale, FRAME_FOCUS_BLEND);
                transform.scale = Vec3::splat(scale);
            }
            FocusState::Focused => {
                let anchor_world = viewpoint.position + viewpoint.forward * FRAME_FOCUS_DISTANCE;
                let anchor = to_local.transform_point3(anchor_world);
                transform.translation = transform.translation.lerp(anchor, FRAME_FOCUS_BLEND);

                let scale = transform.scale.x.lerp(FRAME_FOCUS_SCALE, FRAME_FOCUS_BLEND);
                transform.scale = Vec3::splat(scale);
            }
        }

        let away = transform.translation - local_cam;
        if away.length_squared() > 1e-6 {
            let up = Vec3::Y;
            transform.look_to(away, up);
        }
    }
}

/// Swaps the border material when the hover flag flips.
pub fn apply_frame_hover(
    frames: Query<(&PhotoFrame, &FrameBorderMaterials), Changed<PhotoFrame>>,
    mut commands: Commands,
) {
    for (frame, materials) in &frames {
        let handle = if frame.hovered {
            materials.hovered.clone()
        } else {
            materials.normal.clone()
        };
        commands.entity(materials.border).insert(MeshMaterial3d(handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_activations_return_to_following() {
        let mut focus = FocusState::default();
        assert_eq!(focus, FocusState::Following);
        focus = focus.toggled();
        assert_eq!(focus, FocusState::Focused);
        focus = focus.toggled();
        assert_eq!(focus, FocusState::Following);
    }

    #[test]
    fn blended_scale_reconverges_after_a_focus_round_trip() {
        // Scattered scene: the follow target is the scattered scale.
        let follow_target = FRAME_SCALE_SCATTERED;
        let mut scale = follow_target;

        // Focus, then let the per-frame blend settle.
        for _ in 0..200 {
            scale = scale.lerp(FRAME_FOCUS_SCALE, FRAME_FOCUS_BLEND);
        }
        assert!((scale - FRAME_FOCUS_SCALE).abs() < 1e-3);

        // Unfocus: the transform must converge back to the ensemble value.
        for _ in 0..200 {
            scale = scale.lerp(follow_target, FRAME_FOCUS_BLEND);
        }
        assert!((scale - follow_target).abs() < 1e-3);
    }

    #[test]
    fn ring_layouts_are_bounded() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(59);
        let count = 6;
        for i in 0..count {
            let tree = frame_tree_position(i, count);
            assert!(tree.y.abs() <= FRAME_RING_VERTICAL_SPREAD / 2.0 + 1e-3);

            let scatter = frame_scatter_position(i, count, &mut rng);
            let ring = Vec3::new(scatter.x, 0.0, scatter.z - FRAME_SCATTER_Z_BIAS);
            assert!((ring.length() - FRAME_SCATTER_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn single_frame_hangs_at_mid_height() {
        assert_eq!(frame_tree_position(0, 1).y, 0.0);
    }
}
