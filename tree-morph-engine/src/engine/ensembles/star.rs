use bevy::math::FloatExt;
use bevy::prelude::*;
use constants::palette::GOLD_METALLIC;
use constants::scene::{
    STAR_BOB_AMPLITUDE, STAR_BOB_FREQUENCY, STAR_DEPTH, STAR_INNER_RADIUS, STAR_OUTER_RADIUS,
    STAR_SCALE_SCATTERED, STAR_SCATTER_Y, STAR_SCATTER_Z, STAR_SPIKES, STAR_SPIN_SPEED,
    STAR_TOP_MARGIN, TREE_HEIGHT,
};

use crate::engine::mesh::build_star_mesh;
use crate::engine::morph::MorphProgress;
use crate::engine::placement::DualPlacement;

/// The single capstone member. It waits high above the scene while
/// scattered and grows onto the treetop as the formation assembles.
#[derive(Component)]
pub struct Star {
    pub placement: DualPlacement,
}

pub fn star_tree_position() -> Vec3 {
    Vec3::new(0.0, TREE_HEIGHT / 2.0 + STAR_TOP_MARGIN, 0.0)
}

pub fn spawn_star(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
) {
    let mesh = meshes.add(build_star_mesh(
        STAR_OUTER_RADIUS,
        STAR_INNER_RADIUS,
        STAR_SPIKES,
        STAR_DEPTH,
    ));
    // Emissive pushed well past 1.0 so the star blooms once post-processing
    // is layered on.
    let material = materials.add(StandardMaterial {
        base_color: GOLD_METALLIC,
        emissive: LinearRgba::from(GOLD_METALLIC) * 4.0,
        metallic: 1.0,
        perceptual_roughness: 0.1,
        ..default()
    });

    let scatter = Vec3::new(0.0, STAR_SCATTER_Y, STAR_SCATTER_Z);
    let star = commands
        .spawn((
            Star {
                placement: DualPlacement::new(scatter, star_tree_position()),
            },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(scatter).with_scale(Vec3::splat(STAR_SCALE_SCATTERED)),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();

    // The star carries its own glow.
    commands.spawn((
        PointLight {
            color: GOLD_METALLIC,
            intensity: 40_000.0,
            range: 15.0,
            ..default()
        },
        Transform::IDENTITY,
        ChildOf(star),
    ));
}

pub fn update_star(
    time: Res<Time>,
    progress: Res<MorphProgress>,
    mut stars: Query<(&Star, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    let p = progress.value;

    for (star, mut transform) in &mut stars {
        let mut position = star.placement.blend(p);
        position.y += (t * STAR_BOB_FREQUENCY).sin() * STAR_BOB_AMPLITUDE;
        transform.translation = position;
        transform.scale = Vec3::splat(STAR_SCALE_SCATTERED.lerp(1.0, p));
        transform.rotation = Quat::from_rotation_y(t * STAR_SPIN_SPEED);
    }
}
