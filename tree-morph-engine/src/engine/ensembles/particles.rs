use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::palette::{EMERALD_LIGHT, GOLD_METALLIC};
use constants::scene::{
    PARTICLE_BREATHE_AMPLITUDE, PARTICLE_BREATHE_FREQUENCY, PARTICLE_COUNT,
    PARTICLE_FLOAT_AMPLITUDE, PARTICLE_JITTER, PARTICLE_SCALE_MAX, PARTICLE_SCALE_MIN,
    PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN, PARTICLE_SPIRAL_TWIST, SCATTER_RADIUS,
    TREE_HEIGHT, TREE_RADIUS_BASE,
};
use rand::Rng;

use crate::engine::morph::MorphProgress;
use crate::engine::placement::cone_spiral::{ConeSpiral, cone_spiral_position};
use crate::engine::placement::scatter::solid_sphere_position;
use crate::engine::placement::tiers::particle_is_gold;
use crate::engine::placement::{DualPlacement, random_phase};
use crate::engine::render::{EnsembleInstance, EnsembleInstanceData};

pub struct Particle {
    pub placement: DualPlacement,
    pub scale: f32,
    pub color: [f32; 4],
    pub speed: f32,
    pub phase: f32,
}

#[derive(Component)]
pub struct ParticleEnsemble {
    pub members: Vec<Particle>,
}

pub fn generate_particles(count: usize, rng: &mut impl Rng) -> Vec<Particle> {
    let spiral = ConeSpiral {
        height: TREE_HEIGHT,
        base_radius: TREE_RADIUS_BASE,
        radius_offset: 0.0,
        twist: PARTICLE_SPIRAL_TWIST,
        jitter: PARTICLE_JITTER,
    };
    let gold = LinearRgba::from(GOLD_METALLIC).to_f32_array();
    let emerald = LinearRgba::from(EMERALD_LIGHT).to_f32_array();

    (0..count)
        .map(|_| {
            let tree = cone_spiral_position(&spiral, rng);
            let scatter = solid_sphere_position(SCATTER_RADIUS, rng);
            Particle {
                placement: DualPlacement::new(scatter, tree),
                scale: rng.random_range(PARTICLE_SCALE_MIN..PARTICLE_SCALE_MAX),
                color: if particle_is_gold(rng) { gold } else { emerald },
                speed: rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX),
                phase: random_phase(rng),
            }
        })
        .collect()
}

pub fn spawn_particles(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    root: Entity,
    rng: &mut impl Rng,
) {
    let members = generate_particles(PARTICLE_COUNT, rng);
    let instances = members
        .iter()
        .map(|m| EnsembleInstance::new(m.placement.scatter, m.scale, Quat::IDENTITY, m.color))
        .collect();

    commands.spawn((
        Mesh3d(meshes.add(Tetrahedron::default())),
        ParticleEnsemble { members },
        EnsembleInstanceData(instances),
        Transform::IDENTITY,
        Visibility::default(),
        NoFrustumCulling,
        ChildOf(root),
    ));
}

/// Multi-axis spin plus a vertical float and a breathing scale, every term
/// desynchronized by the per-member phase and speed.
pub fn update_particles(
    time: Res<Time>,
    progress: Res<MorphProgress>,
    mut ensembles: Query<(&ParticleEnsemble, &mut EnsembleInstanceData)>,
) {
    let t = time.elapsed_secs();
    let p = progress.value;

    for (ensemble, mut instances) in &mut ensembles {
        for (i, member) in ensemble.members.iter().enumerate() {
            let mut position = member.placement.blend(p);
            position.y += (t * member.speed + member.phase).sin() * PARTICLE_FLOAT_AMPLITUDE;

            let rotation = Quat::from_euler(
                EulerRot::XYZ,
                t * member.speed * 0.5,
                t * member.speed * 0.3,
                0.0,
            );
            let breathe =
                1.0 + (t * PARTICLE_BREATHE_FREQUENCY + member.phase).sin() * PARTICLE_BREATHE_AMPLITUDE;

            instances.0[i] =
                EnsembleInstance::new(position, member.scale * breathe, rotation, member.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn members_are_generated_once_with_bounded_attributes() {
        let mut rng = StdRng::seed_from_u64(31);
        let members = generate_particles(500, &mut rng);
        assert_eq!(members.len(), 500);
        for m in &members {
            assert!(m.placement.scatter.length() <= SCATTER_RADIUS + 1e-3);
            assert!(m.scale >= PARTICLE_SCALE_MIN && m.scale < PARTICLE_SCALE_MAX);
            assert!(m.speed >= PARTICLE_SPEED_MIN && m.speed < PARTICLE_SPEED_MAX);
        }
    }

    #[test]
    fn settled_positions_match_the_placements() {
        let mut rng = StdRng::seed_from_u64(37);
        let members = generate_particles(50, &mut rng);
        for m in &members {
            assert_eq!(m.placement.blend(0.0), m.placement.scatter);
            assert_eq!(m.placement.blend(1.0), m.placement.tree);
        }
    }

    #[test]
    fn empty_ensemble_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(41);
        let members = generate_particles(0, &mut rng);
        assert!(members.is_empty());
    }
}
