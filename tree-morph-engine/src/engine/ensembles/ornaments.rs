use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::palette::{GOLD_METALLIC, GOLD_ROSE, RED_VELVET};
use constants::scene::{
    ORNAMENT_COUNT, ORNAMENT_RADIUS_OFFSET, ORNAMENT_SCALE_GOLD, ORNAMENT_SCALE_RED,
    ORNAMENT_SCALE_ROSE, ORNAMENT_SCATTER_MARGIN, ORNAMENT_SPIN_STEP, ORNAMENT_SPIRAL_TWIST,
    SCATTER_RADIUS, TREE_HEIGHT, TREE_RADIUS_BASE,
};
use rand::Rng;

use crate::engine::morph::MorphProgress;
use crate::engine::placement::cone_spiral::{ConeSpiral, cone_spiral_position};
use crate::engine::placement::scatter::solid_sphere_position;
use crate::engine::placement::tiers::{OrnamentTier, ornament_tier};
use crate::engine::placement::{DualPlacement, random_phase};
use crate::engine::render::{EnsembleInstance, EnsembleInstanceData};

pub struct Ornament {
    pub placement: DualPlacement,
    pub scale: f32,
    pub color: [f32; 4],
    pub phase: f32,
}

/// Ornaments share one slowly accumulating yaw; the per-member phase keeps
/// them from all facing the same way.
#[derive(Component)]
pub struct OrnamentEnsemble {
    pub members: Vec<Ornament>,
    pub yaw: f32,
}

pub fn generate_ornaments(count: usize, rng: &mut impl Rng) -> Vec<Ornament> {
    let spiral = ConeSpiral {
        height: TREE_HEIGHT,
        base_radius: TREE_RADIUS_BASE,
        radius_offset: ORNAMENT_RADIUS_OFFSET,
        twist: ORNAMENT_SPIRAL_TWIST,
        jitter: 0.0,
    };

    (0..count)
        .map(|_| {
            let tree = cone_spiral_position(&spiral, rng);
            let scatter =
                solid_sphere_position(SCATTER_RADIUS + ORNAMENT_SCATTER_MARGIN, rng);
            let (color, scale) = match ornament_tier(rng) {
                OrnamentTier::Gold => (GOLD_METALLIC, ORNAMENT_SCALE_GOLD),
                OrnamentTier::Rose => (GOLD_ROSE, ORNAMENT_SCALE_ROSE),
                OrnamentTier::Red => (RED_VELVET, ORNAMENT_SCALE_RED),
            };
            Ornament {
                placement: DualPlacement::new(scatter, tree),
                scale,
                color: LinearRgba::from(color).to_f32_array(),
                phase: random_phase(rng),
            }
        })
        .collect()
}

pub fn spawn_ornaments(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    root: Entity,
    rng: &mut impl Rng,
) {
    let members = generate_ornaments(ORNAMENT_COUNT, rng);
    let instances = members
        .iter()
        .map(|m| EnsembleInstance::new(m.placement.scatter, m.scale, Quat::IDENTITY, m.color))
        .collect();

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(1.0))),
        OrnamentEnsemble { members, yaw: 0.0 },
        EnsembleInstanceData(instances),
        Transform::IDENTITY,
        Visibility::default(),
        NoFrustumCulling,
        ChildOf(root),
    ));
}

pub fn update_ornaments(
    progress: Res<MorphProgress>,
    mut ensembles: Query<(&mut OrnamentEnsemble, &mut EnsembleInstanceData)>,
) {
    let p = progress.value;

    for (mut ensemble, mut instances) in &mut ensembles {
        ensemble.yaw += ORNAMENT_SPIN_STEP;
        let yaw = ensemble.yaw;

        for (i, member) in ensemble.members.iter().enumerate() {
            let position = member.placement.blend(p);
            let rotation = Quat::from_rotation_y(yaw + member.phase);
            instances.0[i] =
                EnsembleInstance::new(position, member.scale, rotation, member.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn ornaments_sit_outside_the_particle_cone() {
        let mut rng = StdRng::seed_from_u64(43);
        let members = generate_ornaments(400, &mut rng);
        for m in &members {
            let horizontal = (m.placement.tree.x.powi(2) + m.placement.tree.z.powi(2)).sqrt();
            assert!(horizontal >= ORNAMENT_RADIUS_OFFSET - 1e-3);
            assert!(m.placement.scatter.length() <= SCATTER_RADIUS + ORNAMENT_SCATTER_MARGIN + 1e-3);
        }
    }

    #[test]
    fn every_tier_scale_appears_in_a_large_draw() {
        let mut rng = StdRng::seed_from_u64(47);
        let members = generate_ornaments(2000, &mut rng);
        for scale in [ORNAMENT_SCALE_GOLD, ORNAMENT_SCALE_ROSE, ORNAMENT_SCALE_RED] {
            assert!(members.iter().any(|m| m.scale == scale));
        }
    }
}
