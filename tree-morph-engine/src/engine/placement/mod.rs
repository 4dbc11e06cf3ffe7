//! Procedural dual-position generation.
//!
//! Every ensemble member gets two homes at construction time: a position in
//! the diffuse scatter arrangement and one in the tree formation. The
//! per-frame updaters only ever blend between the two; nothing here is
//! recomputed after spawn.

pub mod cone_spiral;
pub mod ring;
pub mod scatter;
pub mod tiers;

use std::f32::consts::TAU;

use bevy::math::Vec3;
use rand::Rng;

/// The pair of resting positions a member morphs between.
#[derive(Debug, Clone, Copy)]
pub struct DualPlacement {
    pub scatter: Vec3,
    pub tree: Vec3,
}

impl DualPlacement {
    pub fn new(scatter: Vec3, tree: Vec3) -> Self {
        Self { scatter, tree }
    }

    /// Base position at the given morph progress. The endpoints are returned
    /// verbatim so a fully settled scene sits exactly on its placements.
    pub fn blend(&self, progress: f32) -> Vec3 {
        if progress <= 0.0 {
            self.scatter
        } else if progress >= 1.0 {
            self.tree
        } else {
            self.scatter.lerp(self.tree, progress)
        }
    }
}

/// Random phase offset used to desynchronize oscillatory secondary motion.
pub fn random_phase(rng: &mut impl Rng) -> f32 {
    rng.random_range(0.0..TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn blend_endpoints_are_exact() {
        let placement = DualPlacement::new(Vec3::new(3.7, -11.2, 0.53), Vec3::new(-0.1, 6.9, 2.4));
        assert_eq!(placement.blend(0.0), placement.scatter);
        assert_eq!(placement.blend(1.0), placement.tree);
        // Damping can mathematically never leave [0, 1], but the blend is
        // total anyway.
        assert_eq!(placement.blend(-0.5), placement.scatter);
        assert_eq!(placement.blend(1.5), placement.tree);
    }

    #[test]
    fn blend_midpoint_is_between_endpoints() {
        let placement = DualPlacement::new(Vec3::ZERO, Vec3::new(2.0, 4.0, -6.0));
        let mid = placement.blend(0.5);
        assert!((mid - Vec3::new(1.0, 2.0, -3.0)).length() < 1e-5);
    }

    #[test]
    fn phases_cover_the_full_turn() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let phase = random_phase(&mut rng);
            assert!((0.0..TAU).contains(&phase));
        }
    }
}
