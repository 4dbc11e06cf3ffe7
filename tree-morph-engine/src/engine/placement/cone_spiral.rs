use std::f32::consts::{PI, TAU};

use bevy::math::Vec3;
use rand::Rng;

/// Parameters of the cone-spiral formation law. The spiral winds `twist`
/// half-turns from base to apex; the radius shrinks linearly toward the top.
#[derive(Debug, Clone, Copy)]
pub struct ConeSpiral {
    pub height: f32,
    pub base_radius: f32,
    /// Constant radial offset, used to park an ensemble just outside the
    /// particle cone.
    pub radius_offset: f32,
    pub twist: f32,
    /// Full width of the per-axis uniform jitter; zero disables it.
    pub jitter: f32,
}

/// Draws one position on the cone spiral. The random angle term on top of
/// the spiral angle keeps members from lining up into a visible seam.
pub fn cone_spiral_position(spiral: &ConeSpiral, rng: &mut impl Rng) -> Vec3 {
    let t = rng.random::<f32>();
    let y = t * spiral.height - spiral.height / 2.0;
    let radius = (1.0 - t) * spiral.base_radius + spiral.radius_offset;
    let theta = t * spiral.twist * PI + rng.random_range(0.0..TAU);

    let mut position = Vec3::new(radius * theta.cos(), y, radius * theta.sin());
    if spiral.jitter > 0.0 {
        let half = spiral.jitter / 2.0;
        position += Vec3::new(
            rng.random_range(-half..half),
            rng.random_range(-half..half),
            rng.random_range(-half..half),
        );
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SPIRAL: ConeSpiral = ConeSpiral {
        height: 14.0,
        base_radius: 5.5,
        radius_offset: 0.0,
        twist: 30.0,
        jitter: 0.4,
    };

    #[test]
    fn positions_stay_inside_the_jittered_cone() {
        let mut rng = StdRng::seed_from_u64(11);
        let half_jitter = SPIRAL.jitter / 2.0;

        for _ in 0..2000 {
            let p = cone_spiral_position(&SPIRAL, &mut rng);
            assert!(p.y >= -SPIRAL.height / 2.0 - half_jitter);
            assert!(p.y <= SPIRAL.height / 2.0 + half_jitter);

            // Radius envelope shrinks linearly with height.
            let t = ((p.y + SPIRAL.height / 2.0) / SPIRAL.height).clamp(0.0, 1.0);
            let max_radius = (1.0 - t) * SPIRAL.base_radius + 2.0 * half_jitter;
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!(
                horizontal <= max_radius + 1e-3,
                "radius {horizontal} exceeds cone envelope {max_radius} at y {}",
                p.y
            );
        }
    }

    #[test]
    fn radius_offset_pushes_the_whole_spiral_outward() {
        let offset_spiral = ConeSpiral {
            radius_offset: 0.5,
            jitter: 0.0,
            ..SPIRAL
        };
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..500 {
            let p = cone_spiral_position(&offset_spiral, &mut rng);
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!(horizontal >= offset_spiral.radius_offset - 1e-3);
        }
    }
}
