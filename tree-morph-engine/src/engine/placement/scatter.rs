use std::f32::consts::TAU;

use bevy::math::Vec3;
use rand::Rng;

/// Draws one position uniformly inside a solid sphere.
///
/// The cube-root radius draw is what makes the density uniform by volume; a
/// plain uniform radius would pile members up near the center.
pub fn solid_sphere_position(radius: f32, rng: &mut impl Rng) -> Vec3 {
    let u = rng.random::<f32>();
    let v = rng.random::<f32>();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).acos();
    let r = radius * rng.random::<f32>().cbrt();

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn mean_radius_matches_uniform_solid_sphere() {
        let radius = 35.0;
        let samples = 4000;
        let mut rng = StdRng::seed_from_u64(17);

        let mut sum = 0.0;
        for _ in 0..samples {
            let p = solid_sphere_position(radius, &mut rng);
            assert!(p.length() <= radius + 1e-3);
            sum += p.length();
        }
        // E[r] = 3R/4 for uniform density by volume.
        let mean = sum / samples as f32;
        let expected = 3.0 * radius / 4.0;
        assert!(
            (mean - expected).abs() < radius * 0.02,
            "mean radius {mean} too far from {expected}"
        );
    }

    #[test]
    fn octants_are_roughly_balanced() {
        let mut rng = StdRng::seed_from_u64(19);
        let samples = 8000;
        let mut counts = [0usize; 8];
        for _ in 0..samples {
            let p = solid_sphere_position(1.0, &mut rng);
            let octant = ((p.x > 0.0) as usize) | (((p.y > 0.0) as usize) << 1)
                | (((p.z > 0.0) as usize) << 2);
            counts[octant] += 1;
        }
        let expected = samples / 8;
        for count in counts {
            assert!(count > expected / 2 && count < expected * 2);
        }
    }
}
