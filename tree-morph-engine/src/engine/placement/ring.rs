use std::f32::consts::TAU;

use bevy::math::Vec3;

/// Evenly spaced position on a horizontal ring. Captions and photo frames
/// use this instead of the spiral so every member stays individually
/// readable.
pub fn ring_position(index: usize, count: usize, radius: f32, y: f32) -> Vec3 {
    let angle = ring_angle(index, count);
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Same ring with the angle shifted by a constant, used for scatter rings so
/// members do not travel straight lines between the two arrangements.
pub fn offset_ring_position(
    index: usize,
    count: usize,
    radius: f32,
    y: f32,
    angle_offset: f32,
) -> Vec3 {
    let angle = ring_angle(index, count) + angle_offset;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

fn ring_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (index as f32 / count as f32) * TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_are_evenly_spaced() {
        let count = 6;
        let radius = 14.0;
        let positions: Vec<Vec3> = (0..count)
            .map(|i| ring_position(i, count, radius, 0.0))
            .collect();

        let expected_gap = (positions[1] - positions[0]).length();
        for i in 0..count {
            let gap = (positions[(i + 1) % count] - positions[i]).length();
            assert!((gap - expected_gap).abs() < 1e-4);
            assert!((positions[i].length() - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn angle_offset_rotates_without_changing_radius() {
        let plain = ring_position(2, 5, 25.0, 1.0);
        let shifted = offset_ring_position(2, 5, 25.0, 1.0, 1.0);
        assert!((plain.length() - shifted.length()).abs() < 1e-4);
        assert!((plain - shifted).length() > 1.0);
    }

    #[test]
    fn empty_ring_is_well_defined() {
        // A zero-member ensemble must not divide by zero anywhere.
        let p = ring_position(0, 0, 10.0, 0.0);
        assert!(p.is_finite());
    }
}
