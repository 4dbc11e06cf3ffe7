use bevy::prelude::*;

/// Ray against an oriented box: transform the ray into the box's local frame
/// and run the slab test there. `size` is the unscaled box extent; the
/// entity's scale rides in its transform.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let local_origin = inv.transform_point3(origin);
    let local_dir = inv.transform_vector3(dir);
    let half = size * 0.5;
    ray_aabb_intersection(local_origin, local_dir, -half, half)
}

/// Slab-method ray-AABB intersection; returns the entry distance, or the
/// exit distance when the origin is inside the box.
pub fn ray_aabb_intersection(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        if dir[axis].abs() < f32::EPSILON {
            // Parallel ray: inside the slab or no hit at all.
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        let mut t0 = (min[axis] - origin[axis]) / dir[axis];
        let mut t1 = (max[axis] - origin[axis]) / dir[axis];
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_hit_reports_entry_distance() {
        let t = ray_aabb_intersection(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        )
        .expect("must hit");
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn miss_and_behind_are_none() {
        assert!(
            ray_aabb_intersection(
                Vec3::new(5.0, 0.0, 10.0),
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::splat(-1.0),
                Vec3::splat(1.0),
            )
            .is_none()
        );
        assert!(
            ray_aabb_intersection(
                Vec3::new(0.0, 0.0, 10.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::splat(-1.0),
                Vec3::splat(1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn origin_inside_reports_exit() {
        let t = ray_aabb_intersection(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        )
        .expect("must hit");
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotated_box_is_hit_through_its_transform() {
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
        );
        let hit = ray_hits_obb(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            &xf,
            Vec3::new(2.0, 2.0, 0.1),
        );
        assert!(hit.is_some());
    }
}
