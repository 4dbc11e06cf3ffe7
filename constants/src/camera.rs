use bevy::math::Vec3;

/// Orbit target, slightly above the scene root so the formed tree fills the
/// frame.
pub const ORBIT_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const START_DISTANCE: f32 = 35.0;
pub const MIN_DISTANCE: f32 = 10.0;
pub const MAX_DISTANCE: f32 = 60.0;
pub const FOV_DEGREES: f32 = 35.0;

/// Pitch limits derived from the maximum polar angle (PI / 1.6 from zenith).
pub const MIN_PITCH: f32 = -0.3927;
pub const MAX_PITCH: f32 = 1.5;

pub const YAW_SENSITIVITY: f32 = 0.0035;
pub const PITCH_SENSITIVITY: f32 = 0.0030;
pub const ZOOM_LINE_STEP: f32 = 1.0;
pub const ZOOM_PIXEL_STEP: f32 = 0.05;

/// Smoothing rate applied when the camera transform chases its target pose.
pub const POSE_LERP_RATE: f32 = 12.0;

/// The camera slowly orbits on its own once the formation is mostly
/// assembled.
pub const AUTO_ROTATE_PROGRESS: f32 = 0.8;
pub const AUTO_ROTATE_SPEED: f32 = 0.105;
