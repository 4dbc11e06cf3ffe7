//! Fixed scene configuration. Everything here is decided at startup and never
//! mutated at runtime.

/// Instanced particle count for the main cloud.
pub const PARTICLE_COUNT: usize = 2800;
/// Instanced ornament sphere count.
pub const ORNAMENT_COUNT: usize = 180;

/// Vertical extent of the tree formation, centred on the scene root.
pub const TREE_HEIGHT: f32 = 14.0;
/// Cone radius at the base of the tree formation.
pub const TREE_RADIUS_BASE: f32 = 5.5;
/// Radius of the scattered particle sphere.
pub const SCATTER_RADIUS: f32 = 35.0;

/// Damping rate for the morph progress scalar, per second.
pub const MORPH_DAMPING_RATE: f32 = 2.0;

// Particle cloud.
pub const PARTICLE_SPIRAL_TWIST: f32 = 30.0;
pub const PARTICLE_JITTER: f32 = 0.4;
pub const PARTICLE_GOLD_RATIO: f32 = 0.15;
pub const PARTICLE_SCALE_MIN: f32 = 0.03;
pub const PARTICLE_SCALE_MAX: f32 = 0.15;
pub const PARTICLE_SPEED_MIN: f32 = 0.2;
pub const PARTICLE_SPEED_MAX: f32 = 0.7;
pub const PARTICLE_FLOAT_AMPLITUDE: f32 = 0.05;
pub const PARTICLE_BREATHE_AMPLITUDE: f32 = 0.1;
pub const PARTICLE_BREATHE_FREQUENCY: f32 = 2.0;

// Ornament spheres. Their spiral sits slightly outside the particle cone and
// their scatter sphere slightly outside the particle cloud.
pub const ORNAMENT_SPIRAL_TWIST: f32 = 15.0;
pub const ORNAMENT_RADIUS_OFFSET: f32 = 0.5;
pub const ORNAMENT_SCATTER_MARGIN: f32 = 5.0;
/// Ornament tier split: gold / rose / red.
pub const ORNAMENT_TIER_ROSE: f32 = 0.3;
pub const ORNAMENT_TIER_RED: f32 = 0.1;
pub const ORNAMENT_SCALE_GOLD: f32 = 0.3;
pub const ORNAMENT_SCALE_ROSE: f32 = 0.35;
pub const ORNAMENT_SCALE_RED: f32 = 0.4;
/// Per-frame yaw increment for ornament spin.
pub const ORNAMENT_SPIN_STEP: f32 = 0.01;

// Floating captions ring the tree and drift far out when scattered.
pub const CAPTION_RING_RADIUS_FACTOR: f32 = 1.6;
pub const CAPTION_RING_LIFT: f32 = 2.0;
pub const CAPTION_RING_Z_SHIFT: f32 = 4.0;
pub const CAPTION_SCATTER_RADIUS: f32 = 25.0;
pub const CAPTION_SCATTER_ANGLE_OFFSET: f32 = 1.0;
pub const CAPTION_SCATTER_JITTER_Y: f32 = 20.0;
pub const CAPTION_FLOAT_AMPLITUDE: f32 = 0.3;
pub const CAPTION_FLOAT_FREQUENCY: f32 = 1.5;
pub const CAPTION_PHASE_STEP: f32 = 2.0;
pub const CAPTION_SCALE_BASE: f32 = 0.8;
pub const CAPTION_SCALE_GAIN: f32 = 0.4;
pub const CAPTION_OPACITY_BASE: f32 = 0.6;
pub const CAPTION_OPACITY_GAIN: f32 = 0.4;
/// Overlay font pixels per unit of caption size.
pub const CAPTION_BASE_FONT_PX: f32 = 24.0;

// Photo frames hang inside the tree when formed and circle the viewer when
// scattered.
pub const FRAME_RING_RADIUS_FACTOR: f32 = 0.85;
pub const FRAME_RING_VERTICAL_SPREAD: f32 = 10.0;
pub const FRAME_SCATTER_RADIUS: f32 = 14.0;
pub const FRAME_SCATTER_ANGLE_OFFSET: f32 = 0.5;
pub const FRAME_SCATTER_JITTER_Y: f32 = 6.0;
pub const FRAME_SCATTER_Z_BIAS: f32 = 8.0;
pub const FRAME_FLOAT_AMPLITUDE: f32 = 0.2;
pub const FRAME_PHASE_STEP: f32 = 1.5;
pub const FRAME_SCALE_SCATTERED: f32 = 1.8;
pub const FRAME_SCALE_FORMED: f32 = 0.6;
pub const FRAME_WIDTH: f32 = 1.0;
pub const FRAME_HEIGHT: f32 = 1.33;
pub const FRAME_BORDER: f32 = 0.1;
pub const FRAME_DEPTH: f32 = 0.05;
/// Focused frames settle this far in front of the camera, at this scale.
pub const FRAME_FOCUS_DISTANCE: f32 = 8.0;
pub const FRAME_FOCUS_SCALE: f32 = 3.5;
/// Per-frame blend factor toward the focus (or follow-scale) target.
pub const FRAME_FOCUS_BLEND: f32 = 0.1;

// Capstone star.
pub const STAR_TOP_MARGIN: f32 = 1.5;
pub const STAR_SCATTER_Y: f32 = 35.0;
pub const STAR_SCATTER_Z: f32 = -5.0;
pub const STAR_SCALE_SCATTERED: f32 = 0.01;
pub const STAR_SPIN_SPEED: f32 = 2.0;
pub const STAR_BOB_AMPLITUDE: f32 = 0.1;
pub const STAR_BOB_FREQUENCY: f32 = 2.5;
pub const STAR_OUTER_RADIUS: f32 = 1.2;
pub const STAR_INNER_RADIUS: f32 = 0.5;
pub const STAR_SPIKES: usize = 5;
pub const STAR_DEPTH: f32 = 0.2;

/// Continuous yaw of the scene root, radians per second.
pub const SCENE_SPIN_SPEED: f32 = 0.15;
/// The formed tree reads better centred slightly below the camera target.
pub const SCENE_ROOT_Y: f32 = -1.0;
/// Damping rate used when steering the scene root toward a gesture-supplied
/// yaw target, per second.
pub const SCENE_YAW_DAMPING_RATE: f32 = 2.0;
