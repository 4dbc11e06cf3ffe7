//! Hand-landmark layout and classification thresholds.
//!
//! Landmark indices follow the 21-point hand model emitted by the external
//! tracker: wrist, then four joints per finger, thumb first.

pub const LANDMARK_COUNT: usize = 21;

pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
/// Middle-finger base joint; steadier than a fingertip, used for the
/// rotation signal.
pub const MIDDLE_MCP: usize = 9;

/// Thumb-to-index distance (normalized coordinates) below which the hand
/// counts as pinched. Strict comparison: exactly the threshold is open.
pub const PINCH_THRESHOLD: f32 = 0.05;

/// Open-hand x position maps from [0, 1] to a yaw target of +-2 radians.
pub const ROTATION_RANGE: f32 = 4.0;

/// Gesture control is compiled in but stays unwired unless enabled at
/// startup; pointer input always works.
pub const GESTURE_CONTROL_DEFAULT: bool = false;

/// Screen-space size of the gesture cursor dot, pixels.
pub const CURSOR_SIZE: f32 = 48.0;
