use bevy::math::Vec2;
use constants::gesture::{PINCH_THRESHOLD, ROTATION_RANGE};

use crate::engine::morph::SceneMode;

use super::landmarks::HandLandmarks;

/// Classification of the current hand pose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureLabel {
    /// No hand seen yet this session.
    #[default]
    None,
    Open,
    Grab,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::None => "NONE",
            GestureLabel::Open => "OPEN",
            GestureLabel::Grab => "GRAB",
        }
    }
}

/// Output of one classification pass over a detected hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDecision {
    pub label: GestureLabel,
    pub mode: SceneMode,
    /// Yaw target for the scene root, only produced by an open hand.
    pub rotation_target: Option<f32>,
}

/// Thumb-to-index pinch distance in normalized coordinates.
pub fn pinch_distance(hand: &HandLandmarks) -> f32 {
    hand.thumb_tip().distance(hand.index_tip())
}

/// Maps a hand pose to a mode decision. A pinch (strictly inside the
/// threshold) grabs the scene into the tree; an open hand releases it and
/// steers the rotation from the horizontal hand position. No smoothing
/// happens here.
pub fn classify(hand: &HandLandmarks) -> GestureDecision {
    if pinch_distance(hand) < PINCH_THRESHOLD {
        GestureDecision {
            label: GestureLabel::Grab,
            mode: SceneMode::TreeShape,
            rotation_target: None,
        }
    } else {
        // Mirror x so moving the hand right steers right on screen, then map
        // [0, 1] onto the symmetric yaw range.
        let mirrored = 1.0 - hand.middle_mcp().x;
        GestureDecision {
            label: GestureLabel::Open,
            mode: SceneMode::Scattered,
            rotation_target: Some((mirrored - 0.5) * ROTATION_RANGE),
        }
    }
}

/// Index-fingertip position mirrored and scaled to window coordinates.
pub fn cursor_position(hand: &HandLandmarks, window_size: Vec2) -> Vec2 {
    let tip = hand.index_tip();
    Vec2::new((1.0 - tip.x) * window_size.x, tip.y * window_size.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::landmarks::{Landmark, test_hand};

    fn hand_with_pinch(distance: f32) -> HandLandmarks {
        test_hand(
            Landmark::new(0.5, 0.5),
            Landmark::new(0.5 + distance, 0.5),
            Landmark::new(0.5, 0.7),
        )
    }

    #[test]
    fn tight_pinch_grabs_into_the_tree() {
        let decision = classify(&hand_with_pinch(0.04));
        assert_eq!(decision.label, GestureLabel::Grab);
        assert_eq!(decision.mode, SceneMode::TreeShape);
        assert_eq!(decision.rotation_target, None);
    }

    #[test]
    fn open_hand_scatters_and_steers() {
        let decision = classify(&hand_with_pinch(0.06));
        assert_eq!(decision.label, GestureLabel::Open);
        assert_eq!(decision.mode, SceneMode::Scattered);
        assert!(decision.rotation_target.is_some());
    }

    #[test]
    fn exactly_at_threshold_is_open() {
        // Strict comparison: the boundary itself does not pinch.
        let decision = classify(&hand_with_pinch(PINCH_THRESHOLD));
        assert_eq!(decision.label, GestureLabel::Open);
        assert_eq!(decision.mode, SceneMode::Scattered);
    }

    #[test]
    fn rotation_signal_spans_the_symmetric_range() {
        let left = classify(&test_hand(
            Landmark::new(0.0, 0.0),
            Landmark::new(1.0, 1.0),
            Landmark::new(0.0, 0.5),
        ));
        let right = classify(&test_hand(
            Landmark::new(0.0, 0.0),
            Landmark::new(1.0, 1.0),
            Landmark::new(1.0, 0.5),
        ));
        assert_eq!(left.rotation_target, Some(ROTATION_RANGE / 2.0));
        assert_eq!(right.rotation_target, Some(-ROTATION_RANGE / 2.0));

        let centered = classify(&test_hand(
            Landmark::new(0.0, 0.0),
            Landmark::new(1.0, 1.0),
            Landmark::new(0.5, 0.5),
        ));
        assert_eq!(centered.rotation_target, Some(0.0));
    }

    #[test]
    fn cursor_is_mirrored_horizontally() {
        let hand = test_hand(
            Landmark::new(0.0, 0.0),
            Landmark::new(0.25, 0.75),
            Landmark::new(0.5, 0.5),
        );
        let cursor = cursor_position(&hand, Vec2::new(1920.0, 1080.0));
        assert!((cursor.x - 0.75 * 1920.0).abs() < 1e-3);
        assert!((cursor.y - 0.75 * 1080.0).abs() < 1e-3);
    }
}
