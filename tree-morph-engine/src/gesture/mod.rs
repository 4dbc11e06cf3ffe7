//! Hand-gesture input surface.
//!
//! An external tracker process feeds normalized hand landmarks through a
//! channel; the classifier turns each sample into a discrete mode decision
//! plus an auxiliary rotation signal. Nothing here smooths anything: mode
//! transitions are damped by the morph progress, the rotation signal by the
//! scene root.

pub mod classifier;
pub mod cursor;
pub mod feed;
pub mod landmarks;

pub use classifier::{GestureDecision, GestureLabel, classify, cursor_position};
pub use feed::{GestureControl, GestureState, LandmarkFeed, drain_landmark_feed};
pub use landmarks::{HandLandmarks, Landmark, LandmarkSample};
