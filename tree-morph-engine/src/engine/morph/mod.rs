//! The morph state: which arrangement the scene is heading toward, and how
//! far along the damped transition currently is.

pub mod mode;
pub mod progress;

pub use mode::{SceneMode, SceneModeState};
pub use progress::{MorphProgress, advance_morph_progress, damp};
