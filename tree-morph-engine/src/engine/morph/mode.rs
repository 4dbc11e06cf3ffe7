use bevy::prelude::*;

/// The two target arrangements the scene morphs between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SceneMode {
    #[default]
    Scattered,
    TreeShape,
}

impl SceneMode {
    pub fn toggled(self) -> Self {
        match self {
            SceneMode::Scattered => SceneMode::TreeShape,
            SceneMode::TreeShape => SceneMode::Scattered,
        }
    }

    /// Damping target for the morph progress scalar.
    pub fn progress_target(self) -> f32 {
        match self {
            SceneMode::Scattered => 0.0,
            SceneMode::TreeShape => 1.0,
        }
    }
}

/// Discrete scene mode, flipped by pointer input or the gesture classifier.
/// The transition itself is always smoothed through [`super::MorphProgress`];
/// nothing ever jumps the progress value directly.
#[derive(Resource, Default)]
pub struct SceneModeState {
    pub current: SceneMode,
}

impl SceneModeState {
    pub fn toggle(&mut self) {
        self.current = self.current.toggled();
    }

    pub fn set(&mut self, mode: SceneMode) {
        self.current = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_both_modes() {
        let mut state = SceneModeState::default();
        assert_eq!(state.current, SceneMode::Scattered);
        state.toggle();
        assert_eq!(state.current, SceneMode::TreeShape);
        state.toggle();
        assert_eq!(state.current, SceneMode::Scattered);
    }

    #[test]
    fn progress_targets_are_unit_interval_endpoints() {
        assert_eq!(SceneMode::Scattered.progress_target(), 0.0);
        assert_eq!(SceneMode::TreeShape.progress_target(), 1.0);
    }
}
