use bevy::prelude::*;
use constants::scene::MORPH_DAMPING_RATE;

use super::mode::SceneModeState;

/// Exponential approach of `current` toward `target`. Frame-rate independent:
/// the remaining distance shrinks by `e^(-rate * dt)` regardless of how the
/// elapsed time is sliced into ticks. Never overshoots.
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// The single progress scalar shared by every ensemble: 0 is fully
/// scattered, 1 is the fully assembled tree. Advanced exactly once per tick,
/// before any ensemble update runs.
#[derive(Resource, Default)]
pub struct MorphProgress {
    pub value: f32,
}

impl MorphProgress {
    pub fn advance(&mut self, target: f32, dt: f32) {
        self.value = damp(self.value, target, MORPH_DAMPING_RATE, dt);
    }
}

pub fn advance_morph_progress(
    mode: Res<SceneModeState>,
    time: Res<Time>,
    mut progress: ResMut<MorphProgress>,
) {
    progress.advance(mode.current.progress_target(), time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::morph::mode::SceneMode;

    const TICK: f32 = 1.0 / 60.0;

    #[test]
    fn converges_within_five_time_constants() {
        let mut progress = MorphProgress::default();
        let target = SceneMode::TreeShape.progress_target();
        let ticks = (5.0 / MORPH_DAMPING_RATE / TICK).ceil() as usize;

        let mut last_error = (progress.value - target).abs();
        for _ in 0..ticks {
            progress.advance(target, TICK);
            let error = (progress.value - target).abs();
            assert!(error <= last_error, "error must decrease monotonically");
            last_error = error;
        }
        assert!(last_error < 0.01);
    }

    #[test]
    fn never_overshoots_in_a_single_tick() {
        for &(start, target) in &[(0.0_f32, 1.0_f32), (1.0, 0.0), (0.3, 0.7), (0.9, 0.1)] {
            let mut progress = MorphProgress { value: start };
            // Even an absurdly long tick must stop at the target.
            for &dt in &[TICK, 0.5, 10.0] {
                progress.value = start;
                progress.advance(target, dt);
                let lo = start.min(target);
                let hi = start.max(target);
                assert!(progress.value >= lo && progress.value <= hi);
            }
        }
    }

    #[test]
    fn continuous_under_repeated_target_flips() {
        let mut progress = MorphProgress::default();
        let mut previous = progress.value;
        // The largest possible per-tick step is bounded by the damping factor
        // times the full interval.
        let max_step = 1.0 - (-MORPH_DAMPING_RATE * TICK).exp();

        for tick in 0..600 {
            let target = if (tick / 30) % 2 == 0 { 1.0 } else { 0.0 };
            progress.advance(target, TICK);
            assert!((progress.value - previous).abs() <= max_step + f32::EPSILON);
            previous = progress.value;
        }
    }

    #[test]
    fn zero_dt_is_identity() {
        let mut progress = MorphProgress { value: 0.42 };
        progress.advance(1.0, 0.0);
        assert_eq!(progress.value, 0.42);
    }
}
