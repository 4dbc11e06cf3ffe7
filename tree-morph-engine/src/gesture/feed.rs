use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::gesture::GESTURE_CONTROL_DEFAULT;

use crate::engine::morph::SceneModeState;

use super::classifier::{GestureLabel, classify, cursor_position};
use super::landmarks::LandmarkSample;

/// Whether the classifier output is wired into the mode controller. Decided
/// at startup; the classifier itself always runs when samples arrive.
#[derive(Resource)]
pub struct GestureControl {
    pub enabled: bool,
}

impl Default for GestureControl {
    fn default() -> Self {
        Self {
            enabled: GESTURE_CONTROL_DEFAULT,
        }
    }
}

/// Latest classification, rebuilt from each incoming sample. The cursor is
/// retained across hand loss so it reappears where it vanished; only
/// `active` drops.
#[derive(Resource, Default)]
pub struct GestureState {
    pub active: bool,
    pub cursor: Vec2,
    pub label: GestureLabel,
    pub rotation_target: Option<f32>,
}

/// Receiving end of the landmark stream. The producer (camera capture plus
/// inference) runs at its own cadence on its own thread; samples are never
/// queued up — each tick keeps only the newest one.
#[derive(Resource)]
pub struct LandmarkFeed {
    receiver: Option<Mutex<Receiver<LandmarkSample>>>,
    disconnect_reported: bool,
}

impl LandmarkFeed {
    /// Feed with no producer attached; the scene runs on pointer input only.
    pub fn disconnected() -> Self {
        Self {
            receiver: None,
            disconnect_reported: false,
        }
    }

    /// Creates a connected feed and hands back the producer side.
    pub fn channel() -> (Sender<LandmarkSample>, Self) {
        let (sender, receiver) = channel();
        (
            sender,
            Self {
                receiver: Some(Mutex::new(receiver)),
                disconnect_reported: false,
            },
        )
    }

    /// Drains the channel and returns the newest pending sample, if any.
    /// A dropped producer is reported once and then treated as silence.
    pub fn latest(&mut self) -> Option<LandmarkSample> {
        let receiver = self.receiver.as_ref()?;
        let mut newest = None;
        let mut disconnected = false;
        {
            let Ok(receiver) = receiver.lock() else {
                return None;
            };
            loop {
                match receiver.try_recv() {
                    Ok(sample) => newest = Some(sample),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }
        if disconnected {
            self.receiver = None;
            if !self.disconnect_reported {
                self.disconnect_reported = true;
                warn!("Hand tracker disconnected; falling back to pointer input");
            }
        }
        newest
    }
}

/// Applies the newest landmark sample. No sample means the producer is
/// stalled or absent and the previous state simply persists.
pub fn drain_landmark_feed(
    mut feed: ResMut<LandmarkFeed>,
    mut state: ResMut<GestureState>,
    control: Res<GestureControl>,
    mut mode: ResMut<SceneModeState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(sample) = feed.latest() else {
        return;
    };

    let Some(hand) = sample.hand else {
        state.active = false;
        return;
    };

    state.active = true;
    if let Ok(window) = windows.single() {
        state.cursor = cursor_position(&hand, Vec2::new(window.width(), window.height()));
    }

    let decision = classify(&hand);
    state.label = decision.label;
    if let Some(rotation) = decision.rotation_target {
        state.rotation_target = Some(rotation);
    }
    if control.enabled {
        mode.set(decision.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::landmarks::{Landmark, test_hand};

    #[test]
    fn latest_keeps_only_the_newest_sample() {
        let (sender, mut feed) = LandmarkFeed::channel();
        sender.send(LandmarkSample::no_hand()).unwrap();
        sender
            .send(LandmarkSample::detected(test_hand(
                Landmark::new(0.5, 0.5),
                Landmark::new(0.52, 0.5),
                Landmark::new(0.5, 0.7),
            )))
            .unwrap();

        let sample = feed.latest().expect("a sample must be pending");
        assert!(sample.hand.is_some());
        assert!(feed.latest().is_none(), "channel must be drained");
    }

    #[test]
    fn disconnect_degrades_to_silence() {
        let (sender, mut feed) = LandmarkFeed::channel();
        drop(sender);
        assert!(feed.latest().is_none());
        assert!(feed.latest().is_none());
    }

    #[test]
    fn detached_feed_yields_nothing() {
        let mut feed = LandmarkFeed::disconnected();
        assert!(feed.latest().is_none());
    }
}
