use bevy::prelude::*;
use constants::gesture::CURSOR_SIZE;
use constants::palette::{EMERALD_LIGHT, GOLD_METALLIC};

use super::classifier::GestureLabel;
use super::feed::GestureState;

#[derive(Component)]
pub struct GestureCursor;

/// Screen-space ring that mirrors the tracked fingertip. Hidden while no
/// hand is detected.
pub fn spawn_gesture_cursor(commands: &mut Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(CURSOR_SIZE),
            height: Val::Px(CURSOR_SIZE),
            border: UiRect::all(Val::Px(2.0)),
            display: Display::None,
            ..default()
        },
        BorderColor(EMERALD_LIGHT),
        BorderRadius::all(Val::Percent(50.0)),
        GestureCursor,
    ));
}

pub fn update_gesture_cursor(
    state: Res<GestureState>,
    mut cursors: Query<(&mut Node, &mut BorderColor), With<GestureCursor>>,
) {
    for (mut node, mut border) in &mut cursors {
        if !state.active {
            node.display = Display::None;
            continue;
        }
        node.display = Display::Flex;
        node.left = Val::Px(state.cursor.x - CURSOR_SIZE / 2.0);
        node.top = Val::Px(state.cursor.y - CURSOR_SIZE / 2.0);
        border.0 = match state.label {
            GestureLabel::Grab => GOLD_METALLIC,
            _ => EMERALD_LIGHT,
        };
    }
}
