//! Systems that advance the roll clock and mirror tray state onto the UI

use bevy::prelude::*;

use super::setup::{sound_label, spawn_history_placeholder, spawn_history_row};
use crate::tray::plugin::RollTray;
use crate::tray::types::*;

pub fn advance_roll_timers(time: Res<Time>, mut tray: ResMut<RollTray>) {
    // Idle trays have nothing scheduled; skip so the resource is not marked changed
    if tray.is_busy() {
        tray.advance(time.delta());
    }
}

/// Background for a die button; a settled die still shows whether it is
/// selected for the next roll
pub fn die_color(face: &DieFace, selected: bool) -> Color {
    match (face.state, selected) {
        (FaceState::Rolling, _) => palette::DIE_ROLLING,
        (FaceState::Settled, true) => palette::DIE_SETTLED,
        (FaceState::Settled, false) => palette::DIE_SETTLED_UNSELECTED,
        (FaceState::Idle, true) => face.kind.color(),
        (FaceState::Idle, false) => palette::DIE_IDLE,
    }
}

pub fn sync_die_faces(
    tray: Res<RollTray>,
    mut texts: Query<(&DieFaceText, &mut Text)>,
    mut buttons: Query<(&DieButton, &mut BackgroundColor)>,
) {
    if !tray.is_changed() {
        return;
    }

    for (label, mut text) in texts.iter_mut() {
        let face = tray.face(label.0);
        if text.0 != face.text {
            text.0 = face.text.clone();
        }
    }

    for (button, mut background) in buttons.iter_mut() {
        let color = die_color(tray.face(button.0), tray.is_selected(button.0));
        if background.0 != color {
            background.0 = color;
        }
    }
}

#[allow(clippy::type_complexity)]
pub fn sync_controls(
    tray: Res<RollTray>,
    mut roll_labels: Query<&mut Text, (With<RollButtonLabel>, Without<SoundToggleLabel>)>,
    mut sound_labels: Query<&mut Text, (With<SoundToggleLabel>, Without<RollButtonLabel>)>,
    mut roll_buttons: Query<&mut BackgroundColor, (With<RollButton>, Without<SoundToggleButton>)>,
    mut sound_buttons: Query<&mut BackgroundColor, (With<SoundToggleButton>, Without<RollButton>)>,
) {
    if !tray.is_changed() {
        return;
    }

    for mut text in roll_labels.iter_mut() {
        if text.0 != tray.trigger_label() {
            text.0 = tray.trigger_label().to_string();
        }
    }

    let roll_color = if tray.roll_enabled() {
        palette::BUTTON_ACTIVE
    } else {
        palette::BUTTON_DISABLED
    };
    for mut background in roll_buttons.iter_mut() {
        background.0 = roll_color;
    }

    let enabled = tray.sound_enabled();
    for mut text in sound_labels.iter_mut() {
        if text.0 != sound_label(enabled) {
            text.0 = sound_label(enabled).to_string();
        }
    }
    for mut background in sound_buttons.iter_mut() {
        background.0 = if enabled {
            palette::BUTTON_ACTIVE
        } else {
            palette::BUTTON
        };
    }
}

/// Respawn the history rows whenever the history changes
pub fn rebuild_history_panel(
    mut commands: Commands,
    tray: Res<RollTray>,
    mut synced_revision: Local<Option<u64>>,
    lists: Query<Entity, With<HistoryList>>,
    rows: Query<Entity, With<HistoryRow>>,
) {
    let history = tray.history();
    if *synced_revision == Some(history.revision()) {
        return;
    }
    let Ok(list) = lists.single() else {
        return;
    };

    for row in rows.iter() {
        commands.entity(row).despawn();
    }

    commands.entity(list).with_children(|list| {
        if history.is_empty() {
            spawn_history_placeholder(list);
        }
        for entry in history.entries() {
            spawn_history_row(list, entry);
        }
    });

    *synced_revision = Some(history.revision());
}
