//! Input handling systems
//!
//! Button presses and the Enter shortcut forward to the tray; the tray's own
//! guards decide whether anything happens.

use bevy::prelude::*;

use crate::tray::plugin::RollTray;
use crate::tray::types::*;

pub fn handle_die_buttons(
    mut tray: ResMut<RollTray>,
    buttons: Query<(&Interaction, &DieButton), Changed<Interaction>>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            tray.toggle_selection(button.0);
        }
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_control_buttons(
    mut tray: ResMut<RollTray>,
    roll: Query<&Interaction, (Changed<Interaction>, With<RollButton>)>,
    reset: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    sound: Query<&Interaction, (Changed<Interaction>, With<SoundToggleButton>)>,
    clear: Query<&Interaction, (Changed<Interaction>, With<ClearHistoryButton>)>,
) {
    if roll.iter().any(|i| *i == Interaction::Pressed) {
        tray.start_roll();
    }

    if reset.iter().any(|i| *i == Interaction::Pressed) && tray.reset() {
        info!("Tray reset");
    }

    if sound.iter().any(|i| *i == Interaction::Pressed) {
        tray.toggle_sound();
    }

    if clear.iter().any(|i| *i == Interaction::Pressed) && tray.clear_history() {
        info!("History cleared");
    }
}

/// Enter rolls, but only when the roll button itself would
pub fn handle_roll_key(keyboard: Res<ButtonInput<KeyCode>>, mut tray: ResMut<RollTray>) {
    let submitted =
        keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter);
    if submitted && tray.roll_enabled() {
        tray.start_roll();
    }
}
