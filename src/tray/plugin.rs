//! Bevy plugin wiring the tray into an app

use bevy::prelude::*;

use super::orchestrator::DiceTray;
use super::sound::ClipQueue;
use super::systems::*;
use super::types::{palette, DieKind};

/// The session's tray, shared by every tray system
#[derive(Resource, Deref, DerefMut)]
pub struct RollTray(pub DiceTray<ClipQueue>);

/// Options the tray starts with
#[derive(Clone, Debug)]
pub struct DiceTrayPlugin {
    pub sound_enabled: bool,
    pub preselected: Vec<DieKind>,
}

impl Default for DiceTrayPlugin {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            preselected: Vec::new(),
        }
    }
}

impl DiceTrayPlugin {
    fn build_tray(&self) -> DiceTray<ClipQueue> {
        let mut tray = DiceTray::new(self.sound_enabled);
        for &kind in &self.preselected {
            if !tray.is_selected(kind) {
                tray.toggle_selection(kind);
            }
        }
        tray
    }
}

impl Plugin for DiceTrayPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RollTray(self.build_tray()))
            .insert_resource(ClearColor(palette::BACKGROUND))
            .add_systems(Startup, setup)
            .add_systems(
                Update,
                (
                    // The clock moves before input so a roll started this
                    // frame only counts time from the next frame on
                    advance_roll_timers,
                    handle_die_buttons,
                    handle_control_buttons,
                    handle_roll_key,
                    play_roll_sounds,
                    (sync_die_faces, sync_controls, rebuild_history_panel),
                )
                    .chain(),
            );
    }
}
