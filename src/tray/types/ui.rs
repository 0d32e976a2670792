//! UI marker components for the tray window

use bevy::prelude::*;

use super::DieKind;

/// Button that toggles one die in or out of the selection
#[derive(Component)]
pub struct DieButton(pub DieKind);

/// Text node showing a die's current face
#[derive(Component)]
pub struct DieFaceText(pub DieKind);

#[derive(Component)]
pub struct RollButton;

#[derive(Component)]
pub struct RollButtonLabel;

#[derive(Component)]
pub struct ResetButton;

#[derive(Component)]
pub struct SoundToggleButton;

#[derive(Component)]
pub struct SoundToggleLabel;

#[derive(Component)]
pub struct ClearHistoryButton;

/// Container the history rows are spawned into
#[derive(Component)]
pub struct HistoryList;

/// One rendered history entry (or the empty placeholder)
#[derive(Component)]
pub struct HistoryRow;

/// Palette shared by the tray systems
pub mod palette {
    use bevy::prelude::*;

    pub const BACKGROUND: Color = Color::srgb(0.08, 0.08, 0.11);
    pub const PANEL: Color = Color::srgb(0.13, 0.13, 0.17);
    pub const DIE_IDLE: Color = Color::srgb(0.2, 0.2, 0.25);
    pub const DIE_ROLLING: Color = Color::srgb(0.95, 0.85, 0.35);
    pub const DIE_SETTLED: Color = Color::srgb(0.3, 0.75, 0.45);
    pub const DIE_SETTLED_UNSELECTED: Color = Color::srgb(0.18, 0.36, 0.25);
    pub const BUTTON: Color = Color::srgb(0.25, 0.25, 0.32);
    pub const BUTTON_ACTIVE: Color = Color::srgb(0.35, 0.45, 0.85);
    pub const BUTTON_DISABLED: Color = Color::srgb(0.18, 0.18, 0.2);
    pub const TEXT: Color = Color::srgb(0.92, 0.92, 0.95);
    pub const TEXT_MUTED: Color = Color::srgb(0.6, 0.6, 0.68);
}
