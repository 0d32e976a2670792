//! Spawns the tray window's UI

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::tray::plugin::RollTray;
use crate::tray::types::*;

pub fn setup(mut commands: Commands, tray: Res<RollTray>) {
    commands.spawn(Camera2d);

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(18.0),
            padding: UiRect::all(Val::Px(24.0)),
            ..default()
        })
        .with_children(|root| {
            root.spawn((
                Text::new("Dice Tray"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(palette::TEXT),
            ));

            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(12.0),
                row_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|row| {
                for kind in DieKind::ALL {
                    spawn_die_button(row, kind, &tray.face(kind).text);
                }
            });

            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|row| {
                spawn_control_button(row, RollButton, tray.trigger_label(), RollButtonLabel);
                spawn_control_button(row, ResetButton, "Reset", ());
                spawn_control_button(
                    row,
                    SoundToggleButton,
                    sound_label(tray.sound_enabled()),
                    SoundToggleLabel,
                );
            });

            root.spawn(Node {
                width: Val::Px(640.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|header| {
                header.spawn((
                    Text::new("History"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(palette::TEXT),
                ));
                spawn_control_button(header, ClearHistoryButton, "Clear", ());
            });

            root.spawn((
                Node {
                    width: Val::Px(640.0),
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(6.0),
                    padding: UiRect::all(Val::Px(12.0)),
                    overflow: Overflow::clip_y(),
                    ..default()
                },
                BackgroundColor(palette::PANEL),
                HistoryList,
            ));
        });
}

/// Label for the sound toggle
pub fn sound_label(enabled: bool) -> &'static str {
    if enabled {
        "Sound: On"
    } else {
        "Sound: Off"
    }
}

fn spawn_die_button(parent: &mut ChildSpawnerCommands, kind: DieKind, face: &str) {
    parent
        .spawn((
            Button,
            DieButton(kind),
            Node {
                width: Val::Px(84.0),
                height: Val::Px(92.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(palette::DIE_IDLE),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(face),
                TextFont {
                    font_size: 34.0,
                    ..default()
                },
                TextColor(palette::TEXT),
                DieFaceText(kind),
            ));
            btn.spawn((
                Text::new(kind.name().to_uppercase()),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(palette::TEXT_MUTED),
            ));
        });
}

fn spawn_control_button(
    parent: &mut ChildSpawnerCommands,
    marker: impl Component,
    label: &str,
    label_marker: impl Bundle,
) {
    parent
        .spawn((
            Button,
            marker,
            Node {
                padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(palette::BUTTON),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(palette::TEXT),
                label_marker,
            ));
        });
}

/// Spawn one history entry row into the history list
pub fn spawn_history_row(parent: &mut ChildSpawnerCommands, entry: &HistoryEntry) {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(14.0),
                ..default()
            },
            HistoryRow,
        ))
        .with_children(|row| {
            row.spawn((
                Text::new(format!("#{}", entry.number)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(palette::TEXT_MUTED),
            ));
            row.spawn((
                Text::new(entry.notation()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(palette::TEXT),
            ));
            for label in entry.result_labels() {
                row.spawn((
                    Text::new(label),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(palette::DIE_SETTLED),
                ));
            }
        });
}

pub fn spawn_history_placeholder(parent: &mut ChildSpawnerCommands) {
    parent.spawn((
        Text::new(EMPTY_HISTORY_TEXT),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(palette::TEXT_MUTED),
        HistoryRow,
    ));
}
