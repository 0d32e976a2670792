//! Headless tray app tests: frame timing, the Enter shortcut, the history panel

use std::time::Duration;

use bevy::audio::AudioSource;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use dicetray::tray::types::{palette, DieButton, DieKind, HistoryList, EMPTY_HISTORY_TEXT};
use dicetray::tray::{DiceTrayPlugin, RollTray, ROLL_DURATION};

const FRAME: Duration = Duration::from_millis(200);

fn tray_app(preselected: Vec<DieKind>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<Assets<AudioSource>>()
        .add_plugins(DiceTrayPlugin {
            sound_enabled: false,
            preselected,
        });
    // Startup frame; the clock does not tick on the first update
    app.update();
    app
}

fn tray(app: &App) -> &RollTray {
    app.world().resource::<RollTray>()
}

fn press_enter(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Enter);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(KeyCode::Enter);
    keys.clear();
}

fn roll_now(app: &mut App) {
    {
        let mut tray = app.world_mut().resource_mut::<RollTray>();
        assert!(tray.start_roll());
        tray.advance(ROLL_DURATION);
    }
    app.update();
}

fn row_text(world: &World, row: Entity) -> String {
    if let Some(text) = world.get::<Text>(row) {
        return text.0.clone();
    }
    world
        .get::<Children>(row)
        .map(|children| children.to_vec())
        .unwrap_or_default()
        .into_iter()
        .filter_map(|child| world.get::<Text>(child).map(|text| text.0.clone()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn history_rows(app: &mut App) -> Vec<String> {
    let world = app.world_mut();
    let list = world
        .query_filtered::<Entity, With<HistoryList>>()
        .single(world)
        .expect("history list");
    let rows = world
        .get::<Children>(list)
        .map(|children| children.to_vec())
        .unwrap_or_default();
    rows.into_iter().map(|row| row_text(world, row)).collect()
}

fn die_background(app: &mut App, kind: DieKind) -> Color {
    let world = app.world_mut();
    world
        .query::<(&DieButton, &BackgroundColor)>()
        .iter(world)
        .find(|(button, _)| button.0 == kind)
        .map(|(_, background)| background.0)
        .expect("die button")
}

#[test]
fn test_roll_counts_time_from_the_frame_after_it_starts() {
    let mut app = tray_app(vec![DieKind::D20]);
    press_enter(&mut app);
    assert!(tray(&app).is_busy());

    let frames = ROLL_DURATION.as_millis().div_ceil(FRAME.as_millis());
    for _ in 1..frames {
        app.update();
    }
    assert!(tray(&app).is_busy(), "finished before the full roll duration");

    app.update();
    assert!(!tray(&app).is_busy());
    assert_eq!(tray(&app).history().len(), 1);
}

#[test]
fn test_enter_ignored_without_selection() {
    let mut app = tray_app(Vec::new());
    press_enter(&mut app);
    assert!(!tray(&app).is_busy());
    assert!(tray(&app).history().is_empty());
}

#[test]
fn test_enter_ignored_while_rolling() {
    let mut app = tray_app(vec![DieKind::D6]);
    press_enter(&mut app);
    assert!(tray(&app).is_busy());

    app.update();
    press_enter(&mut app);
    assert!(tray(&app).is_busy());

    for _ in 0..10 {
        app.update();
    }
    assert!(!tray(&app).is_busy());
    assert_eq!(tray(&app).history().len(), 1);
    assert_eq!(tray(&app).latest_entry().map(|e| e.number), Some(1));
}

#[test]
fn test_history_panel_shows_placeholder_then_newest_first() {
    let mut app = tray_app(vec![DieKind::D6, DieKind::D20]);
    assert_eq!(history_rows(&mut app), vec![EMPTY_HISTORY_TEXT.to_string()]);

    roll_now(&mut app);
    roll_now(&mut app);
    let rows = history_rows(&mut app);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("#2 1d6 + 1d20 d6: "), "{}", rows[0]);
    assert!(rows[1].starts_with("#1 1d6 + 1d20 d6: "), "{}", rows[1]);

    assert!(app
        .world_mut()
        .resource_mut::<RollTray>()
        .clear_history());
    app.update();
    assert_eq!(history_rows(&mut app), vec![EMPTY_HISTORY_TEXT.to_string()]);
}

#[test]
fn test_deselected_settled_die_is_redrawn() {
    let mut app = tray_app(vec![DieKind::D6]);
    roll_now(&mut app);
    assert_eq!(die_background(&mut app, DieKind::D6), palette::DIE_SETTLED);

    assert!(app
        .world_mut()
        .resource_mut::<RollTray>()
        .toggle_selection(DieKind::D6));
    app.update();
    assert_eq!(
        die_background(&mut app, DieKind::D6),
        palette::DIE_SETTLED_UNSELECTED
    );
}
