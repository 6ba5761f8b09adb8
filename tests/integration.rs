// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size};
use iced_resizable::config::{self, Config};
use iced_resizable::resize::{
    ContentGate, Direction, ResizeEvent, ResizeOptions, ResizeSession, StepDelta,
};
use iced_resizable::ui::theming::ThemeMode;
use tempfile::tempdir;

/// Runs one gesture from the origin through `samples` and returns the
/// recorded notifications.
fn drag(session: &mut ResizeSession<ContentGate>, samples: &[(f32, f32)]) -> Vec<ResizeEvent> {
    let mut events = Vec::new();
    session.begin(Point::ORIGIN, &mut events);
    for &(x, y) in samples {
        session.update(Point::new(x, y), &mut events);
    }
    session.end(&mut events);
    events
}

fn session(options: &ResizeOptions) -> ResizeSession<ContentGate> {
    ResizeSession::with_host(options, ContentGate::default())
}

#[test]
fn locked_aspect_ratio_derives_width_from_height() {
    let options = ResizeOptions::new(Direction::SouthEast)
        .size(100.0, 200.0)
        .min_size(10.0, 10.0)
        .lock_aspect_ratio(true);
    let mut session = session(&options);

    drag(&mut session, &[(0.0, -50.0)]);

    assert_eq!(session.current_size(), Size::new(75.0, 150.0));
}

#[test]
fn ghost_gesture_reports_delta_then_reverts() {
    let options = ResizeOptions::new(Direction::South)
        .size(50.0, 50.0)
        .allow_ghost_resize(true);
    let mut session = session(&options);

    let events = drag(&mut session, &[(0.0, 30.0)]);

    assert_eq!(
        events,
        vec![
            ResizeEvent::Started(StepDelta::default()),
            ResizeEvent::Resized(Size::new(50.0, 80.0)),
            ResizeEvent::Stopped(StepDelta { dx: 0.0, dy: 30.0 }),
        ]
    );
    assert_eq!(session.current_size(), Size::new(50.0, 50.0));
    assert_eq!(session.display_size(), Size::new(50.0, 50.0));
}

#[test]
fn stepped_drag_snaps_to_step_and_reports_once_per_step() {
    let options = ResizeOptions::new(Direction::South)
        .step(10.0)
        .stepping_margin(20.0);
    let mut session = session(&options);

    let events = drag(&mut session, &[(0.0, 24.0), (0.0, 26.0)]);

    assert_eq!(session.current_size(), Size::new(250.0, 70.0));
    assert_eq!(
        events,
        vec![
            ResizeEvent::Started(StepDelta::default()),
            ResizeEvent::Stepped(StepDelta { dx: 0.0, dy: 2.0 }),
            ResizeEvent::Stopped(StepDelta { dx: 0.0, dy: 2.0 }),
        ]
    );
}

#[test]
fn south_box_never_changes_width() {
    let options = ResizeOptions::new(Direction::South);
    let mut session = session(&options);

    drag(&mut session, &[(40.0, 40.0), (-30.0, 10.0), (500.0, 5.0)]);

    assert_eq!(session.current_size().width, 250.0);
    assert_eq!(session.current_size().height, 55.0);
}

#[test]
fn east_box_never_changes_height() {
    let options = ResizeOptions::new(Direction::East);
    let mut session = session(&options);

    drag(&mut session, &[(40.0, 40.0)]);

    assert_eq!(session.current_size(), Size::new(290.0, 50.0));
}

#[test]
fn committed_size_stays_within_bounds() {
    let options = ResizeOptions::new(Direction::SouthEast)
        .size(100.0, 100.0)
        .max_size(200.0, 150.0);
    let mut session = session(&options);
    let mut events = Vec::new();

    session.begin(Point::ORIGIN, &mut events);
    for i in -60..=160 {
        let offset = i as f32;
        session.update(Point::new(offset, offset), &mut events);

        let size = session.current_size();
        assert!(size.width >= 100.0 && size.width <= 200.0, "{size:?}");
        assert!(size.height >= 100.0 && size.height <= 150.0, "{size:?}");
    }
    session.end(&mut events);
}

#[test]
fn second_gesture_starts_from_committed_size() {
    let options = ResizeOptions::new(Direction::South).size(100.0, 100.0);
    let mut session = session(&options);

    drag(&mut session, &[(0.0, 20.0)]);
    drag(&mut session, &[(0.0, 15.0)]);

    assert_eq!(session.current_size(), Size::new(100.0, 135.0));
    assert_eq!(session.original_size(), Size::new(100.0, 100.0));
}

#[test]
fn end_is_idempotent() {
    let options = ResizeOptions::new(Direction::South);
    let mut session = session(&options);
    let mut events = Vec::new();

    session.begin(Point::ORIGIN, &mut events);
    session.update(Point::new(0.0, 10.0), &mut events);
    session.end(&mut events);
    session.end(&mut events);

    let stops = events
        .iter()
        .filter(|event| matches!(event, ResizeEvent::Stopped(_)))
        .count();
    assert_eq!(stops, 1);
    assert!(!session.is_active());
    assert!(session.host().is_open());
}

#[test]
fn content_is_gated_only_during_gesture() {
    let options = ResizeOptions::new(Direction::South);
    let mut session = session(&options);
    let mut events = Vec::new();

    assert!(session.host().is_open());
    session.begin(Point::ORIGIN, &mut events);
    assert!(!session.host().is_open());
    session.end(&mut events);
    assert!(session.host().is_open());
}

#[test]
fn settings_round_trip_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.resize = ResizeOptions::new(Direction::SouthEast)
        .size(120.0, 80.0)
        .max_size(400.0, 300.0)
        .step(10.0)
        .lock_aspect_ratio(true);

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.resize, config.resize);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn missing_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.resize, ResizeOptions::default());
}
