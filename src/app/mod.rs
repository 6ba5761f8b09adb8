// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a resizable box.
//!
//! The `App` struct owns the box options loaded from `settings.toml`, lets the
//! user change them from a small control row and records the notifications
//! the box emits in a bounded log.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::resize::{ResizeEvent, ResizeOptions};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Task, Theme};
use std::collections::VecDeque;
use std::fmt;

/// Root Iced application state.
pub struct App {
    config: Config,
    options: ResizeOptions,
    theme_mode: ThemeMode,
    /// Most recent notifications, newest last.
    log: VecDeque<ResizeEvent>,
    /// Last size reported by the box.
    size: Size,
    resizing: bool,
    /// One-line status shown under the controls (config warnings, save result).
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("options", &self.options)
            .field("resizing", &self.resizing)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 500;

/// Number of notifications kept in the log.
pub const MAX_LOG_ENTRIES: usize = 50;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default(), &Flags::default())
    }
}

impl App {
    /// Loads the settings file and applies command-line overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let mut app = Self::from_config(config, &flags);
        app.status = warning;
        (app, Task::none())
    }

    fn from_config(config: Config, flags: &Flags) -> Self {
        let options = apply_flags(config.resize.clone(), flags);
        Self {
            theme_mode: config.general.theme_mode,
            size: options.initial_size(),
            options,
            config,
            log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            resizing: false,
            status: None,
        }
    }

    fn title(&self) -> String {
        if self.resizing {
            format!(
                "Resizable - {}×{}",
                self.size.width.round(),
                self.size.height.round()
            )
        } else {
            "Resizable".to_string()
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            options: &self.options,
            log: &self.log,
            size: self.size,
            status: self.status.as_deref(),
        })
    }

    /// Records a notification, dropping the oldest past the log capacity.
    fn record(&mut self, event: ResizeEvent) {
        if self.log.len() == MAX_LOG_ENTRIES {
            self.log.pop_front();
        }
        self.log.push_back(event);
    }
}

/// Applies command-line overrides on top of the configured options.
fn apply_flags(mut options: ResizeOptions, flags: &Flags) -> ResizeOptions {
    if let Some(direction) = flags.direction {
        options.direction = direction;
    }
    if let Some(step) = flags.step {
        options.step = step;
    }
    if flags.ghost {
        options.allow_ghost_resize = true;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resize::{Direction, StepDelta};

    #[test]
    fn flags_override_configured_options() {
        let flags = Flags {
            direction: Some(Direction::East),
            step: Some(5.0),
            ghost: true,
            ..Flags::default()
        };
        let options = apply_flags(ResizeOptions::default(), &flags);
        assert_eq!(options.direction, Direction::East);
        assert_eq!(options.step, 5.0);
        assert!(options.allow_ghost_resize);
    }

    #[test]
    fn absent_flags_keep_configured_options() {
        let configured = ResizeOptions::new(Direction::SouthEast).step(10.0);
        let options = apply_flags(configured.clone(), &Flags::default());
        assert_eq!(options, configured);
    }

    #[test]
    fn default_app_starts_at_initial_size() {
        let app = App::default();
        assert_eq!(app.size, ResizeOptions::default().initial_size());
        assert!(app.log.is_empty());
        assert_eq!(app.title(), "Resizable");
    }

    #[test]
    fn log_is_bounded() {
        let mut app = App::default();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            app.record(ResizeEvent::Stepped(StepDelta {
                dx: 0.0,
                dy: i as f32,
            }));
        }
        assert_eq!(app.log.len(), MAX_LOG_ENTRIES);
        assert_eq!(
            app.log.front(),
            Some(&ResizeEvent::Stepped(StepDelta { dx: 0.0, dy: 5.0 }))
        );
    }
}
