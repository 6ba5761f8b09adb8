// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::config;
use crate::resize::{ResizeEvent, StepDelta};
use iced::{Size, Task};

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ResizeStarted(delta) => {
                self.resizing = true;
                self.record(ResizeEvent::Started(delta));
            }
            Message::ResizeStopped(delta) => {
                self.resizing = false;
                self.record(ResizeEvent::Stopped(delta));
                // Ghost boxes snap back to their original size on release.
                self.size = if self.options.allow_ghost_resize {
                    self.options.initial_size()
                } else {
                    self.options_size_after(delta)
                };
            }
            Message::ResizeStepped(delta) => {
                self.record(ResizeEvent::Stepped(delta));
                self.size = self.options_size_after(delta);
            }
            Message::Resized(size) => {
                // Continuous samples arrive for every cursor move; only the
                // latest size is kept, the log would drown otherwise.
                self.size = size;
            }
            Message::DirectionSelected(direction) => {
                self.options.direction = direction;
                self.reset_size();
            }
            Message::GhostResizeToggled(enabled) => {
                self.options.allow_ghost_resize = enabled;
                self.reset_size();
            }
            Message::LockAspectRatioToggled(enabled) => {
                self.options.lock_aspect_ratio = enabled;
                self.reset_size();
            }
            Message::FullWidthToggled(enabled) => {
                self.options.full_width = enabled;
                self.reset_size();
            }
            Message::SaveSettings => return self.handle_save_settings(),
            Message::ClearLog => self.log.clear(),
        }

        Task::none()
    }

    fn handle_save_settings(&mut self) -> Task<Message> {
        self.config.resize = self.options.clone();
        self.config.general.theme_mode = self.theme_mode;

        self.status = match config::save(&self.config) {
            Ok(()) => {
                log::info!("settings saved");
                Some("Settings saved".to_string())
            }
            Err(err) => {
                log::error!("failed to save settings: {err}");
                Some(format!("Could not save settings: {err}"))
            }
        };

        Task::none()
    }

    /// Changing an option rebuilds the box session, so the box is back at
    /// its configured size.
    fn reset_size(&mut self) {
        self.size = self.options.initial_size();
        self.resizing = false;
    }

    /// Size reached after moving `delta` steps from the configured size.
    fn options_size_after(&self, delta: StepDelta) -> Size {
        let initial = self.options.initial_size();
        Size::new(
            initial.width + delta.dx * self.options.step,
            initial.height + delta.dy * self.options.step,
        )
    }
}
