// SPDX-License-Identifier: MPL-2.0
//! Lifecycle notifications emitted by a [`ResizeSession`](super::ResizeSession).

use super::geometry::StepDelta;
use iced::Size;

/// Receives resize notifications synchronously, from within the pointer event
/// that caused them. Every method defaults to doing nothing.
pub trait ResizeListener {
    /// A gesture started on the handle.
    fn on_start_resize(&mut self, _delta: StepDelta) {}

    /// A gesture ended. Reports the in-flight delta, before any ghost revert.
    fn on_stop_resize(&mut self, _delta: StepDelta) {}

    /// The size crossed onto a new step boundary. Stepped mode only.
    fn on_each_step(&mut self, _delta: StepDelta) {}

    /// The size was recomputed for a pointer sample. Continuous mode only.
    fn on_during_resize(&mut self, _size: Size) {}
}

impl ResizeListener for () {}

/// Recorded form of a notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeEvent {
    Started(StepDelta),
    Stopped(StepDelta),
    Stepped(StepDelta),
    Resized(Size),
}

impl ResizeListener for Vec<ResizeEvent> {
    fn on_start_resize(&mut self, delta: StepDelta) {
        self.push(ResizeEvent::Started(delta));
    }

    fn on_stop_resize(&mut self, delta: StepDelta) {
        self.push(ResizeEvent::Stopped(delta));
    }

    fn on_each_step(&mut self, delta: StepDelta) {
        self.push(ResizeEvent::Stepped(delta));
    }

    fn on_during_resize(&mut self, size: Size) {
        self.push(ResizeEvent::Resized(size));
    }
}

impl std::fmt::Display for ResizeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeEvent::Started(d) => write!(f, "start ({}, {})", d.dx, d.dy),
            ResizeEvent::Stopped(d) => write!(f, "stop ({}, {})", d.dx, d.dy),
            ResizeEvent::Stepped(d) => write!(f, "step ({}, {})", d.dx, d.dy),
            ResizeEvent::Resized(s) => write!(f, "resize {}×{}", s.width, s.height),
        }
    }
}
