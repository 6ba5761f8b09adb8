// SPDX-License-Identifier: MPL-2.0
//! Resize gesture state machine.
//!
//! A session is idle until [`ResizeSession::begin`] is called from a press on
//! the handle, follows the pointer through [`ResizeSession::update`] and
//! returns to idle on [`ResizeSession::end`]. The session outlives gestures:
//! only the base size carries over from one gesture to the next.

use super::geometry::{self, Constraints, StepDelta};
use super::listener::ResizeListener;
use super::options::ResizeOptions;
use super::selection::SelectionHost;
use iced::{Point, Size};

/// Gesture state and live dimensions of one resizable box.
#[derive(Debug)]
pub struct ResizeSession<H: SelectionHost = ()> {
    active: bool,
    anchor: Point,
    base_size: Size,
    original_size: Size,
    current_size: Size,
    last_step_size: Option<Size>,
    constraints: Constraints,
    host: H,
}

impl ResizeSession<()> {
    /// Creates a session without a selection host.
    #[must_use]
    pub fn new(options: &ResizeOptions) -> Self {
        Self::with_host(options, ())
    }
}

impl<H: SelectionHost> ResizeSession<H> {
    /// Creates a session whose `host` is suspended while a gesture is active.
    pub fn with_host(options: &ResizeOptions, host: H) -> Self {
        let size = options.initial_size();
        Self {
            active: false,
            anchor: Point::ORIGIN,
            base_size: size,
            original_size: size,
            current_size: size,
            last_step_size: None,
            constraints: options.constraints(),
            host,
        }
    }

    /// Starts a gesture at `pointer`.
    pub fn begin(&mut self, pointer: Point, listener: &mut impl ResizeListener) {
        self.host.set_selectable(false);
        self.anchor = pointer;
        self.active = true;
        log::debug!(
            "resize started at ({}, {}) from {:?}",
            pointer.x,
            pointer.y,
            self.base_size
        );
        listener.on_start_resize(self.delta());
    }

    /// Follows the pointer. Does nothing while idle.
    pub fn update(&mut self, pointer: Point, listener: &mut impl ResizeListener) {
        if !self.active {
            return;
        }

        let proposal = geometry::propose(
            &self.constraints,
            self.anchor,
            pointer,
            self.base_size,
            self.original_size,
        );
        self.current_size = proposal.commit(self.current_size);

        if self.constraints.is_continuous() {
            listener.on_during_resize(self.current_size);
        }

        if self.constraints.is_stepped() && self.last_step_size != Some(self.current_size) {
            listener.on_each_step(self.delta());
            self.last_step_size = Some(self.current_size);
        }
    }

    /// Ends the gesture. Safe to call while idle.
    ///
    /// Commits the size for the next gesture, or reverts it in ghost mode.
    pub fn end(&mut self, listener: &mut impl ResizeListener) {
        if self.active {
            listener.on_stop_resize(self.delta());
            log::debug!("resize stopped at {:?}", self.current_size);
        }

        if self.constraints.allow_ghost_resize {
            self.current_size = self.original_size;
        } else {
            self.base_size = self.current_size;
        }

        self.host.set_selectable(true);
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn current_size(&self) -> Size {
        self.current_size
    }

    #[must_use]
    pub fn base_size(&self) -> Size {
        self.base_size
    }

    #[must_use]
    pub fn original_size(&self) -> Size {
        self.original_size
    }

    /// Size the box occupies in layout. The ghost overlay shows the live size
    /// instead while ghost resizing.
    #[must_use]
    pub fn display_size(&self) -> Size {
        if self.constraints.allow_ghost_resize {
            self.original_size
        } else {
            self.current_size
        }
    }

    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Size change since creation, in steps.
    #[must_use]
    pub fn delta(&self) -> StepDelta {
        StepDelta::between(self.current_size, self.original_size, self.constraints.step)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: SelectionHost> Drop for ResizeSession<H> {
    fn drop(&mut self) {
        if self.active {
            self.host.set_selectable(true);
        }
    }
}
