// SPDX-License-Identifier: MPL-2.0
//! Construction-time options of a resizable box.

use super::geometry::{Constraints, Direction};
use crate::config::defaults::{
    DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, DEFAULT_CURSOR_MARGIN, DEFAULT_STEP,
    DEFAULT_STEPPING_MARGIN,
};
use iced::Size;
use serde::{Deserialize, Serialize};

/// Options of a resizable box. Unset bounds fall back to the initial size
/// (minimum) or to unbounded (maximum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeOptions {
    pub direction: Direction,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    pub step: f32,
    pub stepping_margin: f32,
    /// Thickness of the draggable handle region.
    pub cursor_margin: f32,
    /// Only meaningful for [`Direction::SouthEast`].
    pub lock_aspect_ratio: bool,
    pub full_width: bool,
    pub allow_ghost_resize: bool,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            width: DEFAULT_BOX_WIDTH,
            height: DEFAULT_BOX_HEIGHT,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            step: DEFAULT_STEP,
            stepping_margin: DEFAULT_STEPPING_MARGIN,
            cursor_margin: DEFAULT_CURSOR_MARGIN,
            lock_aspect_ratio: false,
            full_width: false,
            allow_ghost_resize: false,
        }
    }
}

impl ResizeOptions {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    #[must_use]
    pub fn max_size(mut self, width: f32, height: f32) -> Self {
        self.max_width = Some(width);
        self.max_height = Some(height);
        self
    }

    #[must_use]
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn stepping_margin(mut self, margin: f32) -> Self {
        self.stepping_margin = margin;
        self
    }

    #[must_use]
    pub fn cursor_margin(mut self, margin: f32) -> Self {
        self.cursor_margin = margin;
        self
    }

    #[must_use]
    pub fn lock_aspect_ratio(mut self, lock: bool) -> Self {
        self.lock_aspect_ratio = lock;
        self
    }

    #[must_use]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    #[must_use]
    pub fn allow_ghost_resize(mut self, allow: bool) -> Self {
        self.allow_ghost_resize = allow;
        self
    }

    /// Initial size of the box.
    #[must_use]
    pub fn initial_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Resolves unset bounds into concrete constraints.
    ///
    /// Bounds are not cross-checked: a minimum above the maximum is kept.
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        let constraints = Constraints {
            min_size: Size::new(
                self.min_width.unwrap_or(self.width),
                self.min_height.unwrap_or(self.height),
            ),
            max_size: Size::new(
                self.max_width.unwrap_or(f32::INFINITY),
                self.max_height.unwrap_or(f32::INFINITY),
            ),
            direction: self.direction,
            step: self.step,
            stepping_margin: self.stepping_margin,
            lock_aspect_ratio: self.lock_aspect_ratio,
            full_width: self.full_width,
            allow_ghost_resize: self.allow_ghost_resize,
        };
        log::debug!("resolved resize constraints: {constraints:?}");
        constraints
    }
}
