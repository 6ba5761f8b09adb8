// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent resize logic.
//!
//! This module contains the gesture state machine and geometry used by the
//! resizable widget, kept free of widget plumbing so it can be driven and
//! tested with plain pointer coordinates.

pub mod geometry;
pub mod listener;
pub mod options;
pub mod selection;
pub mod session;

// Re-export commonly used types for convenience
pub use geometry::{Constraints, Direction, StepDelta};
pub use listener::{ResizeEvent, ResizeListener};
pub use options::ResizeOptions;
pub use selection::{ContentGate, SelectionHost};
pub use session::ResizeSession;
