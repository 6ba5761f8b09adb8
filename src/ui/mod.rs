// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! # Widgets
//!
//! - [`widgets`] - Custom Iced widgets (resizable box)
//! - [`styles`] - Widget styling (box, handle, ghost overlay)
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, opacity, spacing)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod widgets;
