// SPDX-License-Identifier: MPL-2.0
//! `iced_resizable` is a resizable box widget for the Iced GUI framework.
//!
//! The box is resized by dragging its bottom edge, its right edge or its
//! bottom-right corner. Resizing can be quantized into steps, bounded by
//! minimum and maximum sizes, locked to the original aspect ratio, or run in
//! ghost mode where a preview is shown and the box reverts on release.
//!
//! The gesture logic lives in [`resize`] and is independent of Iced's widget
//! tree; [`ui::widgets::resizable`] drives it from mouse events.

#![doc(html_root_url = "https://docs.rs/iced_resizable/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod resize;
pub mod ui;
