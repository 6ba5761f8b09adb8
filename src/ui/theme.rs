// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the resizable box and the demo.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
};
use iced::Color;

/// Fill of the ghost preview overlay.
pub fn ghost_overlay_color() -> Color {
    Color {
        a: opacity::GHOST,
        ..BLACK
    }
}

/// Fill of the resize handle while hovered or dragged.
pub fn handle_active_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::PRIMARY_500
    }
}

/// Fill of the resize handle at rest.
pub fn handle_idle_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::GRAY_400
    }
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}
