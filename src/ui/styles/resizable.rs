// SPDX-License-Identifier: MPL-2.0
//! Styles for the resizable box, its handle and its ghost overlay.

use crate::ui::design_tokens::border;
use crate::ui::theme;
use iced::{Background, Border, Color, Theme};

/// Interaction status of a resizable box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    /// The cursor is over the handle.
    Hovered,
    /// A gesture is in flight.
    Resizing,
}

/// Appearance of a resizable box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Box background. `None` keeps it transparent.
    pub background: Option<Background>,
    pub border: Border,
    /// Handle fill. `None` leaves the handle invisible.
    pub handle: Option<Background>,
    /// Ghost preview overlay fill.
    pub ghost: Background,
    /// Ghost preview overlay outline.
    pub ghost_border: Border,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: None,
            border: Border::default(),
            handle: None,
            ghost: Background::Color(theme::ghost_overlay_color()),
            ghost_border: Border::default(),
        }
    }
}

/// The theme catalog of a resizable box.
pub trait Catalog {
    /// The item class of the [`Catalog`].
    type Class<'a>;

    /// The default class produced by the [`Catalog`].
    fn default<'a>() -> Self::Class<'a>;

    /// The [`Style`] of a class with the given status.
    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style;
}

/// A styling function for a resizable box.
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(default)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// Transparent box with a faint outline that highlights while resizing.
pub fn default(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let (outline, handle) = match status {
        Status::Idle => (palette.background.strong.color, theme::handle_idle_color()),
        Status::Hovered => (palette.background.strong.color, theme::handle_active_color()),
        Status::Resizing => (palette.primary.strong.color, theme::handle_active_color()),
    };

    Style {
        border: Border {
            color: outline,
            width: if status == Status::Resizing {
                border::WIDTH_MD
            } else {
                border::WIDTH_SM
            },
            radius: 0.0.into(),
        },
        handle: Some(Background::Color(handle)),
        ..Style::default()
    }
}

/// Box without outline or visible handle, matching a plain container.
pub fn plain(_theme: &Theme, _status: Status) -> Style {
    Style::default()
}

/// Filled box, for content that needs a visible surface.
pub fn surface(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();
    Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..default(theme, status)
    }
}

/// Overrides the ghost overlay color of another style.
pub fn with_ghost(
    base: impl Fn(&Theme, Status) -> Style,
    ghost: Color,
) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| Style {
        ghost: Background::Color(ghost),
        ..base(theme, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_uses_translucent_ghost() {
        let style = default(&Theme::Dark, Status::Idle);
        assert_eq!(style.ghost, Background::Color(theme::ghost_overlay_color()));
        assert!(style.background.is_none());
    }

    #[test]
    fn resizing_thickens_outline() {
        let idle = default(&Theme::Light, Status::Idle);
        let resizing = default(&Theme::Light, Status::Resizing);
        assert!(resizing.border.width > idle.border.width);
    }

    #[test]
    fn plain_style_hides_handle() {
        assert!(plain(&Theme::Light, Status::Hovered).handle.is_none());
    }

    #[test]
    fn with_ghost_only_changes_ghost() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let style = with_ghost(default, red)(&Theme::Dark, Status::Resizing);
        let base = default(&Theme::Dark, Status::Resizing);
        assert_eq!(style.ghost, Background::Color(red));
        assert_eq!(style.border, base.border);
    }
}
