// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window shows a control row for the box options, the resizable box
//! itself and the notification log.

use super::Message;
use crate::resize::{Direction, ResizeEvent, ResizeOptions};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::resizable;
use iced::{
    widget::{button, checkbox, container, pick_list, scrollable, text, Column, Row},
    Alignment, Element, Length, Size,
};
use std::collections::VecDeque;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub options: &'a ResizeOptions,
    pub log: &'a VecDeque<ResizeEvent>,
    pub size: Size,
    pub status: Option<&'a str>,
}

/// Renders the demo window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(text("Resizable box").size(typography::TITLE_MD))
        .push(view_controls(ctx.options));

    if let Some(status) = ctx.status {
        content = content.push(
            text(status)
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );
    }

    content
        .push(view_box(ctx.options, ctx.size))
        .push(view_log(ctx.log))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_controls(options: &ResizeOptions) -> Element<'_, Message> {
    let direction = pick_list(
        Direction::ALL,
        Some(options.direction),
        Message::DirectionSelected,
    )
    .padding(spacing::XXS);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .push(text("Direction").size(typography::BODY))
        .push(direction)
        .push(
            checkbox(options.allow_ghost_resize)
                .label("Ghost")
                .on_toggle(Message::GhostResizeToggled),
        )
        .push(
            checkbox(options.lock_aspect_ratio)
                .label("Lock aspect ratio")
                .on_toggle(Message::LockAspectRatioToggled),
        )
        .push(
            checkbox(options.full_width)
                .label("Full width")
                .on_toggle(Message::FullWidthToggled),
        )
        .push(button(text("Save").size(typography::BODY)).on_press(Message::SaveSettings))
        .into()
}

fn view_box(options: &ResizeOptions, size: Size) -> Element<'_, Message> {
    let label = text(format!(
        "{}×{}",
        size.width.round(),
        size.height.round()
    ))
    .size(typography::BODY);

    resizable(container(label).padding(spacing::XS), options.clone())
        .style(styles::resizable::surface)
        .on_start_resize(Message::ResizeStarted)
        .on_stop_resize(Message::ResizeStopped)
        .on_each_step(Message::ResizeStepped)
        .on_during_resize(Message::Resized)
        .into()
}

fn view_log(log: &VecDeque<ResizeEvent>) -> Element<'_, Message> {
    let entries = log.iter().rev().fold(Column::new().spacing(spacing::XXS), |column, event| {
        column.push(text(event.to_string()).size(typography::CAPTION))
    });

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(text("Events").size(typography::BODY))
        .push(button(text("Clear").size(typography::CAPTION)).on_press(Message::ClearLog));

    Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(scrollable(entries).height(Length::Fill).width(Length::Fill))
        .height(Length::Fill)
        .into()
}
