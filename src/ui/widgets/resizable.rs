// SPDX-License-Identifier: MPL-2.0
//! A box that the user resizes by dragging its bottom edge, right edge or
//! bottom-right corner.
//!
//! The widget keeps a [`ResizeSession`] in its tree state and feeds it the
//! cursor positions it receives. Session notifications are turned into the
//! messages registered with `on_start_resize`, `on_stop_resize`,
//! `on_each_step` and `on_during_resize`.
//!
//! While a gesture is active the wrapped content stops receiving mouse events,
//! so dragging across it does not select text or press buttons.

use crate::resize::{
    ContentGate, Direction, ResizeEvent, ResizeListener, ResizeOptions, ResizeSession, StepDelta,
};
use crate::ui::styles::resizable::{Catalog, Status, Style, StyleFn};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Background, Color, Element, Event, Length, Point, Rectangle, Size, Vector};

/// A resizable box wrapping a single child.
pub struct Resizable<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer>
where
    Theme: Catalog,
{
    content: Element<'a, Message, Theme, Renderer>,
    options: ResizeOptions,
    callbacks: Callbacks<'a, Message>,
    class: Theme::Class<'a>,
}

struct Callbacks<'a, Message> {
    on_start_resize: Option<Box<dyn Fn(StepDelta) -> Message + 'a>>,
    on_stop_resize: Option<Box<dyn Fn(StepDelta) -> Message + 'a>>,
    on_each_step: Option<Box<dyn Fn(StepDelta) -> Message + 'a>>,
    on_during_resize: Option<Box<dyn Fn(Size) -> Message + 'a>>,
}

impl<Message> Default for Callbacks<'_, Message> {
    fn default() -> Self {
        Self {
            on_start_resize: None,
            on_stop_resize: None,
            on_each_step: None,
            on_during_resize: None,
        }
    }
}

/// Publishes session notifications as messages on the shell.
struct Publisher<'a, 'b, 's, Message> {
    callbacks: &'b Callbacks<'a, Message>,
    shell: &'b mut Shell<'s, Message>,
}

impl<Message> ResizeListener for Publisher<'_, '_, '_, Message> {
    fn on_start_resize(&mut self, delta: StepDelta) {
        if let Some(on_start_resize) = &self.callbacks.on_start_resize {
            self.shell.publish(on_start_resize(delta));
        }
    }

    fn on_stop_resize(&mut self, delta: StepDelta) {
        if let Some(on_stop_resize) = &self.callbacks.on_stop_resize {
            self.shell.publish(on_stop_resize(delta));
        }
    }

    fn on_each_step(&mut self, delta: StepDelta) {
        if let Some(on_each_step) = &self.callbacks.on_each_step {
            self.shell.publish(on_each_step(delta));
        }
    }

    fn on_during_resize(&mut self, size: Size) {
        if let Some(on_during_resize) = &self.callbacks.on_during_resize {
            self.shell.publish(on_during_resize(size));
        }
    }
}

impl<'a, Message, Theme, Renderer> Resizable<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    /// Creates a new `Resizable` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        options: ResizeOptions,
    ) -> Self {
        Self {
            content: content.into(),
            options,
            callbacks: Callbacks::default(),
            class: Theme::default(),
        }
    }

    /// Message produced when a gesture starts, with the delta in steps.
    #[must_use]
    pub fn on_start_resize(mut self, f: impl Fn(StepDelta) -> Message + 'a) -> Self {
        self.callbacks.on_start_resize = Some(Box::new(f));
        self
    }

    /// Message produced when a gesture ends, with the delta in steps.
    #[must_use]
    pub fn on_stop_resize(mut self, f: impl Fn(StepDelta) -> Message + 'a) -> Self {
        self.callbacks.on_stop_resize = Some(Box::new(f));
        self
    }

    /// Message produced each time a new step is reached (`step > 1` only).
    #[must_use]
    pub fn on_each_step(mut self, f: impl Fn(StepDelta) -> Message + 'a) -> Self {
        self.callbacks.on_each_step = Some(Box::new(f));
        self
    }

    /// Message produced for every pointer sample (`step == 1` only).
    #[must_use]
    pub fn on_during_resize(mut self, f: impl Fn(Size) -> Message + 'a) -> Self {
        self.callbacks.on_during_resize = Some(Box::new(f));
        self
    }

    /// Sets the style of the box, its handle and its ghost overlay.
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the box.
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

/// Tree state: the session survives rebuilds of the view.
struct State {
    options: ResizeOptions,
    session: ResizeSession<ContentGate>,
    handle_hovered: bool,
    /// Stop delta of a gesture cut short by an options change, published on
    /// the next event.
    pending_stop: Option<StepDelta>,
}

impl State {
    fn new(options: &ResizeOptions) -> Self {
        Self {
            options: options.clone(),
            session: ResizeSession::with_host(options, ContentGate::default()),
            handle_hovered: false,
            pending_stop: None,
        }
    }

    fn status(&self) -> Status {
        if self.session.is_active() {
            Status::Resizing
        } else if self.handle_hovered {
            Status::Hovered
        } else {
            Status::Idle
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Resizable<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(&self.options))
    }

    fn size(&self) -> Size<Length> {
        Size::new(
            if self.options.full_width {
                Length::Fill
            } else {
                Length::Shrink
            },
            Length::Shrink,
        )
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let display = tree.state.downcast_ref::<State>().session.display_size();
        let size = box_size(display, self.options.full_width, limits.max().width);

        let content_limits = layout::Limits::new(Size::ZERO, size);
        let content =
            self.content
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, &content_limits);

        layout::Node::with_children(size, vec![content])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        let state = tree.state.downcast_mut::<State>();
        if state.options != self.options {
            log::debug!("resize options changed, resetting session");
            let mut interrupted = Vec::new();
            state.session.end(&mut interrupted);
            let pending_stop = interrupted.into_iter().find_map(|event| match event {
                ResizeEvent::Stopped(delta) => Some(delta),
                _ => None,
            });
            *state = State::new(&self.options);
            state.pending_stop = pending_stop;
        }
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_ref::<State>();
        let appearance = theme.style(&self.class, state.status());

        if appearance.background.is_some() || appearance.border.width > 0.0 {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: appearance.border,
                    ..renderer::Quad::default()
                },
                appearance
                    .background
                    .unwrap_or(Background::Color(Color::TRANSPARENT)),
            );
        }

        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                viewport,
            );
        }

        let constraints = state.session.constraints();
        if constraints.allow_ghost_resize && state.session.is_active() {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: ghost_bounds(
                        bounds,
                        state.session.current_size(),
                        constraints.full_width,
                    ),
                    border: appearance.ghost_border,
                    ..renderer::Quad::default()
                },
                appearance.ghost,
            );
        }

        if let Some(handle) = appearance.handle {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: handle_bounds(
                        self.options.direction,
                        bounds,
                        self.options.cursor_margin,
                    ),
                    ..renderer::Quad::default()
                },
                handle,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let handle = handle_bounds(self.options.direction, bounds, self.options.cursor_margin);
        let state = tree.state.downcast_mut::<State>();

        if let Some(delta) = state.pending_stop.take() {
            Publisher {
                callbacks: &self.callbacks,
                shell: &mut *shell,
            }
            .on_stop_resize(delta);
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if !state.session.is_active() =>
            {
                if let Some(position) = cursor.position_over(handle) {
                    let mut publisher = Publisher {
                        callbacks: &self.callbacks,
                        shell: &mut *shell,
                    };
                    state.session.begin(position, &mut publisher);
                    shell.capture_event();
                    shell.request_redraw();
                    return;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if state.session.is_active() => {
                // The raw event position is in window coordinates. The cursor
                // and viewport share the anchor's space, which a scrollable
                // translates. Leaving the viewport ends the gesture.
                let Some(position) = cursor
                    .land()
                    .position()
                    .filter(|position| viewport.contains(*position))
                else {
                    end_gesture(state, &self.callbacks, shell);
                    return;
                };

                let before = state.session.display_size();
                let mut publisher = Publisher {
                    callbacks: &self.callbacks,
                    shell: &mut *shell,
                };
                state.session.update(position, &mut publisher);
                if state.session.display_size() != before {
                    shell.invalidate_layout();
                }
                shell.capture_event();
                shell.request_redraw();
                return;
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Mouse(mouse::Event::CursorLeft)
                if state.session.is_active() =>
            {
                end_gesture(state, &self.callbacks, shell);
                return;
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let hovered = cursor.is_over(handle);
                if hovered != state.handle_hovered {
                    state.handle_hovered = hovered;
                    shell.request_redraw();
                }
            }
            _ => {}
        }

        if !state.session.host().is_open() && is_mouse_event(event) {
            return;
        }

        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                content_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        let handle = handle_bounds(
            self.options.direction,
            layout.bounds(),
            self.options.cursor_margin,
        );

        if state.session.is_active() || cursor.is_over(handle) {
            return resize_interaction(self.options.direction);
        }

        layout
            .children()
            .next()
            .map(|content_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    content_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or_default()
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Resizable<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(resizable: Resizable<'a, Message, Theme, Renderer>) -> Self {
        Self::new(resizable)
    }
}

/// Helper function to create a resizable box.
pub fn resizable<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    options: ResizeOptions,
) -> Resizable<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    Resizable::new(content, options)
}

fn end_gesture<Message>(
    state: &mut State,
    callbacks: &Callbacks<'_, Message>,
    shell: &mut Shell<'_, Message>,
) {
    let mut publisher = Publisher {
        callbacks,
        shell: &mut *shell,
    };
    state.session.end(&mut publisher);
    shell.invalidate_layout();
    shell.capture_event();
    shell.request_redraw();
}

/// Size of the laid-out box. Full-width boxes take the available width,
/// unless it is unbounded.
fn box_size(display: Size, full_width: bool, available_width: f32) -> Size {
    let width = if full_width && available_width.is_finite() {
        available_width
    } else {
        display.width
    };
    Size::new(width, display.height)
}

/// Draggable region of a box with the given bounds.
#[must_use]
pub fn handle_bounds(direction: Direction, bounds: Rectangle, cursor_margin: f32) -> Rectangle {
    let right = bounds.x + bounds.width;
    let bottom = bounds.y + bounds.height;

    match direction {
        Direction::South => Rectangle {
            x: bounds.x,
            y: bottom - cursor_margin,
            width: bounds.width,
            height: cursor_margin,
        },
        Direction::East => Rectangle {
            x: right - cursor_margin,
            y: bounds.y,
            width: cursor_margin,
            height: bounds.height,
        },
        Direction::SouthEast => Rectangle {
            x: right - cursor_margin,
            y: bottom - cursor_margin,
            width: cursor_margin,
            height: cursor_margin,
        },
    }
}

/// Ghost overlay anchored at the box origin with the live size.
#[must_use]
pub fn ghost_bounds(bounds: Rectangle, current: Size, full_width: bool) -> Rectangle {
    Rectangle::new(
        Point::new(bounds.x, bounds.y),
        Size::new(
            if full_width {
                bounds.width
            } else {
                current.width
            },
            current.height,
        ),
    )
}

/// Cursor shown over the handle and during a gesture.
#[must_use]
pub fn resize_interaction(direction: Direction) -> mouse::Interaction {
    match direction {
        Direction::South => mouse::Interaction::ResizingVertically,
        Direction::East => mouse::Interaction::ResizingHorizontally,
        Direction::SouthEast => mouse::Interaction::ResizingDiagonallyDown,
    }
}

fn is_mouse_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(_))
}
