use iced::widget::canvas::{self, event, Program};
use iced::widget::{button, column, container, image, mouse_area, row, text, Stack};
use iced::{mouse, Alignment, Color, ContentFit, Element, Length, Point, Rectangle, Renderer, Theme};

use super::{grid, style};
use crate::photo::{PhotoCache, Slot};
use crate::state::data::PhotoRecord;
use crate::Message;

const FRAME_WIDTH: f32 = 960.0;
const FRAME_HEIGHT: f32 = 640.0;
const PLACEHOLDER_SIZE: f32 = 420.0;

/// Full-view overlay for one photo.
///
/// Two layers: a backdrop that closes the lightbox on a mouse click (and
/// swallows scrolling so the grid underneath stays put), and the content on
/// top, which captures its own clicks so they never reach the backdrop.
pub fn view<'a>(
    photo: &'a PhotoRecord,
    cache: &'a PhotoCache,
    slideshow: bool,
) -> Element<'a, Message> {
    let backdrop = iced::widget::canvas(Backdrop).width(Length::Fill).height(Length::Fill);

    let frame: Element<'a, Message> = match cache.frame(photo.id) {
        Some(Slot::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(FRAME_WIDTH))
            .height(Length::Fixed(FRAME_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Slot::Failed) => grid::placeholder(photo, PLACEHOLDER_SIZE),
        Some(Slot::Loading) | None => container(text("Loading…").size(16))
            .width(Length::Fixed(FRAME_WIDTH))
            .height(Length::Fixed(FRAME_HEIGHT))
            .center_x(Length::Fixed(FRAME_WIDTH))
            .center_y(Length::Fixed(FRAME_HEIGHT))
            .into(),
    };

    let play_label = if slideshow { "Stop slideshow" } else { "Play slideshow" };

    let controls = row![
        control("‹ Prev", Message::Prev),
        control(play_label, Message::ToggleSlideshow),
        control("Next ›", Message::Next),
        control("Close", Message::CloseLightbox),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let content = column![frame, text(photo.caption()).size(16), controls]
        .spacing(14)
        .align_x(Alignment::Center);

    let foreground = container(mouse_area(content).on_press(Message::Noop))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    Stack::with_children(vec![backdrop.into(), foreground.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub fn control<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(15))
        .padding([8, 16])
        .style(style::control_button)
        .on_press(message)
        .into()
}

const BACKDROP_COLOR: Color = Color::from_rgba(0.02, 0.01, 0.03, 0.88);

/// Dimmed layer behind the lightbox content.
///
/// Only a left mouse press closes the lightbox. Touches pass through so a
/// swipe that starts beside the photo still navigates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backdrop;

impl Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKDROP_COLOR);
        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if !cursor.is_over(bounds) {
            return (event::Status::Ignored, None);
        }

        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                (event::Status::Captured, Some(Message::CloseLightbox))
            }
            // Keep the grid underneath from scrolling
            canvas::Event::Mouse(mouse::Event::WheelScrolled { .. }) => {
                (event::Status::Captured, None)
            }
            _ => (event::Status::Ignored, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{touch, Size};

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0))
    }

    fn press(event: canvas::Event) -> (event::Status, Option<Message>) {
        let cursor = mouse::Cursor::Available(Point::new(40.0, 300.0));
        Backdrop.update(&mut (), event, bounds(), cursor)
    }

    #[test]
    fn test_mouse_click_closes() {
        let (status, message) =
            press(canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));
        assert_eq!(status, event::Status::Captured);
        assert!(matches!(message, Some(Message::CloseLightbox)));
    }

    #[test]
    fn test_touch_passes_through() {
        let (status, message) = press(canvas::Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(40.0, 300.0),
        }));
        assert_eq!(status, event::Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn test_scroll_is_swallowed_without_message() {
        let (status, message) = press(canvas::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        }));
        assert_eq!(status, event::Status::Captured);
        assert!(message.is_none());
    }

    #[test]
    fn test_click_outside_bounds_ignored() {
        let (status, message) = Backdrop.update(
            &mut (),
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            mouse::Cursor::Unavailable,
        );
        assert_eq!(status, event::Status::Ignored);
        assert!(message.is_none());
    }
}
