//! Input routing
//!
//! Translates raw keyboard and touch events into gallery messages.
//! Pointer input (tile clicks, buttons, the backdrop click) is wired directly in the
//! views; this module covers the events that arrive through subscriptions.

use iced::keyboard::{self, key::Named, Key};
use iced::{event, touch, window, Event, Point};

use crate::Message;

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Prev,
    Next,
}

/// Classify a finished touch gesture by its displacement.
///
/// Too short (`|dx| < 40`) or mostly vertical (`|dx| < |dy|`) gestures are
/// ignored. Dragging right goes back, dragging left goes forward.
pub fn classify_swipe(dx: f32, dy: f32) -> Option<SwipeDirection> {
    if dx.abs() < SWIPE_THRESHOLD || dx.abs() < dy.abs() {
        return None;
    }
    if dx > 0.0 {
        Some(SwipeDirection::Prev)
    } else {
        Some(SwipeDirection::Next)
    }
}

/// Remembers where the current touch started
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(touch::Finger, Point)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a touch event; returns a direction when a swipe completes
    pub fn handle(&mut self, event: touch::Event) -> Option<SwipeDirection> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.start = Some((id, position));
                None
            }
            touch::Event::FingerLifted { id, position } => match self.start.take() {
                Some((finger, start)) if finger == id => {
                    classify_swipe(position.x - start.x, position.y - start.y)
                }
                other => {
                    // A different finger lifted; keep tracking the first one
                    self.start = other;
                    None
                }
            },
            touch::Event::FingerLost { id, .. } => {
                if matches!(self.start, Some((finger, _)) if finger == id) {
                    self.start = None;
                }
                None
            }
            touch::Event::FingerMoved { .. } => None,
        }
    }
}

/// Keyboard shortcuts available while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Close,
    Prev,
    Next,
    ToggleSlideshow,
}

pub fn key_intent(key: &Key) -> Option<KeyIntent> {
    match key {
        Key::Named(Named::Escape) => Some(KeyIntent::Close),
        Key::Named(Named::ArrowLeft) => Some(KeyIntent::Prev),
        Key::Named(Named::ArrowRight) => Some(KeyIntent::Next),
        Key::Named(Named::Space) => Some(KeyIntent::ToggleSlideshow),
        _ => None,
    }
}

/// Subscription callback for key presses
pub fn on_key_press(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    key_intent(&key).map(Message::Key)
}

/// Subscription callback for touch events
pub fn on_touch(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Touch(touch) => Some(Message::Touch(touch)),
        _ => None,
    }
}
