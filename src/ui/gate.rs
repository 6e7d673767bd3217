use iced::widget::{button, column, container, mouse_area, text, text_input};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::gate::{Gate, GatePhase};
use crate::Message;

const CARD_WIDTH: f32 = 420.0;

/// Entry prompt covering the page until the gate is passed.
///
/// Only the prompt's own input and button react; the overlay itself swallows
/// clicks so the page underneath stays visually locked.
pub fn view<'a>(gate: &'a Gate, for_name: &'a str) -> Element<'a, Message> {
    let body = match gate.phase() {
        GatePhase::Unlocking => column![
            text("Welcome in ✨").size(28),
            text(format!("Made for {}", for_name)).size(16),
        ],
        GatePhase::Locked | GatePhase::Hidden => {
            let input = text_input("Type your answer", gate.input())
                .id(answer_input_id())
                .on_input(Message::GateInputChanged)
                .on_submit(Message::GateSubmit)
                .padding(10)
                .size(16);

            let mut form = column![
                text("One little question first").size(26),
                text("Where did it all begin?").size(16),
                input,
                button(text("Enter").size(16))
                    .padding([8, 24])
                    .style(style::control_button)
                    .on_press(Message::GateSubmit),
            ];

            if let Some(error) = gate.error() {
                form = form.push(text(error).size(14).style(style::error_text));
            }
            form
        }
    }
    .spacing(14)
    .align_x(Alignment::Center);

    let card = container(body)
        .padding(28)
        .width(Length::Fixed(CARD_WIDTH))
        .style(style::card);

    mouse_area(
        container(card)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(style::gate_screen),
    )
    .on_press(Message::Noop)
    .on_scroll(|_| Message::Noop)
    .into()
}

/// Id of the answer field, focused at startup while the gate is locked
pub fn answer_input_id() -> text_input::Id {
    text_input::Id::new("gate-answer")
}
