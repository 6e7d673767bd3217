use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{lightbox::control, style};
use crate::config::GalleryConfig;
use crate::Message;

/// Title, the For/Date chips and the collection controls
pub fn view<'a>(config: &'a GalleryConfig, slideshow: bool) -> Element<'a, Message> {
    let chips = row![
        chip(format!("For: {}", config.for_name)),
        chip(format!("Date: {}", config.date_label)),
    ]
    .spacing(8);

    let play_label = if slideshow { "Stop slideshow" } else { "Play slideshow" };

    let controls = row![
        control("Shuffle", Message::Shuffle),
        control("Reset", Message::Reset),
        control(play_label, Message::ToggleSlideshow),
    ]
    .spacing(10);

    let top = row![
        column![text("Moments").size(40), chips].spacing(10),
        Space::with_width(Length::Fill),
        controls,
    ]
    .align_y(Alignment::Center);

    container(top).padding([24, 32]).width(Length::Fill).into()
}

/// Footer with the current year
pub fn footer<'a>(year: i32) -> Element<'a, Message> {
    container(text(format!("Made with love · {}", year)).size(13))
        .padding(16)
        .center_x(Length::Fill)
        .into()
}

fn chip<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(13))
        .padding([4, 12])
        .style(style::chip)
        .into()
}
