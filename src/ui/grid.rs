use iced::widget::{button, column, container, image, scrollable, text, tooltip, Column};
use iced::{Alignment, ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use super::style;
use crate::photo::{PhotoCache, Slot};
use crate::state::data::PhotoRecord;
use crate::Message;

/// Edge length of a grid tile in logical pixels
pub const TILE_SIZE: f32 = 200.0;

const TILE_SPACING: f32 = 14.0;

/// Render the whole grid, one tile per photo in the current order.
///
/// Tiles are rebuilt from scratch on every call. Each tile opens the lightbox
/// at its own position, so after a shuffle the click still lands on the photo
/// the user sees.
pub fn view<'a>(photos: &'a [PhotoRecord], cache: &'a PhotoCache) -> Element<'a, Message> {
    if photos.is_empty() {
        return container(text("No photos configured.").size(16))
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    let tiles: Vec<Element<'a, Message>> = photos
        .iter()
        .enumerate()
        .map(|(index, photo)| tile(index, photo, cache.thumbnail(photo.id)))
        .collect();

    let wrap = Wrap::with_elements(tiles)
        .spacing(Pixels(TILE_SPACING))
        .line_spacing(Pixels(TILE_SPACING));

    scrollable(container(wrap).padding(24).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn tile<'a>(index: usize, photo: &'a PhotoRecord, slot: Option<&'a Slot>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match slot {
        Some(Slot::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Slot::Failed) => placeholder(photo, TILE_SIZE),
        Some(Slot::Loading) | None => container(text("…").size(20))
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .center_x(Length::Fixed(TILE_SIZE))
            .center_y(Length::Fixed(TILE_SIZE))
            .style(style::loading_block)
            .into(),
    };

    let target = button(body)
        .padding(0)
        .style(style::tile_button)
        .on_press(Message::OpenLightbox(index));

    let labelled = tooltip(
        target,
        container(text(photo.alt_text()).size(13)).padding(6).style(style::chip),
        tooltip::Position::Bottom,
    );

    column![labelled, text(photo.label()).size(14)]
        .spacing(6)
        .align_x(Alignment::Center)
        .into()
}

/// Stand-in for a photo that could not be loaded, naming the file it expects
pub fn placeholder<'a>(photo: &PhotoRecord, size: f32) -> Element<'a, Message> {
    let label: Column<'a, Message> = column![
        text("Drop photo").size(15),
        text(photo.file_name()).size(17),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    container(label)
        .padding(16)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(style::placeholder)
        .into()
}
