use iced::widget::{button, horizontal_space, row, text};
use iced::{Alignment, Element};

use super::chip;
use crate::{Message, Page};

/// Top navigation bar
pub fn view<'a>(current: Page) -> Element<'a, Message> {
    let nav = |label: &'a str, page: Page| {
        button(text(label))
            .padding([8, 16])
            .style(chip(current == page))
            .on_press(Message::Navigate(page))
    };

    row![
        text("Artisan Market").size(28),
        horizontal_space(),
        nav("Artworks", Page::Catalog),
        nav("Profile", Page::Profile),
        nav("Create", Page::Create),
    ]
    .spacing(12)
    .padding(20)
    .align_y(Alignment::Center)
    .into()
}
