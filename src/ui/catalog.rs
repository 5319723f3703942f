/// Artworks page: search, sort, category chips and the product grid
use iced::widget::{button, column, container, horizontal_space, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::{chip, format_price};
use crate::state::data::{Category, Listing};
use crate::state::filter::{FilterState, SortBy};
use crate::state::library::Library;
use crate::Message;

const CARD_WIDTH: f32 = 300.0;

pub fn view<'a>(library: &'a Library, filter: &'a FilterState, visible: usize) -> Element<'a, Message> {
    let listings = library.view(filter);

    let search = text_input("Search artworks or artists...", &filter.search)
        .on_input(Message::SearchChanged)
        .padding(12);

    let sort = pick_list(SortBy::ALL, Some(filter.sort), Message::SortSelected).padding(12);

    let selected = filter.category.to_string();
    let categories: Vec<Element<'a, Message>> = std::iter::once("All")
        .chain(Category::ALL.into_iter().map(Category::name))
        .map(|name| {
            container(
                button(text(name))
                    .padding([6, 18])
                    .style(chip(selected == name))
                    .on_press(Message::CategorySelected(name.to_string())),
            )
            .padding(4)
            .into()
        })
        .collect();

    let total = listings.len();
    let mut summary = format!("Showing {} artworks", total);
    if !filter.category.is_all() {
        summary.push_str(&format!(" in {}", filter.category));
    }

    let mut content = column![
        text("Artisan Marketplace").size(40),
        text("Discover unique handcrafted pieces from talented artisans around the world").size(18),
        row![search, sort].spacing(16).align_y(Alignment::Center),
        Wrap::with_elements(categories),
        text(summary).size(16),
    ]
    .spacing(20);

    if total == 0 {
        content = content.push(empty_state());
    } else {
        let cards: Vec<Element<'a, Message>> = listings
            .into_iter()
            .take(visible)
            .map(|listing| card(library, listing))
            .collect();
        content = content.push(Wrap::with_elements(cards));

        if total > visible {
            content = content.push(
                container(
                    button("Load More Artworks")
                        .padding([12, 24])
                        .style(button::primary)
                        .on_press(Message::LoadMore),
                )
                .center_x(Length::Fill),
            );
        }
    }

    content.into()
}

fn card<'a>(library: &Library, listing: &'a Listing) -> Element<'a, Message> {
    let favorite = library.is_favorite(&listing.id);
    let favorite_label = if favorite { "♥ Favorited" } else { "♡ Favorite" };

    let body = column![
        row![
            text(listing.category.name()).size(13),
            horizontal_space(),
            text(format_price(listing.price)).size(20),
        ]
        .align_y(Alignment::Center),
        text(listing.title.as_str()).size(20),
        text(format!("by {}", listing.artist)).size(15),
        text(listing.description.as_str()).size(14),
        text(listing.image.as_str()).size(11),
        row![
            text(format!("{} likes", library.like_count(listing))).size(14),
            horizontal_space(),
            button(text(favorite_label))
                .style(chip(favorite))
                .on_press(Message::ToggleFavorite(listing.id.clone())),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    container(
        container(body)
            .padding(16)
            .width(Length::Fixed(CARD_WIDTH))
            .style(container::rounded_box),
    )
    .padding(8)
    .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text("No artworks found").size(24),
            text("Try adjusting your search or filter criteria"),
            button("Clear Filters")
                .padding([12, 24])
                .style(button::primary)
                .on_press(Message::ClearFilters),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .center_x(Length::Fill)
    .into()
}
