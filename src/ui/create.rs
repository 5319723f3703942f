/// Create page: product info, content generation and the post preview
use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, text, text_editor, text_input,
    Column, Row,
};
use iced::{Alignment, Element, Length};

use super::{chip, format_price};
use crate::state::data::Category;
use crate::state::post::{ContentKind, DraftError, PostDraft, PostPreview};
use crate::{DraftTab, Message};

/// Everything the Create page renders from
pub struct CreateView<'a> {
    pub draft: &'a PostDraft,
    pub tab: DraftTab,
    pub image_input: &'a str,
    pub content: &'a text_editor::Content,
    pub error: Option<&'a DraftError>,
    pub preview: Option<(&'a PostPreview, &'a str)>,
}

pub fn view(page: CreateView<'_>) -> Element<'_, Message> {
    let tabs = row![
        button(text("🏺 Product Info"))
            .padding([10, 20])
            .style(chip(page.tab == DraftTab::Product))
            .on_press(Message::DraftTabSelected(DraftTab::Product)),
        button(text("✍️ Create Content"))
            .padding([10, 20])
            .style(chip(page.tab == DraftTab::Content))
            .on_press(Message::DraftTabSelected(DraftTab::Content)),
    ]
    .spacing(8);

    let body = match page.tab {
        DraftTab::Product => product_tab(page.draft, page.image_input),
        DraftTab::Content => content_tab(page.draft, page.content),
    };

    let mut form = column![tabs, body].spacing(20);
    if let Some(error) = page.error {
        form = form.push(text(error.to_string()).style(text::danger));
    }

    let preview = match page.preview {
        Some((preview, stamp)) => preview_card(preview, stamp),
        None => container(text("Fill in your product details and preview your post here"))
            .padding(24)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into(),
    };

    column![
        column![
            text("Share Your Art").size(40),
            text("Showcase your traditional crafts and connect with art lovers worldwide").size(18),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill),
        row![
            container(form)
                .padding(24)
                .width(Length::FillPortion(1))
                .style(container::rounded_box),
            container(preview).width(Length::FillPortion(1)),
        ]
        .spacing(24),
    ]
    .spacing(24)
    .into()
}

fn product_tab<'a>(draft: &'a PostDraft, image_input: &'a str) -> Element<'a, Message> {
    let attached: Vec<Element<'a, Message>> = draft
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            row![
                text(image.as_str()).size(14),
                horizontal_space(),
                button(text("×"))
                    .style(button::danger)
                    .on_press(Message::RemoveImage(index)),
            ]
            .align_y(Alignment::Center)
            .into()
        })
        .collect();
    let images = Column::with_children(attached).spacing(6);

    column![
        text("Product Name *").size(14),
        text_input("Enter your artwork name", &draft.product_name)
            .on_input(Message::ProductNameChanged),
        text("Category *").size(14),
        pick_list(Category::ALL, draft.category, Message::DraftCategorySelected)
            .placeholder("Select a category"),
        text("Description *").size(14),
        text_input(
            "Describe your artwork, techniques used, inspiration...",
            &draft.description,
        )
        .on_input(Message::DescriptionChanged),
        text("Price ($)").size(14),
        text_input("Enter price (optional)", &draft.price).on_input(Message::PriceChanged),
        text("Product Images").size(14),
        row![
            text_input("Path or URL of an image", image_input)
                .on_input(Message::ImageInputChanged)
                .on_submit(Message::AddImage),
            button("Add").on_press(Message::AddImage),
        ]
        .spacing(8),
        images,
        button("Next: Create Content →")
            .padding([12, 24])
            .width(Length::Fill)
            .style(button::primary)
            .on_press(Message::DraftTabSelected(DraftTab::Content)),
    ]
    .spacing(10)
    .into()
}

fn content_tab<'a>(draft: &'a PostDraft, content: &'a text_editor::Content) -> Element<'a, Message> {
    let kind_buttons: Vec<Element<'a, Message>> = ContentKind::ALL
        .into_iter()
        .map(|kind| {
            button(column![text(kind.to_string()).size(16), text(kind.blurb()).size(12)].spacing(4))
                .padding(12)
                .width(Length::Fill)
                .style(chip(draft.kind == kind))
                .on_press(Message::ContentKindSelected(kind))
                .into()
        })
        .collect();
    let kinds = Row::with_children(kind_buttons).spacing(8);

    column![
        text("Choose Content Type").size(14),
        kinds,
        button("✨ Generate AI Content")
            .padding([12, 24])
            .width(Length::Fill)
            .style(button::primary)
            .on_press_maybe(draft.can_generate().then_some(Message::GenerateContent)),
        text("Content").size(14),
        text_editor(content)
            .placeholder("Your generated content will appear here, or write your own...")
            .on_action(Message::ContentEdited)
            .height(Length::Fixed(280.0)),
        row![
            button("← Back to Product")
                .style(button::secondary)
                .on_press(Message::DraftTabSelected(DraftTab::Product)),
            horizontal_space(),
            button("Preview & Post")
                .style(button::primary)
                .on_press(Message::PreviewPost),
        ],
    ]
    .spacing(12)
    .into()
}

fn preview_card<'a>(preview: &'a PostPreview, stamp: &'a str) -> Element<'a, Message> {
    let mut card = column![
        row![
            text(preview.category.name()).size(13),
            horizontal_space(),
            text(stamp).size(13),
        ],
        text(preview.product_name.as_str()).size(24),
    ]
    .spacing(12);

    if let Some(cover) = &preview.cover {
        let label = match preview.image_count {
            1 => format!("🖼 {}", cover),
            n => format!("🖼 {} (+{} more)", cover, n - 1),
        };
        card = card.push(text(label).size(14));
    }

    card = card.push(text(preview.content.as_str()));

    if let Some(price) = preview.price {
        card = card.push(text(format_price(price)).size(22));
    }

    card = card.push(
        button("🚀 Publish Post")
            .padding([12, 24])
            .width(Length::Fill)
            .style(button::success)
            .on_press(Message::PublishPost),
    );

    container(card)
        .padding(24)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
