/// Profile page: the art profile form and its generated summary
use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::chip;
use crate::state::profile::{Experience, ProfileError, ProfileForm, ART_INTERESTS};
use crate::Message;

pub fn view<'a>(
    form: &'a ProfileForm,
    summary: Option<&'a str>,
    error: Option<&'a ProfileError>,
    favorites: usize,
) -> Element<'a, Message> {
    let interests: Vec<Element<'a, Message>> = ART_INTERESTS
        .into_iter()
        .map(|interest| {
            container(
                button(text(interest))
                    .padding([8, 14])
                    .style(chip(form.has_interest(interest)))
                    .on_press(Message::InterestToggled(interest)),
            )
            .padding(4)
            .into()
        })
        .collect();

    let mut form_column = column![
        text("Personal Information").size(24),
        labeled(
            "Full Name *",
            text_input("Enter your full name", &form.name).on_input(Message::NameChanged),
        ),
        labeled(
            "Age *",
            text_input("Enter your age", &form.age).on_input(Message::AgeChanged),
        ),
        labeled(
            "Location",
            text_input("City, Country", &form.location).on_input(Message::LocationChanged),
        ),
        labeled(
            "Your Skills & Talents *",
            text_input(
                "Describe your artistic skills, hobbies, or talents...",
                &form.skills,
            )
            .on_input(Message::SkillsChanged),
        ),
        labeled(
            "Art Experience Level",
            pick_list(Experience::ALL, form.experience, Message::ExperienceSelected)
                .placeholder("Select your experience level"),
        ),
        text("Art Interests (Select all that apply)").size(14),
        Wrap::with_elements(interests),
        button("Generate AI Profile Summary")
            .padding([12, 24])
            .width(Length::Fill)
            .style(button::primary)
            .on_press(Message::GenerateSummary),
    ]
    .spacing(16);

    if let Some(error) = error {
        form_column = form_column.push(text(error.to_string()).style(text::danger));
    }

    let summary_body: Element<'a, Message> = match summary {
        Some(summary) => column![
            text(summary),
            button("Explore Recommended Art")
                .style(button::primary)
                .on_press(Message::Navigate(crate::Page::Catalog)),
        ]
        .spacing(16)
        .into(),
        None => text("Fill out your profile to get personalized art recommendations").into(),
    };

    let summary_panel = container(column![text("AI Profile Summary").size(24), summary_body].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .style(container::rounded_box);

    let stats = row![
        stat("Favorites", favorites),
        stat("Interests", form.interests.len()),
    ]
    .spacing(16);

    let header = column![
        text("Your Art Profile").size(40),
        text("Tell us about yourself to get personalized art recommendations").size(18),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    column![
        header,
        row![
            container(form_column)
                .padding(24)
                .width(Length::FillPortion(1))
                .style(container::rounded_box),
            column![summary_panel, stats]
                .spacing(16)
                .width(Length::FillPortion(1)),
        ]
        .spacing(24),
    ]
    .spacing(24)
    .into()
}

fn labeled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let input: Element<'a, Message> = input.into();
    column![text(label).size(14), input].spacing(6).into()
}

fn stat<'a>(label: &'a str, value: usize) -> Element<'a, Message> {
    container(
        column![text(label).size(16), text(value.to_string()).size(28)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
