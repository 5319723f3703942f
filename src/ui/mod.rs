/// Views for the three pages plus the shared header.
/// Each view borrows from the application state and emits `crate::Message`.
use iced::widget::button;
use iced::Theme;

pub mod catalog;
pub mod create;
pub mod header;
pub mod profile;

/// Button style for toggles: primary when selected, secondary otherwise
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            button::primary(theme, status)
        } else {
            button::secondary(theme, status)
        }
    }
}

/// Whole dollars without decimals, anything else with cents
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}
