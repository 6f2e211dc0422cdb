//! Fixed top navbar with section links and theme toggle
//!
//! Gains a drop shadow once the page scrolls past a small threshold, to
//! visually separate it from the content. The shadow is recomputed from
//! the scroll offset on every scroll event; there is no stored state.

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::ui::{icons, theme};

/// Navbar height in px; the page scrollable sits directly below
pub const HEIGHT: f32 = 64.0;

/// Scroll offset (px) past which the navbar casts its shadow
pub const SHADOW_THRESHOLD: f32 = 10.0;

/// Whether the navbar should cast a shadow at the given scroll offset
pub fn is_elevated(scroll_y: f32) -> bool {
    scroll_y > SHADOW_THRESHOLD
}

/// Build the navbar
pub fn view<'a>(scroll_y: f32, dark_mode: bool) -> Element<'a, Message> {
    let brand = row![
        text("alex").size(20).color(theme::ACCENT),
        text(".dev").size(20).style(|t| text::Style {
            color: Some(theme::text_primary(t)),
        }),
    ];

    let links = row(Section::ALL.iter().map(|section| {
        button(text(section.label()).size(14))
            .padding(Padding::new(8.0).left(14).right(14))
            .style(theme::nav_link)
            .on_press(Message::NavLinkClicked(*section))
            .into()
    }))
    .spacing(4)
    .align_y(Alignment::Center);

    let toggle_icon = if dark_mode { icons::SUN } else { icons::MOON };
    let theme_toggle = button(
        svg(svg::Handle::from_memory(toggle_icon.as_bytes()))
            .width(18)
            .height(18)
            .style(|t, _status| svg::Style {
                color: Some(theme::text_secondary(t)),
            }),
    )
    .padding(10)
    .style(theme::nav_link)
    .on_press(Message::ThemeToggled);

    let bar = row![
        brand,
        Space::new().width(Fill),
        links,
        Space::new().width(16),
        theme_toggle,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(0.0).left(40).right(40));

    let elevated = is_elevated(scroll_y);
    container(bar)
        .width(Fill)
        .height(HEIGHT)
        .align_y(Alignment::Center)
        .style(move |t| theme::navbar(t, elevated))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_only_past_threshold() {
        assert!(!is_elevated(0.0));
        assert!(!is_elevated(10.0));
        assert!(is_elevated(10.1));
        assert!(is_elevated(500.0));
    }
}
