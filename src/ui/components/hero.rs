//! Hero section: name, tagline and a call-to-action

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::content;
use crate::ui::theme;

pub const HEIGHT: f32 = 560.0;

/// Build the hero section
pub fn view<'a>(progress: f32) -> Element<'a, Message> {
    let heading = text(content::NAME).size(52).style(move |t| text::Style {
        color: Some(theme::faded(theme::text_primary(t), progress)),
    });

    let tagline = text(content::TAGLINE).size(18).style(move |t| text::Style {
        color: Some(theme::faded(theme::text_secondary(t), progress)),
    });

    let cta = button(text("View Projects").size(15))
        .padding(Padding::new(12.0).left(28).right(28))
        .style(theme::primary_button)
        .on_press(Message::NavLinkClicked(Section::Projects));

    let inner = column![
        Space::new().height(Fill),
        heading,
        Space::new().height(12),
        tagline,
        Space::new().height(32),
        cta,
        Space::new().height(Fill),
    ]
    .align_x(Alignment::Center)
    .width(Fill);

    let content = container(inner).width(Fill).height(Fill);

    super::reveal_shell(progress, HEIGHT, content.into())
}
