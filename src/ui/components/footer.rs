//! Footer strip below the contact section

use iced::widget::{container, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::content;
use crate::ui::theme;

pub const HEIGHT: f32 = 80.0;

/// Build the footer
pub fn view<'a>() -> Element<'a, Message> {
    container(
        text(format!("© 2026 {} — built with iced", content::NAME))
            .size(13)
            .style(|t| text::Style {
                color: Some(theme::text_muted(t)),
            }),
    )
    .width(Fill)
    .height(HEIGHT)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::footer)
    .into()
}
