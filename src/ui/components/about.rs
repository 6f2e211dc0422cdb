//! About section: a short bio paragraph

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content;
use crate::ui::theme;

pub const HEIGHT: f32 = 360.0;

/// Build the about section
pub fn view<'a>(progress: f32) -> Element<'a, Message> {
    let heading = text("About").size(30).style(move |t| text::Style {
        color: Some(theme::faded(theme::text_primary(t), progress)),
    });

    let body = text(content::ABOUT)
        .size(16)
        .style(move |t| text::Style {
            color: Some(theme::faded(theme::text_secondary(t), progress)),
        });

    let inner = column![heading, body]
        .spacing(24)
        .max_width(720)
        .align_x(Alignment::Start);

    let content = container(inner)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding(Padding::new(48.0));

    super::reveal_shell(progress, HEIGHT, content.into())
}
