//! Contact section: mock form with transient submit feedback
//!
//! Submission is UI-only; nothing leaves the machine. The send button
//! flips to a success state immediately and a 2.5 s timer reverts it and
//! clears every field.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content;
use crate::ui::theme;

pub const HEIGHT: f32 = 620.0;

/// Send button label while idle
pub const SEND_LABEL: &str = "Send Message →";

/// Send button label while the success feedback is showing
pub const SENT_LABEL: &str = "Message Sent ✓";

/// Build the contact section
pub fn view<'a>(
    progress: f32,
    name: &str,
    email: &str,
    message: &str,
    sent: bool,
) -> Element<'a, Message> {
    let heading = text(content::CONTACT_HEADING)
        .size(30)
        .style(move |t| text::Style {
            color: Some(theme::faded(theme::text_primary(t), progress)),
        });

    let blurb = text(content::CONTACT_BLURB)
        .size(15)
        .style(move |t| text::Style {
            color: Some(theme::faded(theme::text_secondary(t), progress)),
        });

    let name_input = text_input("Your name", name)
        .on_input(Message::ContactNameChanged)
        .padding(12)
        .size(15)
        .style(theme::contact_input);

    let email_input = text_input("Email address", email)
        .on_input(Message::ContactEmailChanged)
        .padding(12)
        .size(15)
        .style(theme::contact_input);

    let message_input = text_input("What's on your mind?", message)
        .on_input(Message::ContactMessageChanged)
        .padding(12)
        .size(15)
        .style(theme::contact_input);

    let send_button = button(text(if sent { SENT_LABEL } else { SEND_LABEL }).size(15))
        .padding(Padding::new(12.0).left(28).right(28))
        .style(if sent {
            theme::success_button
        } else {
            theme::primary_button
        })
        .on_press(Message::ContactSubmitted);

    let form = column![
        name_input,
        email_input,
        message_input,
        Space::new().height(8),
        container(send_button).align_x(Alignment::End).width(Fill),
    ]
    .spacing(16)
    .max_width(560)
    .width(Fill);

    let inner = column![heading, blurb, Space::new().height(24), form]
        .spacing(12)
        .max_width(560)
        .align_x(Alignment::Start);

    let content = container(inner)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding(Padding::new(48.0));

    super::reveal_shell(progress, HEIGHT, content.into())
}
