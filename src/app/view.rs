// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container, scrollable, stack};
use iced::{Element, Fill};

use super::App;
use super::message::{Message, Section};
use crate::ui::{components, primitives, theme};

/// Scrollable id for the main page, used by nav links to scroll to
/// sections
pub fn page_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("page_scroll")
}

impl App {
    /// Build the window contents: navbar over the scrolled page, with
    /// the pixel cursor stacked on top of everything
    pub fn view(&self) -> Element<'_, Message> {
        let reveal = &self.ui.reveal;

        let sections = column![
            components::hero::view(reveal.progress(Section::Hero)),
            components::about::view(reveal.progress(Section::About)),
            components::projects::view(
                reveal.progress(Section::Projects),
                &self.ui.carousel.projects,
                self.ui.carousel.drag.is_some(),
            ),
            components::skills::view(
                reveal.progress(Section::Skills),
                &self.ui.skills.skills,
                &self.ui.skills.fills,
                self.core.settings.display.dark_mode,
            ),
            components::contact::view(
                reveal.progress(Section::Contact),
                &self.ui.contact.name,
                &self.ui.contact.email,
                &self.ui.contact.message,
                self.ui.contact.sent,
            ),
            components::footer::view(),
        ]
        .width(Fill);

        let page = scrollable(sections)
            .width(Fill)
            .height(Fill)
            .id(page_scroll_id())
            .on_scroll(|viewport| {
                let offset = viewport.absolute_offset();
                Message::PageScrolled(offset.y)
            });

        let navbar = components::navbar::view(
            self.ui.page_scroll,
            self.core.settings.display.dark_mode,
        );

        let content = column![navbar, page].width(Fill).height(Fill);

        // Pixel cursor overlay; it never handles events, so everything
        // underneath stays interactive
        let cursor_overlay = primitives::pixel_cursor::view(
            self.core.mouse_position,
            self.ui.cursor.pressed,
            self.ui.cursor.in_window,
        );

        container(stack![content, cursor_overlay])
            .width(Fill)
            .height(Fill)
            .style(theme::page)
            .into()
    }
}
