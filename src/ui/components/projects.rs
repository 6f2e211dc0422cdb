//! Projects section: a draggable horizontal card carousel
//!
//! The track is a horizontal scrollable. Arrow buttons glide it by a
//! fixed step; pressing inside the track starts a pointer drag handled
//! through the global mouse position (see `app::update::carousel`).

use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content::Project;
use crate::ui::{icons, theme};

pub const HEIGHT: f32 = 520.0;

/// Card footprint inside the track
const CARD_WIDTH: f32 = 400.0;
const CARD_HEIGHT: f32 = 280.0;
const CARD_SPACING: f32 = 24.0;

/// Scrollable id used to drive the track offset from update handlers
pub fn track_id() -> iced::widget::Id {
    iced::widget::Id::new("projects_track")
}

/// Build the projects section
pub fn view<'a>(progress: f32, projects: &'a [Project], dragging: bool) -> Element<'a, Message> {
    let heading = text("Projects").size(30).style(move |t| text::Style {
        color: Some(theme::faded(theme::text_primary(t), progress)),
    });

    let cards = row(projects.iter().map(card))
        .spacing(CARD_SPACING)
        .padding(Padding::new(4.0).left(48).right(48));

    let track = scrollable(cards)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Fill)
        .id(track_id())
        .on_scroll(|viewport| {
            let offset = viewport.absolute_offset();
            Message::CarouselScrolled(offset.x)
        });

    let draggable_track = mouse_area(track)
        .on_press(Message::CarouselDragStarted)
        .on_release(Message::CarouselDragEnded)
        .on_exit(Message::CarouselDragEnded)
        .interaction(if dragging {
            iced::mouse::Interaction::Grabbing
        } else {
            iced::mouse::Interaction::Grab
        });

    // Arrow overlay on top of the track edges
    let left_arrow = nav_button(icons::CHEVRON_LEFT, -1);
    let right_arrow = nav_button(icons::CHEVRON_RIGHT, 1);
    let nav_overlay = row![
        container(left_arrow)
            .height(CARD_HEIGHT + 8.0)
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0)),
        Space::new().width(Fill),
        container(right_arrow)
            .height(CARD_HEIGHT + 8.0)
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0)),
    ]
    .width(Fill);

    let carousel = stack![draggable_track, nav_overlay].width(Fill);

    let inner = column![
        container(heading).padding(Padding::new(0.0).left(48)),
        Space::new().height(28),
        carousel,
    ]
    .width(Fill);

    let content = container(inner)
        .width(Fill)
        .height(Fill)
        .align_y(Alignment::Center);

    super::reveal_shell(progress, HEIGHT, content.into())
}

/// A single project card
fn card<'a>(project: &'a Project) -> Element<'a, Message> {
    let title = row![
        text(project.title).size(20).style(|t| text::Style {
            color: Some(theme::text_primary(t)),
        }),
        Space::new().width(Fill),
        text(project.year.to_string()).size(13).style(|t| text::Style {
            color: Some(theme::text_muted(t)),
        }),
    ]
    .align_y(Alignment::Center);

    let summary = text(project.summary).size(14).style(|t| text::Style {
        color: Some(theme::text_secondary(t)),
    });

    let tags = row(project.tags.iter().map(|tag| {
        container(text(*tag).size(12))
            .padding(Padding::new(4.0).left(10).right(10))
            .style(theme::tag_chip)
            .into()
    }))
    .spacing(8);

    container(
        column![title, summary, Space::new().height(Fill), tags]
            .spacing(12)
            .width(Fill)
            .height(Fill),
    )
    .width(CARD_WIDTH)
    .height(CARD_HEIGHT)
    .padding(Padding::new(24.0))
    .style(theme::project_card)
    .into()
}

/// Semi-transparent arrow button scrolling the track by one step
fn nav_button<'a>(icon: &'static str, delta: i32) -> Element<'a, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(24)
            .height(24)
            .style(|_theme, _status| svg::Style {
                color: Some(iced::Color::WHITE),
            }),
    )
    .padding(12)
    .style(theme::carousel_nav_button)
    .on_press(Message::CarouselNavigate(delta))
    .into()
}
