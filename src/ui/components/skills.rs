//! Skills section: animated progress bars
//!
//! Bars fill toward each skill's declared level. Targets are applied by
//! a startup timer and re-applied by a per-item visibility watcher; both
//! paths set the same value, so the duplication is harmless.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content::Skill;
use crate::ui::animation::FadeAnimation;
use crate::ui::primitives::{SkillBar, skill_bar};
use crate::ui::theme;

pub const HEIGHT: f32 = 460.0;

/// Page-space offset from the section top to the first skill item
pub const LIST_TOP_OFFSET: f32 = 124.0;

/// Vertical footprint of one skill item (label + bar + spacing)
pub const ITEM_HEIGHT: f32 = 52.0;

const BAR_HEIGHT: f32 = 10.0;

/// Page-space top of a skill item, for the visibility watcher
pub fn item_top(section_top: f32, index: usize) -> f32 {
    section_top + LIST_TOP_OFFSET + index as f32 * ITEM_HEIGHT
}

/// Track color for the current theme mode
fn track_color(dark_mode: bool) -> iced::Color {
    let theme = if dark_mode {
        iced::Theme::Dark
    } else {
        iced::Theme::Light
    };
    theme::track(&theme)
}

/// Build the skills section
pub fn view<'a>(
    progress: f32,
    skills: &'a [Skill],
    fills: &'a [FadeAnimation],
    dark_mode: bool,
) -> Element<'a, Message> {
    let heading = text("Skills").size(30).style(move |t| text::Style {
        color: Some(theme::faded(theme::text_primary(t), progress)),
    });

    let track = track_color(dark_mode);
    let items = column(
        skills
            .iter()
            .enumerate()
            .map(|(i, skill)| item(skill, fills.get(i).map_or(0.0, FadeAnimation::value), track)),
    )
    .width(Fill);

    let inner = column![heading, Space::new().height(30), items]
        .max_width(720)
        .width(Fill);

    let content = container(inner)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .padding(Padding::new(48.0));

    super::reveal_shell(progress, HEIGHT, content.into())
}

/// One labelled skill bar
fn item<'a>(skill: &Skill, fill: f32, track: iced::Color) -> Element<'a, Message> {
    let label = row![
        text(skill.name).size(14).style(|t| text::Style {
            color: Some(theme::text_primary(t)),
        }),
        Space::new().width(Fill),
        text(format!("{}%", skill.level))
            .size(13)
            .style(|t| text::Style {
                color: Some(theme::text_muted(t)),
            }),
    ]
    .align_y(Alignment::Center);

    let bar = skill_bar::view(SkillBar::new(fill, track, theme::ACCENT), BAR_HEIGHT);

    column![label, Space::new().height(8), bar]
        .height(ITEM_HEIGHT)
        .width(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_tops_stack_downward() {
        let section_top = 1800.0;
        assert_eq!(item_top(section_top, 0), section_top + LIST_TOP_OFFSET);
        assert_eq!(
            item_top(section_top, 3),
            section_top + LIST_TOP_OFFSET + 3.0 * ITEM_HEIGHT
        );
    }

    #[test]
    fn track_color_follows_theme_mode() {
        assert_eq!(track_color(true), theme::track(&iced::Theme::Dark));
        assert_eq!(track_color(false), theme::track(&iced::Theme::Light));
        assert_ne!(track_color(true), track_color(false));
    }
}
