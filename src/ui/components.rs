//! Page section components
//!
//! Each section renders with a reveal `progress` in [0, 1] that drives
//! its fade/rise-in transition. Sections have fixed heights so page
//! geometry is known without measuring the widget tree; the viewport
//! watcher works in this page space.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;

use iced::Element;
use iced::widget::{Space, column};

use crate::app::{Message, Section};

/// Vertical rise distance of a revealing section, in px
pub const REVEAL_RISE: f32 = 28.0;

/// Fixed height of a page section
pub const fn section_height(section: Section) -> f32 {
    match section {
        Section::Hero => hero::HEIGHT,
        Section::About => about::HEIGHT,
        Section::Projects => projects::HEIGHT,
        Section::Skills => skills::HEIGHT,
        Section::Contact => contact::HEIGHT,
    }
}

/// Page-space y offset of a section's top edge
pub fn section_top(section: Section) -> f32 {
    Section::ALL
        .iter()
        .take_while(|s| **s != section)
        .map(|s| section_height(*s))
        .sum()
}

/// Wrap section content in its reveal transition: content rises as it
/// fades in, inside a fixed-height slot so page geometry never shifts
pub fn reveal_shell(progress: f32, height: f32, content: Element<'_, Message>) -> Element<'_, Message> {
    let rise = REVEAL_RISE * (1.0 - progress.clamp(0.0, 1.0));
    column![Space::new().height(rise), content]
        .height(height)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_tops_are_cumulative() {
        assert_eq!(section_top(Section::Hero), 0.0);
        assert_eq!(section_top(Section::About), hero::HEIGHT);
        assert_eq!(
            section_top(Section::Contact),
            hero::HEIGHT + about::HEIGHT + projects::HEIGHT + skills::HEIGHT
        );
    }
}
