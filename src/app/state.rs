// src/app/state.rs
//! Application state definitions

use std::collections::HashMap;
use std::time::Instant;

use iced::{Point, Size};

use crate::app::Section;
use crate::content::{self, Skill};
use crate::features::{Settings, ViewportWatcher};
use crate::ui::animation::FadeAnimation;
use crate::ui::components::{self, navbar, skills};

/// Reveal visibility threshold: 12% of a section must be visible
pub const REVEAL_THRESHOLD: f32 = 0.12;

/// Skill item visibility threshold: 50% of the item must be visible
pub const SKILL_THRESHOLD: f32 = 0.5;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, window geometry, pointer)
    pub core: CoreState,
    /// UI state (per-behavior sub-states and animations)
    pub ui: UiState,
}

impl App {
    /// Construct with explicit settings, bypassing the settings file
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            core: CoreState::new(settings),
            ui: UiState::new(),
        }
    }
}

/// Core infrastructure state
pub struct CoreState {
    pub settings: Settings,
    /// Current window size; the page viewport is this minus the navbar
    pub window_size: Size,
    /// Current pointer position in window coordinates
    pub mouse_position: Point,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window_size: Size::new(1280.0, 860.0),
            mouse_position: Point::ORIGIN,
        }
    }

    /// Height of the scrolled page viewport (window minus navbar)
    pub fn viewport_height(&self) -> f32 {
        (self.window_size.height - navbar::HEIGHT).max(0.0)
    }
}

/// UI view state
pub struct UiState {
    pub cursor: CursorState,
    /// Current page scroll offset (drives navbar shadow and watchers)
    pub page_scroll: f32,
    pub reveal: RevealState,
    pub carousel: CarouselState,
    pub contact: ContactState,
    pub skills: SkillsState,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            cursor: CursorState::default(),
            page_scroll: 0.0,
            reveal: RevealState::new(),
            carousel: CarouselState::new(),
            contact: ContactState::default(),
            skills: SkillsState::new(),
        }
    }

    /// Check if any animation is currently active (drives the frame
    /// subscription)
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.reveal.fades.values().any(FadeAnimation::is_animating)
            || self.skills.fills.iter().any(FadeAnimation::is_animating)
            || self.carousel.glide.is_some()
            || self.carousel.glide_animation.is_animating(now)
    }
}

/// Pixel cursor state
#[derive(Debug, Default)]
pub struct CursorState {
    /// Primary button held (switches the outline color)
    pub pressed: bool,
    /// Pointer inside the window
    pub in_window: bool,
}

/// Scroll-reveal state: one watcher entry and one fade per section
pub struct RevealState {
    /// Fire-once watcher: sections are unobserved when they fire
    pub watcher: ViewportWatcher<Section>,
    pub fades: HashMap<Section, FadeAnimation>,
}

impl RevealState {
    pub fn new() -> Self {
        let mut watcher = ViewportWatcher::new();
        let mut fades = HashMap::new();
        for section in Section::ALL {
            watcher.observe(
                section,
                components::section_top(section),
                components::section_height(section),
                REVEAL_THRESHOLD,
            );
            fades.insert(section, FadeAnimation::new());
        }
        Self { watcher, fades }
    }

    /// Reveal progress for a section (0.0 hidden, 1.0 fully revealed)
    pub fn progress(&self, section: Section) -> f32 {
        self.fades.get(&section).map_or(1.0, FadeAnimation::value)
    }
}

/// An in-flight pointer drag on the projects track
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Pointer x at drag start, window coordinates
    pub start_x: f32,
    /// Track scroll offset at drag start
    pub start_scroll: f32,
}

/// A button-driven glide of the projects track
#[derive(Debug, Clone, Copy)]
pub struct Glide {
    pub from: f32,
    pub to: f32,
}

/// Projects carousel state
pub struct CarouselState {
    /// Cards shown in the track
    pub projects: Vec<content::Project>,
    /// Last known track scroll offset
    pub offset: f32,
    /// Active drag gesture, if any
    pub drag: Option<DragState>,
    /// Active button glide, if any
    pub glide: Option<Glide>,
    pub glide_animation: iced::animation::Animation<bool>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self {
            projects: content::projects(),
            offset: 0.0,
            drag: None,
            glide: None,
            glide_animation: iced::animation::Animation::new(false),
        }
    }
}

/// Contact form state
#[derive(Debug, Default)]
pub struct ContactState {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Success feedback currently showing on the send button
    pub sent: bool,
}

impl ContactState {
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Skill bar state
pub struct SkillsState {
    pub skills: Vec<Skill>,
    /// One fill animation per skill, index-aligned with `skills`
    pub fills: Vec<FadeAnimation>,
    /// Per-item visibility watcher (stays observed; re-entry re-applies)
    pub watcher: ViewportWatcher<usize>,
}

impl SkillsState {
    pub fn new() -> Self {
        let skill_list = content::skills();
        let section_top = components::section_top(Section::Skills);

        let mut watcher = ViewportWatcher::new();
        let mut fills = Vec::with_capacity(skill_list.len());
        for (i, _) in skill_list.iter().enumerate() {
            watcher.observe(
                i,
                skills::item_top(section_top, i),
                skills::ITEM_HEIGHT,
                SKILL_THRESHOLD,
            );
            fills.push(FadeAnimation::with_duration(
                std::time::Duration::from_millis(900),
            ));
        }

        Self {
            skills: skill_list,
            fills,
            watcher,
        }
    }

    /// Set every bar's fill target from its skill level
    pub fn apply_all_targets(&mut self, instant: bool) {
        for (skill, fill) in self.skills.iter().zip(self.fills.iter_mut()) {
            fill.set_target(skill.fill_target());
            if instant {
                fill.settle();
            }
        }
    }

    /// Set one bar's fill target from its skill level
    pub fn apply_target(&mut self, index: usize, instant: bool) {
        if let (Some(skill), Some(fill)) = (self.skills.get(index), self.fills.get_mut(index)) {
            fill.set_target(skill.fill_target());
            if instant {
                fill.settle();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_watcher_covers_every_section() {
        let mut reveal = RevealState::new();
        // Scrolling through the whole page fires each section exactly once
        let mut fired = Vec::new();
        let page_height: f32 = Section::ALL
            .iter()
            .map(|s| components::section_height(*s))
            .sum();
        let mut y = 0.0;
        while y < page_height {
            fired.extend(reveal.watcher.scan(y, 800.0));
            y += 50.0;
        }
        for section in Section::ALL {
            assert_eq!(fired.iter().filter(|s| **s == section).count(), 1);
        }
    }

    #[test]
    fn skill_targets_apply_idempotently() {
        let mut skills_state = SkillsState::new();
        skills_state.apply_all_targets(true);
        let before: Vec<f32> = skills_state.fills.iter().map(|f| f.value()).collect();

        // The visibility watcher path re-applies the same targets
        skills_state.apply_target(0, true);
        skills_state.apply_target(1, true);
        let after: Vec<f32> = skills_state.fills.iter().map(|f| f.value()).collect();
        assert_eq!(before, after);

        for (skill, value) in skills_state.skills.iter().zip(before) {
            assert!((value - skill.fill_target()).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn missing_skill_index_is_tolerated() {
        let mut skills_state = SkillsState::new();
        let count = skills_state.skills.len();
        // A stale watcher key past the end must not panic
        skills_state.apply_target(count + 5, true);
    }

    #[test]
    fn contact_clear_empties_all_fields() {
        let mut contact = ContactState {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "hi".into(),
            sent: true,
        };
        contact.clear_fields();
        assert!(contact.name.is_empty());
        assert!(contact.email.is_empty());
        assert!(contact.message.is_empty());
    }

    #[test]
    fn viewport_height_excludes_navbar() {
        let core = CoreState::new(Settings::default());
        assert_eq!(
            core.viewport_height(),
            core.window_size.height - navbar::HEIGHT
        );
    }
}
