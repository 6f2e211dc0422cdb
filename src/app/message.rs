//! Application messages

use iced::{Point, Size};

/// Page sections, in top-to-bottom order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Navbar link label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Pointer (pixel cursor + carousel drag)
    MouseMoved(Point),
    MousePressed,
    MouseReleased,
    CursorEnteredWindow,
    CursorLeftWindow,

    // Page scroll and navigation
    PageScrolled(f32),
    NavLinkClicked(Section),
    WindowResized(Size),
    ThemeToggled,

    // Projects carousel
    CarouselScrolled(f32),
    CarouselNavigate(i32),
    CarouselDragStarted,
    CarouselDragEnded,

    // Contact form
    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactMessageChanged(String),
    ContactSubmitted,
    ContactFeedbackElapsed,

    // Skill bars
    SkillTimerElapsed,

    // Animation frames
    AnimationTick,
}
