//! Theme system for the portfolio application
//! Supports dark and light modes with a lime accent palette

use iced::color;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    !matches!(theme, Theme::Light)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0d0d10);
    pub const NAVBAR: Color = color!(0x121216);
    pub const SURFACE: Color = color!(0x1a1a1f);
    pub const BORDER: Color = color!(0x282830);
    pub const TRACK: Color = color!(0x26262e);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xf2f2f2);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafaf7);
    pub const NAVBAR: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xefefec);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TRACK: Color = color!(0xe2e2de);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Lime accent color (same for both modes); also the cursor outline color
pub const ACCENT: Color = color!(0xc8f03c);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0xd8ff5c);

/// Cursor outline color while the primary button is pressed
pub const CURSOR_PRESSED: Color = color!(0x555555);

/// Cursor fill cells: semi-transparent white
pub const CURSOR_FILL: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);

/// Success green used by the contact form feedback
pub const SUCCESS: Color = color!(0x2ecc71);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get navbar color based on theme
pub fn navbar_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::NAVBAR
    } else {
        light::NAVBAR
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Skill bar track color based on theme
pub fn track(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TRACK
    } else {
        light::TRACK
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Apply a reveal fade to a color (alpha scaled by progress)
pub fn faded(color: Color, progress: f32) -> Color {
    Color {
        a: color.a * progress.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main page background
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Navbar container; gains a drop shadow once the page is scrolled
pub fn navbar(theme: &Theme, elevated: bool) -> container::Style {
    let shadow = if elevated {
        Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 30.0,
        }
    } else {
        Shadow::default()
    };
    container::Style {
        background: Some(Background::Color(navbar_bg(theme))),
        text_color: Some(text_primary(theme)),
        shadow,
        ..Default::default()
    }
}

/// Project card container
pub fn project_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Tag chip on a project card
pub fn tag_chip(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(track(theme))),
        text_color: Some(text_secondary(theme)),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer strip
pub fn footer(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(navbar_bg(theme))),
        text_color: Some(text_muted(theme)),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style (accent background, dark text)
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::BLACK,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Send button while the success feedback is showing
pub fn success_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(SUCCESS)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Navbar section link
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Carousel navigation button (semi-transparent)
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Contact form text input
pub fn contact_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: faded(ACCENT, 0.4),
    };

    match status {
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: ACCENT,
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_shadow_follows_elevation() {
        let theme = Theme::Dark;
        let flat = navbar(&theme, false);
        let elevated = navbar(&theme, true);
        assert_eq!(flat.shadow.blur_radius, 0.0);
        assert!(elevated.shadow.blur_radius > 0.0);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 1.0);
        let half = faded(color, 0.5);
        assert_eq!(half.r, color.r);
        assert_eq!(half.a, 0.5);
        // Out-of-range progress clamps
        assert_eq!(faded(color, 2.0).a, 1.0);
        assert_eq!(faded(color, -1.0).a, 0.0);
    }
}
