//! Static portfolio content
//!
//! The data the page renders: profile blurb, project cards and skill
//! levels. Kept separate from the UI so sections stay purely presentational.

/// A project card shown in the horizontal carousel
#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub year: u16,
}

/// A skill with a proficiency level in percent (0-100)
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Fill fraction used as the bar animation target (0.0 - 1.0)
    pub fn fill_target(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

pub const NAME: &str = "Alex Reyes";
pub const TAGLINE: &str = "Systems developer & pixel-art enthusiast";
pub const ABOUT: &str = "I build fast, reliable software with a soft spot \
for retro aesthetics. Most of my days are spent somewhere between a \
profiler and a sprite editor. This page is a small playground for the \
interaction details I care about: custom cursors, scroll choreography \
and honest progress bars.";

pub const CONTACT_HEADING: &str = "Get in touch";
pub const CONTACT_BLURB: &str =
    "Have a project in mind, or just want to talk shop? Drop me a line.";

/// Projects displayed in the carousel, newest first
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Tessellate",
            summary: "A tiling window manager with scriptable layouts and \
sub-millisecond redraws.",
            tags: &["rust", "wayland", "lua"],
            year: 2026,
        },
        Project {
            title: "Chiptrack",
            summary: "A four-channel chiptune tracker with live pattern \
editing and hardware export.",
            tags: &["rust", "audio", "embedded"],
            year: 2025,
        },
        Project {
            title: "Inkwell",
            summary: "Collaborative whiteboard with CRDT sync that stays \
usable on a train connection.",
            tags: &["rust", "crdt", "websocket"],
            year: 2025,
        },
        Project {
            title: "Pixelfont",
            summary: "Bitmap font editor and atlas packer for game jams. \
Exports straight to BMFont and fnt.",
            tags: &["rust", "gamedev", "tooling"],
            year: 2024,
        },
        Project {
            title: "Corridor",
            summary: "A terminal-first HTTP client with request collections \
stored as plain files.",
            tags: &["rust", "cli", "http"],
            year: 2024,
        },
        Project {
            title: "Mossdeep",
            summary: "Static site generator tuned for photo-heavy journals; \
does its own image pipeline.",
            tags: &["rust", "ssg", "images"],
            year: 2023,
        },
    ]
}

/// Skills rendered as animated progress bars
pub fn skills() -> Vec<Skill> {
    vec![
        Skill { name: "Rust", level: 92 },
        Skill { name: "Systems design", level: 85 },
        Skill { name: "Graphics & shaders", level: 74 },
        Skill { name: "Audio programming", level: 68 },
        Skill { name: "Pixel art", level: 80 },
        Skill { name: "Technical writing", level: 77 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_target_is_level_fraction() {
        let skill = Skill { name: "Rust", level: 92 };
        assert!((skill.fill_target() - 0.92).abs() < f32::EPSILON);
    }

    #[test]
    fn fill_target_clamps_overshoot() {
        let skill = Skill { name: "Bragging", level: 130 };
        assert_eq!(skill.fill_target(), 1.0);
    }

    #[test]
    fn content_is_nonempty() {
        assert!(!projects().is_empty());
        assert!(!skills().is_empty());
    }
}
