//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::{Message, Section};
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the theme is right from the first frame
        let settings = Settings::load();
        tracing::info!(
            "Starting with dark_mode={} reduce_motion={}",
            settings.display.dark_mode,
            settings.display.reduce_motion
        );

        // 2. Initialize sub-states
        let mut app = Self::with_settings(settings);

        // 3. Initial viewport scan so above-the-fold sections reveal on load
        app.scan_viewport();

        // 4. Deferred actions: skill bars fill after a fixed startup delay
        let init_task = Task::perform(helpers::sleep(helpers::SKILL_START_DELAY), |_| {
            Message::SkillTimerElapsed
        });

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        format!("{} — Portfolio", crate::content::NAME)
    }

    /// Subscriptions for pointer events, window resize and animation frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::mouse;

        let now = iced::time::Instant::now();

        // 1. Global pointer stream (pixel cursor + carousel drag)
        let mouse_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::MouseMoved(position))
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Message::MousePressed)
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::MouseReleased)
            }
            iced::Event::Mouse(mouse::Event::CursorEntered) => Some(Message::CursorEnteredWindow),
            iced::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeftWindow),
            _ => None,
        });

        // 2. Window resize (viewport geometry for the watchers)
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 3. Animation frames (~60fps while something animates)
        let needs_frames = subscription_logic::needs_frame_subscription(
            self.ui.has_active_animations(now),
            self.core.settings.display.reduce_motion,
        );
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([mouse_sub, resize_sub, animation_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames run only while something animates, and never under
    /// reduced motion (targets are applied instantly instead)
    pub fn needs_frame_subscription(has_animations: bool, reduce_motion: bool) -> bool {
        has_animations && !reduce_motion
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_follow_animation_state() {
        assert!(needs_frame_subscription(true, false));
        assert!(!needs_frame_subscription(false, false));
    }

    #[test]
    fn reduce_motion_suppresses_frames() {
        assert!(!needs_frame_subscription(true, true));
        assert!(!needs_frame_subscription(false, true));
    }
}
