// src/app/update/animation.rs
//! Animation frame handler
//!
//! Ticks every active animation forward on each frame. While a carousel
//! glide is in flight, each tick also drives the track's scroll offset
//! along the eased interpolation, landing exactly on the target.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::app::update::carousel;

impl App {
    /// Handle animation frame messages
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = iced::time::Instant::now();

                for fade in self.ui.reveal.fades.values_mut() {
                    fade.tick(now);
                }
                for fill in self.ui.skills.fills.iter_mut() {
                    fill.tick(now);
                }

                // Advance the glide, if one is in flight
                if let Some(glide) = self.ui.carousel.glide {
                    let animation = &self.ui.carousel.glide_animation;
                    if animation.is_animating(now) {
                        let progress = animation.interpolate(0.0_f32, 1.0_f32, now);
                        let offset = glide.from + (glide.to - glide.from) * progress;
                        return Some(carousel::scroll_track_to(offset));
                    }
                    // Glide finished: land exactly on the target
                    self.ui.carousel.glide = None;
                    self.ui.carousel.offset = glide.to;
                    return Some(carousel::scroll_track_to(glide.to));
                }

                Some(Task::none())
            }

            _ => None,
        }
    }
}
