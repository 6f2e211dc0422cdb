// src/app/update/carousel.rs
//! Projects carousel message handlers
//!
//! Two independent ways to move the track: arrow buttons glide it by a
//! fixed step, and a pointer drag maps displacement to scroll offset
//! with a gain factor for a natural feel. A drag cancels any in-flight
//! glide. There is no momentum after release.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, DragState, Glide};
use crate::ui::components::projects;

/// Offset moved by one arrow button press, in px
pub const SCROLL_STEP: f32 = 680.0;

/// Drag displacement multiplier
pub const DRAG_GAIN: f32 = 1.5;

/// Track offset for a drag that started at scroll `start_scroll` and
/// pointer `start_x`, with the pointer now at `x`
pub fn drag_target(start_scroll: f32, start_x: f32, x: f32) -> f32 {
    start_scroll - (x - start_x) * DRAG_GAIN
}

impl App {
    /// Handle carousel messages
    pub fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CarouselScrolled(x) => {
                self.ui.carousel.offset = *x;
                Some(Task::none())
            }

            Message::CarouselNavigate(delta) => {
                let from = self.ui.carousel.offset;
                let to = (from + *delta as f32 * SCROLL_STEP).max(0.0);

                if self.core.settings.display.reduce_motion {
                    // No glide frames; jump straight to the target
                    self.ui.carousel.offset = to;
                    return Some(scroll_track_to(to));
                }

                let now = iced::time::Instant::now();
                self.ui.carousel.glide = Some(Glide { from, to });
                self.ui.carousel.glide_animation = iced::animation::Animation::new(false).slow();
                self.ui.carousel.glide_animation.go_mut(true, now);
                Some(Task::none())
            }

            Message::CarouselDragStarted => {
                self.ui.carousel.glide = None;
                self.ui.carousel.drag = Some(DragState {
                    start_x: self.core.mouse_position.x,
                    start_scroll: self.ui.carousel.offset,
                });
                Some(Task::none())
            }

            Message::CarouselDragEnded => {
                self.ui.carousel.drag = None;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Scroll task for the current pointer position during a drag
    ///
    /// Called from the pointer-move handler while a drag is active. The
    /// scrollable clamps the offset to its natural bounds.
    pub fn carousel_drag_task(&mut self) -> Task<Message> {
        let Some(drag) = self.ui.carousel.drag else {
            return Task::none();
        };
        let target = drag_target(drag.start_scroll, drag.start_x, self.core.mouse_position.x);
        scroll_track_to(target.max(0.0))
    }
}

/// Scroll the projects track to an absolute horizontal offset
pub fn scroll_track_to(x: f32) -> Task<Message> {
    iced::widget::operation::scroll_to(
        projects::track_id(),
        iced::widget::scrollable::AbsoluteOffset {
            x: Some(x),
            y: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn drag_target_applies_gain() {
        // Starting at scroll 400, dragging the pointer right by 100
        // pulls the track left by 150
        assert_eq!(drag_target(400.0, 200.0, 300.0), 250.0);
        // Dragging left moves the track right
        assert_eq!(drag_target(400.0, 200.0, 100.0), 550.0);
    }

    #[test]
    fn drag_target_identity_without_motion() {
        assert_eq!(drag_target(123.0, 50.0, 50.0), 123.0);
    }

    #[test]
    fn navigate_glides_and_lands_one_step_away() {
        let mut app = app();
        let _ = app.update(Message::CarouselNavigate(1));

        let glide = app.ui.carousel.glide.expect("glide in flight");
        assert_eq!(glide.from, 0.0);
        assert_eq!(glide.to, SCROLL_STEP);

        // Simulate the eased animation having run to completion; the
        // next frame lands exactly on the target and clears the glide
        app.ui.carousel.glide_animation = iced::animation::Animation::new(false);
        let _ = app.update(Message::AnimationTick);
        assert_eq!(app.ui.carousel.offset, SCROLL_STEP);
        assert!(app.ui.carousel.glide.is_none());
    }

    #[test]
    fn navigate_back_clamps_at_zero() {
        let mut app = app();
        app.ui.carousel.offset = 100.0;
        let _ = app.update(Message::CarouselNavigate(-1));

        let glide = app.ui.carousel.glide.expect("glide in flight");
        assert_eq!(glide.from, 100.0);
        assert_eq!(glide.to, 0.0);

        app.ui.carousel.glide_animation = iced::animation::Animation::new(false);
        let _ = app.update(Message::AnimationTick);
        assert_eq!(app.ui.carousel.offset, 0.0);
    }

    #[test]
    fn reduced_motion_navigate_jumps_instantly() {
        let mut app = app();
        app.core.settings.display.reduce_motion = true;
        let _ = app.update(Message::CarouselNavigate(1));
        assert_eq!(app.ui.carousel.offset, SCROLL_STEP);
        assert!(app.ui.carousel.glide.is_none());
    }

    #[test]
    fn drag_cancels_in_flight_glide() {
        let mut app = app();
        let _ = app.update(Message::CarouselNavigate(1));
        assert!(app.ui.carousel.glide.is_some());

        let _ = app.update(Message::CarouselDragStarted);
        assert!(app.ui.carousel.glide.is_none());
        assert!(app.ui.carousel.drag.is_some());

        let _ = app.update(Message::CarouselDragEnded);
        assert!(app.ui.carousel.drag.is_none());
    }
}
