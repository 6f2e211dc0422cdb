//! Horizontal skill bar primitive
//!
//! A rounded progress bar using iced's Canvas, in the same shape as the
//! circular progress ring but laid out horizontally.
//!
//! # Design
//!
//! This is a primitive component that implements the `canvas::Program`
//! trait. It uses generic Message types and does not depend on
//! application-specific types.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, mouse};

/// Skill bar configuration
#[derive(Debug, Clone, Copy)]
pub struct SkillBar {
    /// Fill value (0.0 - 1.0)
    pub progress: f32,
    /// Track (background) color
    pub track_color: Color,
    /// Fill color
    pub fill_color: Color,
}

impl SkillBar {
    pub fn new(progress: f32, track_color: Color, fill_color: Color) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            track_color,
            fill_color,
        }
    }
}

impl<Message> Program<Message> for SkillBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let radius = bounds.height / 2.0;

        // Track
        let track = Path::rounded_rectangle(
            Point::ORIGIN,
            Size::new(bounds.width, bounds.height),
            radius.into(),
        );
        frame.fill(&track, self.track_color);

        // Fill
        let fill_width = bounds.width * self.progress;
        if fill_width > 0.0 {
            let fill = Path::rounded_rectangle(
                Point::ORIGIN,
                Size::new(fill_width.max(bounds.height), bounds.height),
                radius.into(),
            );
            frame.fill(&fill, self.fill_color);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a skill bar element with a fixed height
pub fn view<'a, Message: 'a>(bar: SkillBar, height: f32) -> Element<'a, Message> {
    Canvas::new(bar).width(Fill).height(height).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let bar = SkillBar::new(1.4, Color::BLACK, Color::WHITE);
        assert_eq!(bar.progress, 1.0);
        let bar = SkillBar::new(-0.2, Color::BLACK, Color::WHITE);
        assert_eq!(bar.progress, 0.0);
    }
}
