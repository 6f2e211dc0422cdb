//! Pixel-art cursor primitive
//!
//! Replaces the default mouse cursor with a classic 16x16 pixel arrow,
//! painted on a window-sized canvas overlay that tracks the pointer.
//!
//! # Design
//!
//! This is a primitive component that implements the `canvas::Program`
//! trait. It uses generic Message types and does not depend on
//! application-specific types. The overlay never handles events, so
//! everything underneath stays interactive.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::theme;

/// Each logical bitmap cell is a 2x2 square of real pixels
pub const SCALE: f32 = 2.0;

/// Classic pixel arrow cursor (16 rows x 16 cols)
/// 0 = transparent, 1 = outline, 2 = fill
pub const CURSOR_MAP: [[u8; 16]; 16] = [
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 1, 0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
];

/// Paint color for a bitmap cell, or `None` for transparent cells
///
/// Outline cells switch between the accent color and a darker shade
/// while the primary button is pressed; fill cells are always
/// semi-transparent white.
pub fn cell_color(value: u8, pressed: bool) -> Option<Color> {
    match value {
        0 => None,
        1 => Some(if pressed {
            theme::CURSOR_PRESSED
        } else {
            theme::ACCENT
        }),
        _ => Some(theme::CURSOR_FILL),
    }
}

/// Pixel cursor canvas program
#[derive(Debug, Clone, Copy)]
pub struct PixelCursor {
    /// Pointer position in window coordinates
    pub position: Point,
    /// Whether the primary button is held
    pub pressed: bool,
    /// Whether the pointer is currently inside the window
    pub visible: bool,
}

impl<Message> Program<Message> for PixelCursor {
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

        if self.visible {
            for (row, cells) in CURSOR_MAP.iter().enumerate() {
                for (col, value) in cells.iter().enumerate() {
                    let Some(color) = cell_color(*value, self.pressed) else {
                        continue;
                    };
                    frame.fill_rectangle(
                        Point::new(
                            self.position.x + col as f32 * SCALE,
                            self.position.y + row as f32 * SCALE,
                        ),
                        Size::new(SCALE, SCALE),
                        color,
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Build the cursor overlay element covering the whole window
pub fn view<'a, Message: 'a>(position: Point, pressed: bool, visible: bool) -> Element<'a, Message> {
    Canvas::new(PixelCursor {
        position,
        pressed,
        visible,
    })
    .width(Fill)
    .height(Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_cells_paint_nothing() {
        for row in CURSOR_MAP {
            for value in row {
                if value == 0 {
                    assert_eq!(cell_color(value, false), None);
                    assert_eq!(cell_color(value, true), None);
                }
            }
        }
    }

    #[test]
    fn outline_color_follows_pressed_flag() {
        assert_eq!(cell_color(1, false), Some(theme::ACCENT));
        assert_eq!(cell_color(1, true), Some(theme::CURSOR_PRESSED));
    }

    #[test]
    fn fill_cells_ignore_pressed_flag() {
        assert_eq!(cell_color(2, false), Some(theme::CURSOR_FILL));
        assert_eq!(cell_color(2, true), Some(theme::CURSOR_FILL));
    }

    #[test]
    fn bitmap_has_expected_shape() {
        // The arrow hotspot sits at the top-left corner of the grid
        assert_eq!(CURSOR_MAP[0][0], 1);
        // Every cell is one of the three known values
        for row in CURSOR_MAP {
            for value in row {
                assert!(value <= 2);
            }
        }
    }
}
