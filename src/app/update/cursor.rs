// src/app/update/cursor.rs
//! Pixel cursor message handlers
//!
//! The cursor repaints from state on every view pass, so these handlers
//! only record the pointer position and button state. Pointer moves also
//! feed an in-flight carousel drag, since the drag consumes the same
//! global pointer stream.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle pointer messages
    pub fn handle_cursor(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::MouseMoved(position) => {
                self.core.mouse_position = *position;
                if self.ui.carousel.drag.is_some() {
                    return Some(self.carousel_drag_task());
                }
                Some(Task::none())
            }

            Message::MousePressed => {
                self.ui.cursor.pressed = true;
                Some(Task::none())
            }

            Message::MouseReleased => {
                self.ui.cursor.pressed = false;
                Some(Task::none())
            }

            Message::CursorEnteredWindow => {
                self.ui.cursor.in_window = true;
                Some(Task::none())
            }

            Message::CursorLeftWindow => {
                self.ui.cursor.in_window = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
