//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod carousel;
mod contact;
mod cursor;
mod navigation;
mod reveal;
mod skills;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_cursor(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_reveal(&message) {
            return task;
        }
        if let Some(task) = self.handle_carousel(&message) {
            return task;
        }
        if let Some(task) = self.handle_contact(&message) {
            return task;
        }
        if let Some(task) = self.handle_skills(&message) {
            return task;
        }
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }

        Task::none()
    }
}
