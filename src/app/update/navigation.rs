// src/app/update/navigation.rs
//! Navbar and window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::app::view;
use crate::ui::components;

impl App {
    /// Handle navigation and window messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::NavLinkClicked(section) => {
                let target_y = components::section_top(*section);
                tracing::info!("Scrolling to {:?} at y={}", section, target_y);
                Some(iced::widget::operation::scroll_to(
                    view::page_scroll_id(),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(target_y),
                    },
                ))
            }

            Message::WindowResized(size) => {
                self.core.window_size = *size;
                // Viewport height changed; rescan both watchers
                self.scan_viewport();
                Some(Task::none())
            }

            Message::ThemeToggled => {
                self.core.settings.display.dark_mode = !self.core.settings.display.dark_mode;
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
