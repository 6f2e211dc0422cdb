// src/app/update/reveal.rs
//! Scroll-reveal message handlers
//!
//! Every scroll event rescans the viewport watchers. Reveal sections are
//! fire-once: their watcher entry is removed the moment they fire, so a
//! section that scrolls back out never animates in again. Skill items
//! stay observed and re-apply their (idempotent) fill targets on every
//! re-entry.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle page scroll messages
    pub fn handle_reveal(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PageScrolled(y) => {
                self.ui.page_scroll = *y;
                self.scan_viewport();
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Rescan both viewport watchers against the current scroll offset
    pub fn scan_viewport(&mut self) {
        let scroll_y = self.ui.page_scroll;
        let viewport_height = self.core.viewport_height();
        let instant = self.core.settings.display.reduce_motion;

        // Reveal sections: fire once, then unobserve
        let entered = self.ui.reveal.watcher.scan(scroll_y, viewport_height);
        for section in entered {
            tracing::debug!("Revealing {:?}", section);
            if let Some(fade) = self.ui.reveal.fades.get_mut(&section) {
                fade.set_target(1.0);
                if instant {
                    fade.settle();
                }
            }
            self.ui.reveal.watcher.unobserve(section);
        }

        // Skill items: stay observed, re-apply targets on every entry
        let entered = self.ui.skills.watcher.scan(scroll_y, viewport_height);
        for index in entered {
            self.ui.skills.apply_target(index, instant);
        }
    }
}
