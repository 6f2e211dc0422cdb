// src/app/update/skills.rs
//! Skill bar message handlers
//!
//! The startup timer applies every bar's fill target after a fixed
//! delay. The visibility watcher (handled in `reveal::scan_viewport`)
//! re-applies the same targets for items scrolled into view later; the
//! overlap is idempotent and deliberate.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle skill bar messages
    pub fn handle_skills(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SkillTimerElapsed => {
                tracing::debug!("Applying skill bar targets after startup delay");
                let instant = self.core.settings.display.reduce_motion;
                self.ui.skills.apply_all_targets(instant);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
