// src/app/update/contact.rs
//! Contact form message handlers
//!
//! Submission is intercepted entirely in-app; no request is made. The
//! revert timer has no cancellation path, so a re-submit schedules a
//! second timer and the earliest one wins the revert. The elapsed
//! handler tolerates finding the form already reverted.

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle contact form messages
    pub fn handle_contact(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ContactNameChanged(value) => {
                self.ui.contact.name = value.clone();
                Some(Task::none())
            }

            Message::ContactEmailChanged(value) => {
                self.ui.contact.email = value.clone();
                Some(Task::none())
            }

            Message::ContactMessageChanged(value) => {
                self.ui.contact.message = value.clone();
                Some(Task::none())
            }

            Message::ContactSubmitted => {
                tracing::info!("Contact form submitted (mock, nothing sent)");
                self.ui.contact.sent = true;
                Some(Task::perform(
                    helpers::sleep(helpers::CONTACT_FEEDBACK_DELAY),
                    |_| Message::ContactFeedbackElapsed,
                ))
            }

            Message::ContactFeedbackElapsed => {
                if self.ui.contact.sent {
                    self.ui.contact.sent = false;
                    self.ui.contact.clear_fields();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn submit_then_elapse_reverts_and_clears() {
        let mut app = app();
        let _ = app.update(Message::ContactNameChanged("Grace".into()));
        let _ = app.update(Message::ContactEmailChanged("grace@example.com".into()));
        let _ = app.update(Message::ContactMessageChanged("hello".into()));

        // Submit: feedback shows immediately, fields untouched
        let _ = app.update(Message::ContactSubmitted);
        assert!(app.ui.contact.sent);
        assert_eq!(app.ui.contact.name, "Grace");

        // Timer elapses: feedback reverts, every field cleared
        let _ = app.update(Message::ContactFeedbackElapsed);
        assert!(!app.ui.contact.sent);
        assert!(app.ui.contact.name.is_empty());
        assert!(app.ui.contact.email.is_empty());
        assert!(app.ui.contact.message.is_empty());
    }

    #[test]
    fn stale_timer_is_harmless() {
        let mut app = app();
        let _ = app.update(Message::ContactNameChanged("Grace".into()));

        // A timer from an earlier, already-reverted submit leaves the
        // current draft untouched
        let _ = app.update(Message::ContactFeedbackElapsed);
        assert!(!app.ui.contact.sent);
        assert_eq!(app.ui.contact.name, "Grace");
    }
}
