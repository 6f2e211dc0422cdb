//! Async helpers for deferred actions
//!
//! One-shot delays scheduled through `Task::perform`. There is no
//! cancellation path: a late callback must tolerate whatever state it
//! finds when it fires.

use std::time::Duration;

/// Delay before skill bars receive their fill targets after startup
pub const SKILL_START_DELAY: Duration = Duration::from_millis(500);

/// How long the contact form shows its success feedback
pub const CONTACT_FEEDBACK_DELAY: Duration = Duration::from_millis(2500);

/// Sleep for the given duration
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
