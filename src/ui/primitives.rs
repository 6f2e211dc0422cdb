//! Low-level canvas primitives
//!
//! These implement `canvas::Program` with generic Message types and do
//! not depend on application-specific state.

pub mod pixel_cursor;
pub mod skill_bar;

pub use pixel_cursor::PixelCursor;
pub use skill_bar::SkillBar;
