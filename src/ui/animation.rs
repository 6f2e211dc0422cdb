//! Animation helpers built on iced_anim

mod fade;

pub use fade::FadeAnimation;
