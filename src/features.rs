//! Application features independent of the widget tree

pub mod settings;
pub mod viewport;

pub use settings::Settings;
pub use viewport::ViewportWatcher;
