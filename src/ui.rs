//! UI module for the portfolio application
//! Dark mode aesthetic with a lime accent
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level canvas Program implementations
//! - **Components** (`components`): Page sections with Message handling
//! - **Theme** (`theme`): Palette and style functions

pub mod animation;
pub mod components;
pub mod icons;
pub mod primitives;
pub mod theme;
