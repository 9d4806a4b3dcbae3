//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout (navbar, section stage, indicator, footer, log overlay)
//! - Theme management
//! - The slide animation presenting the navigation engine's output

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod stage;
mod theme;
mod widgets;

pub use render::render;
pub use stage::Stage;
pub use theme::{ColorSpec, Theme};
