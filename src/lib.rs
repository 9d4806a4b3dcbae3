//! Terminal slideshow portfolio.
//!
//! A fixed deck of full-screen sections navigated by keys, mouse wheel and
//! clicks. The [`navigation`] engine guarantees at most one transition in
//! flight and turns bursts of wheel input into a single step.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod navigation;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::AppError;
