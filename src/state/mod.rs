//! Application state management module.
//!
//! This module contains the core state of the application:
//! - Main `State` struct owning the navigation engine and view settings
//! - Pointer hit-testing types (`ClickTarget`, `Clickable`)
//! - The contact message field (`PromptInput`)

mod navigation;
mod prompt;
mod state_impl;

pub use navigation::{ClickTarget, Clickable};
pub use prompt::{PromptInput, SUBMIT_DURATION};
pub use state_impl::State;
