//! Event handling module.
//!
//! Terminal input (keys, mouse, resize) is polled on a separate thread and
//! handled on the UI loop, where it is translated into navigation requests.

pub mod terminal;
