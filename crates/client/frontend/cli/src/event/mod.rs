//! Event handling for the CLI client.
//!
//! Contains the event loop that coordinates runtime events, user input, and
//! UI updates.

mod r#loop;

pub use r#loop::EventLoop;
