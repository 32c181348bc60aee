//! Terminal UI frontend for the matching game.
//!
//! This crate provides a terminal-based user interface implementing the
//! `client_frontend_core::Frontend` trait for pure UI rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Subscribes to events and submits actions via the handle
//!
//! The map is drawn as a fixed geographic tile grid of postal codes; both
//! panels respond to the keyboard and to mouse clicks.

mod app;
mod config;
mod cues;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;
