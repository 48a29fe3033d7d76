//! GUI module for the morris game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod controller;
mod theme;

pub use app::MorrisApp;
pub use controller::{AiState, GameController, GameMode};
