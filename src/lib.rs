//! # Connect Four
//!
//! A Connect Four engine: an R x C board with gravity, four-direction win
//! detection, and a match state machine, plus a hot-seat terminal UI built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, match state
//! - [`ui`]: Terminal UI: game view and input handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
