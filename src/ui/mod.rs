//! Terminal UI: hot-seat game view with keyboard and mouse input.

mod app;
mod game_view;

pub use app::App;
