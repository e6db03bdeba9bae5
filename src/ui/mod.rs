//! Terminal UI for the interactive `--live` mode: arrow keys steer the
//! agents, an idle tick steps everyone with Stay.

mod app;
mod board_view;

pub use app::App;
