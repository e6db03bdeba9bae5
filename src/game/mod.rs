//! Core simulation: the action set, ASCII-art board, reward agents, and the
//! turn-based episode driver.

mod action;
mod agent;
mod board;
mod episode;

pub use action::Action;
pub use agent::{PlayerAgent, RewardAgent, StepEffect};
pub use board::{Board, BoardSetup, Cell, Position, Spawn};
pub use episode::{Game, StepResult};
