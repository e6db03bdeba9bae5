//! # Corridor World
//!
//! A miniature multi-agent grid-world: a walled ASCII corridor in which each
//! agent owns a fixed slot in the per-step action batch and in the reward
//! vector. Stepping delivers one indexed action to every agent, resolves
//! single-cell horizontal movement against the walls, and reports an
//! additively aggregated reward vector, a discount, and a termination flag.
//!
//! ## Modules
//!
//! - [`game`] — Core simulation: actions, board, agents, episode driver
//! - [`ui`] — Terminal UI for the interactive `--live` mode
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
