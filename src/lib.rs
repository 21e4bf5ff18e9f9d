//! # Console Connect Four
//!
//! Two-player Connect Four on the classic 6x7 grid, played from a terminal
//! either as a line-oriented console session or in a full-screen Ratatui UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: piece, player, board, turn state machine
//! - [`console`] — Prompt/read/print driver over any reader and writer
//! - [`ui`] — Terminal UI: keyboard column selection and board view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
