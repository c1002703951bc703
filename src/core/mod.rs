//! # Core
//!
//! Domain state and logic, independent of any UI toolkit. The TUI adapter
//! translates keyboard input into `Action` values and performs the I/O
//! described by the returned `Effect`s.

pub mod action;
pub mod config;
pub mod query;
pub mod state;
