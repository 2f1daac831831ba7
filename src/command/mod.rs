//! Command definitions and execution logic.
//!
//! - `basic`: the `put`, `get` and `delete` commands.
//! - `execute`: the [`CommandExecute`] trait, the [`Command`] dispatcher and
//!   [`Reply`] rendering.
//! - `parser`: reading commands from whitespace-separated tokens.

pub mod basic;
pub mod execute;
pub mod parser;

pub use basic::*;
pub use execute::*;
pub use parser::*;
