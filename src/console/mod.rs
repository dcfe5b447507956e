//! Serial console for settings and diagnostics
//!
//! Polled from the main loop, one complete line at a time.
//! Zero heap allocation. Settings are passed in, never global.

pub mod commands;
pub mod error;
pub mod parser;

pub use commands::{command_names, execute, COMMANDS};
pub use error::ConsoleError;
pub use parser::{parse_line, ParsedCommand};
