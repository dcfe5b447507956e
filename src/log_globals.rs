//! Global log stream instance.
//!
//! One cooperative loop produces, the serial drain consumes.

use crate::logging::LogStream;

/// Device-wide log ring.
///
/// Producers: menu controller, settings store, console.
/// Consumer: [`serial_log::drain`](crate::serial_log::drain).
pub static LOG_STREAM: LogStream = LogStream::new();
