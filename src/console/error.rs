//! Console error types

use crate::config::ConfigFault;

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: Unknown command
    UnknownCommand,
    /// E02: Invalid value format
    InvalidValue,
    /// E03: Missing required argument
    MissingArg,
    /// E04: Unknown log level
    UnknownLevel,
    /// E05: Unknown setting name
    UnknownSetting,
    /// E06: Persistent storage error
    StorageError,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "E01",
            Self::InvalidValue => "E02",
            Self::MissingArg => "E03",
            Self::UnknownLevel => "E04",
            Self::UnknownSetting => "E05",
            Self::StorageError => "E06",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown command",
            Self::InvalidValue => "invalid value",
            Self::MissingArg => "missing argument",
            Self::UnknownLevel => "unknown log level",
            Self::UnknownSetting => "unknown setting",
            Self::StorageError => "storage error",
        }
    }
}

impl From<ConfigFault> for ConsoleError {
    fn from(_: ConfigFault) -> Self {
        ConsoleError::StorageError
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
