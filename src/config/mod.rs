//! Module: config
//!
//! Purpose: Device settings and their persistent record.
//!
//! Architecture:
//! - [`Config`]: in-memory settings, defaults until a valid record is loaded
//! - Record: fixed 7-byte layout at [`CONFIG_BASE`] of a byte-addressable store
//! - [`ConfigStore`]: explicit handle pairing the settings with their storage
//! - [`ConfigHost`]: object-safe view used by the console and menu actions
//!
//! Record layout:
//!
//! ```text
//! offset  0..4   signature "XXX\0"
//! offset  4      beep        (0 = off, anything else = on)
//! offset  5      capitalize  (0 = off, anything else = on)
//! offset  6      language    (0 = English, 1 = Russian)
//! ```

pub mod storage;
pub mod store;

#[cfg(target_os = "espidf")]
pub mod nvs;

pub use storage::{RamStorage, RamStorageError};
pub use store::{ConfigError, ConfigStore, LoadOutcome};

/// Marks a record written by this firmware.
pub const CONFIG_SIGNATURE: [u8; 4] = *b"XXX\0";

/// Offset of the record in persistent storage.
pub const CONFIG_BASE: u32 = 0;

/// Size of the persisted record in bytes.
pub const RECORD_LEN: usize = 7;

/// Input language of the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Russian,
    /// Code written by a newer firmware, kept as-is
    Other(u8),
}

impl Language {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Language::English,
            1 => Language::Russian,
            n => Language::Other(n),
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Language::English => 0,
            Language::Russian => 1,
            Language::Other(n) => n,
        }
    }

    /// Display name; empty for unknown codes.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
            Language::Other(_) => "",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// Device settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Audible feedback on each decoded symbol
    pub beep: bool,
    /// Emit decoded letters in upper case
    pub capitalize: bool,
    pub language: Language,
}

impl Config {
    /// Factory settings.
    pub const DEFAULT: Config = Config {
        beep: false,
        capitalize: true,
        language: Language::English,
    };

    /// Encode as the raw persisted record, signature included.
    pub fn to_record(&self) -> [u8; RECORD_LEN] {
        let mut record = [0u8; RECORD_LEN];
        record[..4].copy_from_slice(&CONFIG_SIGNATURE);
        record[4] = self.beep as u8;
        record[5] = self.capitalize as u8;
        record[6] = self.language.as_u8();
        record
    }

    /// Decode a raw record.
    ///
    /// Returns `None` when the signature does not match, i.e. the storage
    /// never held a record written by this firmware.
    pub fn from_record(record: &[u8; RECORD_LEN]) -> Option<Config> {
        if record[..4] != CONFIG_SIGNATURE {
            return None;
        }

        Some(Config {
            beep: record[4] != 0,
            capitalize: record[5] != 0,
            language: Language::from_u8(record[6]),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings report, as printed on the serial console.
impl core::fmt::Display for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "[CONFIG]")?;
        writeln!(f, "  Is beep........: {}", self.beep as u8)?;
        writeln!(f, "  Is capitalize..: {}", self.capitalize as u8)?;
        writeln!(f, "  Language.......: {}", self.language.name())
    }
}

/// Storage failure with the backend error erased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFault {
    /// Backend read or write failed
    Storage,
    /// Backend too small to hold the record
    TooSmall,
}

impl core::fmt::Display for ConfigFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Storage => write!(f, "storage access failed"),
            Self::TooSmall => write!(f, "storage too small for settings record"),
        }
    }
}

/// Settings handle as seen by the console and menu actions.
pub trait ConfigHost {
    fn config(&self) -> &Config;
    fn config_mut(&mut self) -> &mut Config;
    /// Write the current settings to persistent storage.
    fn save(&mut self) -> Result<(), ConfigFault>;
    /// Re-read settings from persistent storage.
    fn load(&mut self) -> Result<LoadOutcome, ConfigFault>;
}
