//! Settings handle over a byte-addressable persistent store.
//!
//! Load is a raw read of the whole record; the record is adopted only if its
//! signature matches, otherwise the in-memory settings stay untouched.
//! Save is an unconditional raw write. There is no versioning and no torn
//! write recovery: the record is the unit of persistence.

use embedded_storage::Storage;

use super::{Config, ConfigFault, ConfigHost, CONFIG_BASE, RECORD_LEN};
use crate::logging::timestamp_us;
use crate::{dev_info, dev_warn, LOG_STREAM};

/// Result of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Valid record found and adopted
    Loaded,
    /// Signature mismatch (blank or foreign storage), settings unchanged
    Defaults,
}

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError<E> {
    /// Backend read/write error
    Storage(E),
    /// Record does not fit at the configured offset
    TooSmall { capacity: usize, required: usize },
}

impl<E> ConfigError<E> {
    /// Drop the backend error, keeping the kind.
    pub fn fault(&self) -> ConfigFault {
        match self {
            ConfigError::Storage(_) => ConfigFault::Storage,
            ConfigError::TooSmall { .. } => ConfigFault::TooSmall,
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for ConfigError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "storage error: {:?}", e),
            Self::TooSmall { capacity, required } => {
                write!(f, "storage holds {} bytes, record needs {}", capacity, required)
            }
        }
    }
}

/// Settings paired with the storage they persist to.
pub struct ConfigStore<S> {
    storage: S,
    base: u32,
    config: Config,
}

impl<S: Storage> ConfigStore<S> {
    /// Handle with factory settings, record at [`CONFIG_BASE`].
    pub fn new(storage: S) -> Self {
        Self::with_base(storage, CONFIG_BASE)
    }

    /// Handle with factory settings, record at `base`.
    pub fn with_base(storage: S, base: u32) -> Self {
        Self {
            storage,
            base,
            config: Config::DEFAULT,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Read the record and adopt it if the signature matches.
    pub fn load(&mut self) -> Result<LoadOutcome, ConfigError<S::Error>> {
        self.check_fits()?;

        let mut record = [0u8; RECORD_LEN];
        self.storage
            .read(self.base, &mut record)
            .map_err(ConfigError::Storage)?;

        match Config::from_record(&record) {
            Some(config) => {
                self.config = config;
                dev_info!(LOG_STREAM, Config, timestamp_us(), "loaded {:?}", self.config);
                Ok(LoadOutcome::Loaded)
            }
            None => {
                dev_warn!(LOG_STREAM, Config, timestamp_us(), "no signature, keeping defaults");
                Ok(LoadOutcome::Defaults)
            }
        }
    }

    /// Write the current settings.
    pub fn save(&mut self) -> Result<(), ConfigError<S::Error>> {
        self.check_fits()?;

        let record = self.config.to_record();
        self.storage
            .write(self.base, &record)
            .map_err(ConfigError::Storage)?;

        dev_info!(LOG_STREAM, Config, timestamp_us(), "saved {:?}", self.config);
        Ok(())
    }

    fn check_fits(&self) -> Result<(), ConfigError<S::Error>> {
        let capacity = self.storage.capacity();
        let required = (self.base as usize)
            .checked_add(RECORD_LEN)
            .unwrap_or(usize::MAX);
        if required > capacity {
            return Err(ConfigError::TooSmall { capacity, required });
        }
        Ok(())
    }
}

impl<S: Storage> ConfigHost for ConfigStore<S> {
    fn config(&self) -> &Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    fn save(&mut self) -> Result<(), ConfigFault> {
        ConfigStore::save(self).map_err(|e| e.fault())
    }

    fn load(&mut self) -> Result<LoadOutcome, ConfigFault> {
        ConfigStore::load(self).map_err(|e| e.fault())
    }
}
