//! NVS-backed EEPROM emulation for the device build.
//!
//! The ESP32 has no EEPROM, so the byte range the settings record lives in is
//! kept as a single NVS blob. Reads of a missing blob return an erased image
//! (all `0xFF`), which the signature check treats as "no record".
//! Writes are read-modify-write of the whole blob.

use embedded_storage::{ReadStorage, Storage};
use esp_idf_svc::nvs::{EspDefaultNvsPartition, EspNvs, NvsDefault};
use esp_idf_svc::sys::EspError;

/// NVS namespace for the emulated EEPROM
pub const NVS_NAMESPACE: &str = "morse_cfg";

/// NVS key of the EEPROM image blob
const BLOB_KEY: &str = "eeprom";

/// Size of the emulated EEPROM in bytes
pub const EEPROM_SIZE: usize = 64;

/// NVS operation errors
#[derive(Debug)]
pub enum NvsError {
    /// NVS read/write error
    Esp(EspError),
    /// Access beyond [`EEPROM_SIZE`]
    OutOfBounds { offset: u32, len: usize },
}

impl From<EspError> for NvsError {
    fn from(e: EspError) -> Self {
        NvsError::Esp(e)
    }
}

/// Emulated EEPROM over the default NVS partition.
pub struct NvsEeprom {
    nvs: EspNvs<NvsDefault>,
}

impl NvsEeprom {
    /// Open the default partition and the settings namespace.
    pub fn take() -> Result<Self, NvsError> {
        let partition = EspDefaultNvsPartition::take()?;
        let nvs = EspNvs::new(partition, NVS_NAMESPACE, true)?;
        Ok(Self { nvs })
    }

    fn image(&self) -> Result<[u8; EEPROM_SIZE], NvsError> {
        let mut image = [0xFF; EEPROM_SIZE];
        let mut buf = [0u8; EEPROM_SIZE];

        if let Some(stored) = self.nvs.get_blob(BLOB_KEY, &mut buf)? {
            let len = stored.len().min(EEPROM_SIZE);
            image[..len].copy_from_slice(&stored[..len]);
        }

        Ok(image)
    }

    fn range(offset: u32, len: usize) -> Result<core::ops::Range<usize>, NvsError> {
        let start = offset as usize;
        match start.checked_add(len) {
            Some(end) if end <= EEPROM_SIZE => Ok(start..end),
            _ => Err(NvsError::OutOfBounds { offset, len }),
        }
    }
}

impl ReadStorage for NvsEeprom {
    type Error = NvsError;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let range = Self::range(offset, bytes.len())?;
        let image = self.image()?;
        bytes.copy_from_slice(&image[range]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        EEPROM_SIZE
    }
}

impl Storage for NvsEeprom {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let range = Self::range(offset, bytes.len())?;
        let mut image = self.image()?;
        image[range].copy_from_slice(bytes);
        self.nvs.set_blob(BLOB_KEY, &image)?;
        Ok(())
    }
}
