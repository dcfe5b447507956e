//! RAM-backed byte store.
//!
//! Stands in for the EEPROM on the host (simulator, tests). Starts erased
//! (all `0xFF`) like a blank part.

use embedded_storage::{ReadStorage, Storage};

/// Access outside the store's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamStorageError {
    pub offset: u32,
    pub len: usize,
}

impl core::fmt::Display for RamStorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} bytes at offset {} out of bounds", self.len, self.offset)
    }
}

/// `N` bytes of emulated persistent storage.
pub struct RamStorage<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> RamStorage<N> {
    /// Erased store.
    pub const fn new() -> Self {
        Self { bytes: [0xFF; N] }
    }

    /// Store preloaded with an image.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    fn range(&self, offset: u32, len: usize) -> Result<core::ops::Range<usize>, RamStorageError> {
        let start = offset as usize;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= N)
            .ok_or(RamStorageError { offset, len })?;
        Ok(start..end)
    }
}

impl<const N: usize> Default for RamStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ReadStorage for RamStorage<N> {
    type Error = RamStorageError;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let range = self.range(offset, bytes.len())?;
        bytes.copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Storage for RamStorage<N> {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let range = self.range(offset, bytes.len())?;
        self.bytes[range].copy_from_slice(bytes);
        Ok(())
    }
}
