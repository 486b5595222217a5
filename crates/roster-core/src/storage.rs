//! # Storage
//!
//! Whole-roster file persistence on top of [`crate::formats::persistence`].
//!
//! Both calls are blocking and own their file handle for the duration of the
//! call only. An interrupted write may leave a truncated file behind; the next
//! load reports it as a persistence error.

use crate::formats::{roster_from_bytes, roster_to_bytes};
use crate::primitives::MAX_PERSISTENCE_PAYLOAD_SIZE;
use crate::{EmployeeContainer, RosterError};
use std::path::Path;

impl EmployeeContainer {
    /// Write the whole roster to `destination`, replacing any existing file.
    ///
    /// Returns the number of bytes written.
    pub fn serialize(&self, destination: impl AsRef<Path>) -> Result<usize, RosterError> {
        let destination = destination.as_ref();
        let data = roster_to_bytes(self)?;
        std::fs::write(destination, &data).map_err(|e| {
            RosterError::Io(format!("Write '{}': {}", destination.display(), e))
        })?;
        Ok(data.len())
    }

    /// Read a roster previously written by [`EmployeeContainer::serialize`].
    ///
    /// Returns a new container; the caller decides whether to replace its
    /// current one, so a failed load never clobbers existing state.
    pub fn deserialize(source: impl AsRef<Path>) -> Result<Self, RosterError> {
        let source = source.as_ref();

        let metadata = std::fs::metadata(source).map_err(|e| {
            RosterError::Persistence(format!("Cannot open '{}': {}", source.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(RosterError::Persistence(format!(
                "'{}' is not a regular file",
                source.display()
            )));
        }
        if metadata.len() > MAX_PERSISTENCE_PAYLOAD_SIZE as u64 {
            return Err(RosterError::Persistence(format!(
                "File size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_PERSISTENCE_PAYLOAD_SIZE
            )));
        }

        let data = std::fs::read(source).map_err(|e| {
            RosterError::Persistence(format!("Read '{}': {}", source.display(), e))
        })?;
        roster_from_bytes(&data)
    }
}

// =============================================================================
// TESTS
// =============================================================================
