//! # Persistence Format
//!
//! Binary serialization for rosters.
//!
//! Format: Header (5 bytes) + postcard-serialized roster data.
//! - 4 bytes: Magic ("RSTR")
//! - 1 byte: Version
//!
//! The payload is a tagged record list: one `StoredEmployee` per employee, in
//! container order, each carrying its characteristics in order. Salaries are
//! stored as canonical decimal text so scale and precision survive exactly.
//!
//! ## Validation
//!
//! Size limits, magic bytes and version are checked before the payload is
//! parsed. Trailing bytes after the payload are rejected.

use crate::primitives::{FORMAT_VERSION, HEADER_SIZE, MAGIC_BYTES, MAX_PERSISTENCE_PAYLOAD_SIZE};
use crate::{Employee, EmployeeContainer, RosterError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// FILE HEADER
// =============================================================================

/// Leading bytes of every roster file: magic then format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    magic: [u8; 4],
    version: u8,
}

impl Header {
    const CURRENT: Self = Self {
        magic: *MAGIC_BYTES,
        version: FORMAT_VERSION,
    };

    fn encode(self) -> [u8; HEADER_SIZE] {
        let [m0, m1, m2, m3] = self.magic;
        [m0, m1, m2, m3, self.version]
    }

    /// Split `bytes` into a checked header and the payload after it.
    fn split(bytes: &[u8]) -> Result<(Self, &[u8]), RosterError> {
        let Some((head, payload)) = bytes.split_first_chunk::<HEADER_SIZE>() else {
            return Err(RosterError::Persistence(format!(
                "Data too short: minimum {} bytes required",
                HEADER_SIZE
            )));
        };
        let [m0, m1, m2, m3, version] = *head;
        let header = Self {
            magic: [m0, m1, m2, m3],
            version,
        };

        if &header.magic != MAGIC_BYTES {
            return Err(RosterError::Persistence(
                "Not a roster file (invalid magic bytes)".to_string(),
            ));
        }
        if header.version != FORMAT_VERSION {
            return Err(RosterError::Persistence(format!(
                "Unsupported version: {} (expected {})",
                header.version, FORMAT_VERSION
            )));
        }
        Ok((header, payload))
    }
}

// =============================================================================
// STORED RECORDS (version 1)
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct StoredCharacteristic {
    property: String,
    rating: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredEmployee {
    passport_series: String,
    passport_number: String,
    /// Canonical decimal text, e.g. "60000.00".
    salary: String,
    characteristics: Vec<StoredCharacteristic>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredRoster {
    employees: Vec<StoredEmployee>,
}

impl From<&Employee> for StoredEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            passport_series: employee.passport_series().to_string(),
            passport_number: employee.passport_number().to_string(),
            salary: employee.salary().to_string(),
            characteristics: employee
                .characteristics()
                .iter()
                .map(|c| StoredCharacteristic {
                    property: c.property().to_string(),
                    rating: c.rating(),
                })
                .collect(),
        }
    }
}

impl TryFrom<StoredEmployee> for Employee {
    type Error = RosterError;

    fn try_from(stored: StoredEmployee) -> Result<Self, Self::Error> {
        let salary = Decimal::from_str_exact(&stored.salary).map_err(|e| {
            RosterError::Persistence(format!(
                "Corrupt salary '{}' for passport {}-{}: {}",
                stored.salary, stored.passport_series, stored.passport_number, e
            ))
        })?;

        let mut employee = Employee::new(stored.passport_series, stored.passport_number, salary);
        for c in stored.characteristics {
            employee.add_characteristic(c.property, c.rating);
        }
        Ok(employee)
    }
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Serialize a roster to bytes (header + payload).
///
/// This is a pure transformation - no file I/O.
pub fn roster_to_bytes(container: &EmployeeContainer) -> Result<Vec<u8>, RosterError> {
    let stored = StoredRoster {
        employees: container.iter().map(StoredEmployee::from).collect(),
    };

    let payload =
        postcard::to_stdvec(&stored).map_err(|e| RosterError::Persistence(e.to_string()))?;

    let mut result = Vec::with_capacity(HEADER_SIZE + payload.len());
    result.extend_from_slice(&Header::CURRENT.encode());
    result.extend_from_slice(&payload);

    Ok(result)
}

/// Deserialize a roster from bytes.
///
/// This is a pure transformation - no file I/O. Either the whole roster
/// is rebuilt or an error is returned; nothing partial escapes.
pub fn roster_from_bytes(bytes: &[u8]) -> Result<EmployeeContainer, RosterError> {
    if bytes.len() > MAX_PERSISTENCE_PAYLOAD_SIZE {
        return Err(RosterError::Persistence(format!(
            "Data size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_PERSISTENCE_PAYLOAD_SIZE
        )));
    }

    let (_, payload) = Header::split(bytes)?;
    let (stored, rest): (StoredRoster, &[u8]) = postcard::take_from_bytes(payload)
        .map_err(|e| RosterError::Persistence(format!("Failed to decode roster data: {}", e)))?;
    if !rest.is_empty() {
        return Err(RosterError::Persistence(format!(
            "{} unexpected trailing bytes after roster data",
            rest.len()
        )));
    }

    stored
        .employees
        .into_iter()
        .map(Employee::try_from)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
