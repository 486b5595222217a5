//! # Format Primitives
//!
//! Fixed constants of the roster file format and input limits.
//! These are compiled into the binary and never change at runtime.

/// Magic bytes for the roster binary format header.
///
/// - File Header = Magic Bytes ("RSTR") + Version (u8) before payload.
pub const MAGIC_BYTES: &[u8; 4] = b"RSTR";

/// Current serialization format version.
///
/// Increment this when making breaking changes to the serialization format.
pub const FORMAT_VERSION: u8 = 1;

/// Size of the file header in bytes (magic + version).
pub const HEADER_SIZE: usize = 5;

/// Maximum allowed size of a persisted roster (64 MB).
///
/// Checked BEFORE the payload is parsed.
pub const MAX_PERSISTENCE_PAYLOAD_SIZE: usize = 64 * 1024 * 1024;

/// Destination used by the `auto` command when no other is configured.
pub const DEFAULT_AUTO_DESTINATION: &str = "test";
