//! # Formats
//!
//! On-disk representation of a roster. Pure transformations only;
//! file I/O lives in [`crate::storage`].

pub mod persistence;

pub use persistence::{roster_from_bytes, roster_to_bytes};
