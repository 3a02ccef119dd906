//! Listing record types
//!
//! Read-only snapshots of properties as the API returns them. Nothing here
//! is mutated after decoding.

mod property;

pub use property::{Commission, CommissionValue, Operation, PropertyRecord};

/// Resource path of the property collection
pub const PROPERTIES_PATH: &str = "v1/properties";
