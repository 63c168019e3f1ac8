//! Validation bounds for every entity field.
//!
//! Lengths are measured in characters and are inclusive on both ends.

pub const MIN_UNIT_NUMBER_LENGTH: u64 = 1;
pub const MAX_UNIT_NUMBER_LENGTH: u64 = 4;

/// Street numbers are unsigned, so zero is the implicit lower bound.
pub const MAX_STREET_NUMBER: u32 = 999_999;

pub const MIN_STREET_NAME_LENGTH: u64 = 1;
pub const MAX_STREET_NAME_LENGTH: u64 = 20;

pub const MIN_POSTAL_CODE_LENGTH: u64 = 5;
pub const MAX_POSTAL_CODE_LENGTH: u64 = 6;

pub const MIN_CITY_NAME_LENGTH: u64 = 1;
pub const MAX_CITY_NAME_LENGTH: u64 = 30;

pub const MIN_PRICE_USD: f64 = 0.0;

pub const MIN_BEDROOMS: u32 = 1;
pub const MAX_BEDROOMS: u32 = 20;

pub const MIN_PROPERTY_ID_LENGTH: u64 = 1;
pub const MAX_PROPERTY_ID_LENGTH: u64 = 6;

pub const MIN_AGENCY_NAME_LENGTH: u64 = 1;
pub const MAX_AGENCY_NAME_LENGTH: u64 = 30;
