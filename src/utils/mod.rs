//! Helper functions shared by the domain layer.
//!
//! - [`formatting`] - Title-casing of stored names for reports

pub mod formatting;
