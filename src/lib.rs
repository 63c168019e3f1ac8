//! # Realty Agency
//!
//! An in-memory domain model for a real-estate agency: validated property
//! listings and the portfolio queries an agency runs over them.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the agency aggregate, validation bounds
//! - **Errors** ([`error`]) - Construction failures
//! - **Configuration** ([`config`]) - Environment-driven settings
//! - **Telemetry** ([`telemetry`]) - Tracing subscriber setup
//! - **Utilities** ([`utils`]) - Name formatting
//!
//! ## Quick Start
//!
//! ```
//! use realty_agency::prelude::*;
//!
//! let mut agency = Agency::new("BCIT Ltd")?;
//! let address = Address::new(None, 1515, "main street", "v8y7r3", "west vancouver")?;
//! agency.add_property(Property::new(4_000_000.0, address, 2, true, "commercial", "678T")?);
//!
//! assert_eq!(agency.total_property_values(), 4_000_000.0);
//! assert_eq!(agency.properties_of_type("COMMERCIAL")[0], "Type: COMMERCIAL\n");
//! # Ok::<(), AppError>(())
//! ```
//!
//! ## Errors
//!
//! Only construction can fail, with [`AppError`]. Queries signal "no match"
//! with `None`.
//!
//! ## Concurrency
//!
//! [`domain::Agency`] has no internal locking. Mutating methods take
//! `&mut self`; share an agency across threads behind a lock of your choice.

pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::inputs::{NewAddress, NewAgency, NewProperty};
    pub use crate::domain::{Address, Agency, Property, PropertyType};
    pub use crate::error::AppError;
}
