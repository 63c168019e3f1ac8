//! Leaf entities of the agency model.
//!
//! # Entity Types
//!
//! - [`Address`] - Where a property is located
//! - [`Property`] - A single listing
//! - [`PropertyType`] - Listing category
//!
//! Entities have private fields and can only be obtained through validating
//! constructors or `TryFrom` the matching record in [`crate::domain::inputs`].

pub mod address;
pub mod property;
pub mod property_type;

pub use address::Address;
pub use property::Property;
pub use property_type::{PropertyType, UnknownPropertyType, validate_property_type};
