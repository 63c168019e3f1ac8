//! Domain layer: entities, the agency aggregate, and their validation rules.
//!
//! # Architecture
//!
//! - [`entities`] - Leaf entities ([`Address`], [`Property`], [`PropertyType`])
//! - [`agency`] - The [`Agency`] aggregate and its portfolio queries
//! - [`inputs`] - Unvalidated input records used to build entities
//! - [`rules`] - Field bounds shared by validation and configuration
//! - [`report`] - Report line rendering for type-based queries
//!
//! # Construction Flow
//!
//! 1. Caller builds an [`Address`] (directly or from a [`inputs::NewAddress`])
//! 2. The address is moved into a [`Property`], which validates its own fields
//! 3. The property is listed with [`Agency::add_property`]
//! 4. Queries on the agency borrow listings; they never clone or fail

pub mod agency;
pub mod entities;
pub mod inputs;
pub mod report;
pub mod rules;

pub use agency::Agency;
pub use entities::{Address, Property, PropertyType};
