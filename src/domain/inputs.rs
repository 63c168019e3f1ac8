//! Unvalidated input records for entity construction.
//!
//! Every entity is built from one of these records, whether it comes from
//! Rust code or from deserialized data. Required fields are `Option`s so an
//! absent value surfaces as [`AppError::MissingValue`] instead of a generic
//! validation error.
//!
//! [`AppError::MissingValue`]: crate::error::AppError::MissingValue

use serde::Deserialize;
use std::collections::BTreeMap;
use validator::Validate;

use super::entities::{Property, validate_property_type};
use super::rules::*;

/// Raw address fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewAddress {
    #[serde(default)]
    #[validate(length(min = MIN_UNIT_NUMBER_LENGTH, max = MAX_UNIT_NUMBER_LENGTH))]
    pub unit_number: Option<String>,

    #[validate(range(max = MAX_STREET_NUMBER))]
    pub street_number: u32,

    #[serde(default)]
    #[validate(
        required,
        length(min = MIN_STREET_NAME_LENGTH, max = MAX_STREET_NAME_LENGTH)
    )]
    pub street_name: Option<String>,

    #[serde(default)]
    #[validate(
        required,
        length(min = MIN_POSTAL_CODE_LENGTH, max = MAX_POSTAL_CODE_LENGTH)
    )]
    pub postal_code: Option<String>,

    #[serde(default)]
    #[validate(
        required,
        length(min = MIN_CITY_NAME_LENGTH, max = MAX_CITY_NAME_LENGTH)
    )]
    pub city_name: Option<String>,
}

impl NewAddress {
    /// Field names in the order they are checked.
    pub const FIELDS: &'static [&'static str] = &[
        "unit_number",
        "street_number",
        "street_name",
        "postal_code",
        "city_name",
    ];
}

/// Raw property fields.
///
/// The property type is kept as free text here and checked against the known
/// names; it is parsed into [`PropertyType`](super::entities::PropertyType)
/// during conversion. The address is validated separately as an
/// [`Address`](super::entities::Address).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewProperty {
    #[validate(range(min = MIN_PRICE_USD))]
    pub price_usd: f64,

    #[serde(default)]
    pub address: Option<NewAddress>,

    #[validate(range(min = MIN_BEDROOMS, max = MAX_BEDROOMS))]
    pub bedrooms: u32,

    #[serde(default)]
    pub has_pool: bool,

    #[serde(default)]
    #[validate(required, custom(function = "validate_property_type"))]
    pub property_type: Option<String>,

    #[serde(default)]
    #[validate(
        required,
        length(min = MIN_PROPERTY_ID_LENGTH, max = MAX_PROPERTY_ID_LENGTH)
    )]
    pub id: Option<String>,
}

impl NewProperty {
    pub const FIELDS: &'static [&'static str] = &[
        "price_usd",
        "address",
        "bedrooms",
        "property_type",
        "id",
    ];
}

/// Raw agency fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewAgency {
    #[serde(default)]
    #[validate(
        required,
        length(min = MIN_AGENCY_NAME_LENGTH, max = MAX_AGENCY_NAME_LENGTH)
    )]
    pub name: Option<String>,

    /// Listings to start with. Each one was validated when deserialized.
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
}

impl NewAgency {
    pub const FIELDS: &'static [&'static str] = &["name"];
}
