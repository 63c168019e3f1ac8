//! Property entity representing a single listing.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::{Address, PropertyType};
use crate::domain::inputs::NewProperty;
use crate::error::AppError;

/// A real-estate listing.
///
/// The id and type are fixed at construction. Price is the only field that
/// can change afterwards, through [`Property::set_price_usd`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewProperty")]
pub struct Property {
    price_usd: f64,
    address: Address,
    bedrooms: u32,
    has_pool: bool,
    property_type: PropertyType,
    id: String,
}

impl Property {
    /// Creates a validated property.
    ///
    /// `property_type` is matched case-insensitively against
    /// `residence`, `commercial` and `retail`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the offending field when the
    /// price is negative or not finite, the bedroom count is outside 1-20,
    /// the type is unknown, or the id is not 1-6 characters.
    pub fn new(
        price_usd: f64,
        address: Address,
        bedrooms: u32,
        has_pool: bool,
        property_type: &str,
        id: &str,
    ) -> Result<Self, AppError> {
        Self::assemble(
            NewProperty {
                price_usd,
                address: None,
                bedrooms,
                has_pool,
                property_type: Some(property_type.to_string()),
                id: Some(id.to_string()),
            },
            Ok(address),
        )
    }

    pub fn price_usd(&self) -> f64 {
        self.price_usd
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    pub fn has_pool(&self) -> bool {
        self.has_pool
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces the asking price.
    ///
    /// Unlike construction, no lower bound is enforced here.
    pub fn set_price_usd(&mut self, price_usd: f64) {
        if price_usd < 0.0 {
            tracing::warn!(property_id = %self.id, price_usd, "property repriced below zero");
        }
        self.price_usd = price_usd;
    }
}

impl TryFrom<NewProperty> for Property {
    type Error = AppError;

    fn try_from(mut input: NewProperty) -> Result<Self, Self::Error> {
        let address = input
            .address
            .take()
            .ok_or_else(|| AppError::missing("address"))
            .and_then(Address::try_from);

        Self::assemble(input, address)
    }
}

impl Property {
    /// Validates the remaining fields of `input` around an already resolved
    /// address. `input.address` is ignored.
    ///
    /// Fields are reported in declaration order: price, address, bedrooms,
    /// type, id.
    fn assemble(input: NewProperty, address: Result<Address, AppError>) -> Result<Self, AppError> {
        // NaN slips through a plain range check.
        if !input.price_usd.is_finite() {
            return Err(AppError::invalid(
                "price_usd",
                input.price_usd,
                json!({ "field": "price_usd", "rule": "finite" }),
            ));
        }

        let violations = input.validate().err();
        match &violations {
            Some(errors) if errors.field_errors().contains_key("price_usd") => {
                return Err(AppError::from_validation(errors, NewProperty::FIELDS));
            }
            _ => {}
        }

        let address = address?;

        if let Some(errors) = &violations {
            return Err(AppError::from_validation(errors, NewProperty::FIELDS));
        }

        let NewProperty {
            price_usd,
            bedrooms,
            has_pool,
            property_type,
            id,
            ..
        } = input;

        let raw_type = property_type.ok_or_else(|| AppError::missing("property_type"))?;
        let property_type = raw_type.parse::<PropertyType>().map_err(|_| {
            AppError::invalid(
                "property_type",
                &raw_type,
                json!({ "field": "property_type", "rule": "one_of" }),
            )
        })?;

        Ok(Self {
            price_usd,
            address,
            bedrooms,
            has_pool,
            property_type,
            id: id.ok_or_else(|| AppError::missing("id"))?,
        })
    }
}
