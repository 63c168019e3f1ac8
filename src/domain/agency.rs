//! Agency aggregate: a named portfolio of properties keyed by id.
//!
//! Queries scan the whole portfolio and never fail. Queries that select a
//! subset return `None` rather than an empty collection when nothing matches,
//! so callers must handle absence explicitly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use super::entities::{Address, Property};
use super::inputs::NewAgency;
use super::report;
use crate::config::Config;
use crate::error::AppError;

/// A real-estate agency and the properties it lists.
///
/// Properties are stored by id in ascending order, which also fixes the order
/// of query results and report numbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NewAgency")]
pub struct Agency {
    name: String,
    properties: BTreeMap<String, Property>,
}

impl Agency {
    /// Creates an empty agency.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is not 1-30 characters.
    pub fn new(name: &str) -> Result<Self, AppError> {
        Self::try_from(NewAgency {
            name: Some(name.to_string()),
            ..Default::default()
        })
    }

    /// Creates an empty agency named after [`Config::agency_name`].
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(&config.agency_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over all properties in id order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Lists a property, replacing any existing listing with the same id.
    ///
    /// Passing `None` does nothing. Returns the replaced listing, if any.
    pub fn add_property(&mut self, property: impl Into<Option<Property>>) -> Option<Property> {
        let property = property.into()?;
        let id = property.id().to_string();

        let replaced = self.properties.insert(id.clone(), property);
        if replaced.is_some() {
            tracing::debug!(agency = %self.name, property_id = %id, "property listing replaced");
        } else {
            tracing::debug!(agency = %self.name, property_id = %id, "property listed");
        }
        replaced
    }

    /// Delists the property with `id`. Unknown ids are ignored.
    pub fn remove_property(&mut self, id: &str) -> Option<Property> {
        let removed = self.properties.remove(id);
        if removed.is_some() {
            tracing::debug!(agency = %self.name, property_id = %id, "property removed");
        }
        removed
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.get(id)
    }

    /// Mutable access for repricing a listing.
    pub fn property_mut(&mut self, id: &str) -> Option<&mut Property> {
        self.properties.get_mut(id)
    }

    /// Sum of all asking prices; `0.0` for an empty agency.
    pub fn total_property_values(&self) -> f64 {
        self.properties.values().map(Property::price_usd).sum()
    }

    /// Properties that have a swimming pool.
    pub fn properties_with_pools(&self) -> Option<Vec<&Property>> {
        non_empty(self.properties.values().filter(|p| p.has_pool()).collect())
    }

    /// Properties priced within `min_usd..=max_usd`.
    pub fn properties_between(&self, min_usd: f64, max_usd: f64) -> Option<Vec<&Property>> {
        non_empty(
            self.properties
                .values()
                .filter(|p| (min_usd..=max_usd).contains(&p.price_usd()))
                .collect(),
        )
    }

    /// Addresses of properties on `street_name`, compared without regard to case.
    pub fn properties_on(&self, street_name: &str) -> Option<Vec<&Address>> {
        let target = street_name.to_lowercase();
        non_empty(
            self.properties
                .values()
                .map(Property::address)
                .filter(|a| a.street_name().to_lowercase() == target)
                .collect(),
        )
    }

    /// Properties with `min_bedrooms..=max_bedrooms` bedrooms, keyed by id.
    pub fn properties_with_bedrooms(
        &self,
        min_bedrooms: u32,
        max_bedrooms: u32,
    ) -> Option<BTreeMap<&str, &Property>> {
        let matches: BTreeMap<&str, &Property> = self
            .properties
            .iter()
            .filter(|(_, p)| (min_bedrooms..=max_bedrooms).contains(&p.bedrooms()))
            .map(|(id, p)| (id.as_str(), p))
            .collect();

        if matches.is_empty() { None } else { Some(matches) }
    }

    /// Report of every property whose type matches `property_type`, ignoring case.
    ///
    /// The first entry is always the `Type: <TYPE>` header. Matching
    /// properties follow, numbered from 1. When nothing matches, a single
    /// `<none found>` entry follows the header instead.
    pub fn properties_of_type(&self, property_type: &str) -> Vec<String> {
        let mut lines = vec![report::header_line(property_type)];

        lines.extend(
            self.properties
                .values()
                .filter(|p| p.property_type().matches(property_type))
                .enumerate()
                .map(|(index, p)| report::property_line(index + 1, p)),
        );

        if lines.len() == 1 {
            lines.push(report::NONE_FOUND_LINE.to_string());
        }
        lines
    }
}

impl TryFrom<NewAgency> for Agency {
    type Error = AppError;

    fn try_from(input: NewAgency) -> Result<Self, Self::Error> {
        input
            .validate()
            .map_err(|e| AppError::from_validation(&e, NewAgency::FIELDS))?;

        // Listings are keyed by their own id, whatever key they arrived under.
        let properties = input
            .properties
            .into_values()
            .map(|property| (property.id().to_string(), property))
            .collect();

        Ok(Self {
            name: input.name.ok_or_else(|| AppError::missing("name"))?,
            properties,
        })
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
