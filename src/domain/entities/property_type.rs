//! Kinds of property an agency can list.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use validator::ValidationError;

/// Listing category. Parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residence,
    Commercial,
    Retail,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Residence,
        PropertyType::Commercial,
        PropertyType::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residence => "residence",
            PropertyType::Commercial => "commercial",
            PropertyType::Retail => "retail",
        }
    }

    /// Case-insensitive comparison against free text.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown property type: {0}")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|kind| kind.matches(s))
            .ok_or_else(|| UnknownPropertyType(s.to_string()))
    }
}

/// `validator` rule accepting only known property type names.
///
/// Fails with code `one_of` and an `allowed` param listing the valid names.
pub fn validate_property_type(value: &str) -> Result<(), ValidationError> {
    if value.parse::<PropertyType>().is_ok() {
        return Ok(());
    }

    let mut error = ValidationError::new("one_of");
    error.add_param(Cow::Borrowed("allowed"), &PropertyType::ALL.map(|t| t.as_str()));
    Err(error)
}
