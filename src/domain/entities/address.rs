//! Address entity describing where a property is located.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::inputs::NewAddress;
use crate::error::AppError;
use crate::utils::formatting::{FormatError, title_case_leading_words};

/// Physical location of a property.
///
/// Immutable once built. Every instance has passed validation: see
/// [`crate::domain::rules`] for the bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewAddress")]
pub struct Address {
    unit_number: Option<String>,
    street_number: u32,
    street_name: String,
    postal_code: String,
    city_name: String,
}

impl Address {
    /// Creates a validated address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the first field that is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use realty_agency::domain::entities::Address;
    ///
    /// let address = Address::new(Some("1a"), 777, "56th avenue", "v7n2m8", "surrey").unwrap();
    /// assert_eq!(address.formatted_unit_number(), "unit #1a at ");
    /// assert!(Address::new(None, 1, "", "v7n2m8", "surrey").is_err());
    /// ```
    pub fn new(
        unit_number: Option<&str>,
        street_number: u32,
        street_name: &str,
        postal_code: &str,
        city_name: &str,
    ) -> Result<Self, AppError> {
        Self::try_from(NewAddress {
            unit_number: unit_number.map(str::to_string),
            street_number,
            street_name: Some(street_name.to_string()),
            postal_code: Some(postal_code.to_string()),
            city_name: Some(city_name.to_string()),
        })
    }

    pub fn unit_number(&self) -> Option<&str> {
        self.unit_number.as_deref()
    }

    pub fn street_number(&self) -> u32 {
        self.street_number
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    /// Returns `"unit #<unit> at "`, or an empty string when there is no unit.
    pub fn formatted_unit_number(&self) -> String {
        match &self.unit_number {
            Some(unit) => format!("unit #{unit} at "),
            None => String::new(),
        }
    }

    /// Street name title-cased; only the first two words are kept.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EmptyInput`] when the stored name is all spaces.
    pub fn formatted_street_name(&self) -> Result<String, FormatError> {
        title_case_leading_words(&self.street_name)
    }

    /// City name title-cased; only the first two words are kept.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EmptyInput`] when the stored name is all spaces.
    pub fn formatted_city_name(&self) -> Result<String, FormatError> {
        title_case_leading_words(&self.city_name)
    }
}

impl TryFrom<NewAddress> for Address {
    type Error = AppError;

    fn try_from(input: NewAddress) -> Result<Self, Self::Error> {
        input
            .validate()
            .map_err(|e| AppError::from_validation(&e, NewAddress::FIELDS))?;

        let NewAddress {
            unit_number,
            street_number,
            street_name,
            postal_code,
            city_name,
        } = input;

        Ok(Self {
            unit_number,
            street_number,
            street_name: street_name.ok_or_else(|| AppError::missing("street_name"))?,
            postal_code: postal_code.ok_or_else(|| AppError::missing("postal_code"))?,
            city_name: city_name.ok_or_else(|| AppError::missing("city_name"))?,
        })
    }
}

impl From<Address> for NewAddress {
    fn from(address: Address) -> Self {
        NewAddress {
            unit_number: address.unit_number,
            street_number: address.street_number,
            street_name: Some(address.street_name),
            postal_code: Some(address.postal_code),
            city_name: Some(address.city_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::MAX_STREET_NUMBER;

    fn valid_input() -> NewAddress {
        NewAddress {
            unit_number: Some("9".to_string()),
            street_number: 99,
            street_name: Some("gretzky way".to_string()),
            postal_code: Some("t6v7h3".to_string()),
            city_name: Some("toronto".to_string()),
        }
    }

    #[test]
    fn test_address_creation() {
        let address = Address::new(Some("1a"), 777, "56th avenue", "v7n2m8", "surrey").unwrap();

        assert_eq!(address.unit_number(), Some("1a"));
        assert_eq!(address.street_number(), 777);
        assert_eq!(address.street_name(), "56th avenue");
        assert_eq!(address.postal_code(), "v7n2m8");
        assert_eq!(address.city_name(), "surrey");
    }

    #[test]
    fn test_unit_number_bounds() {
        assert!(Address::new(Some("1234"), 1, "main street", "90210", "la").is_ok());

        let err = Address::new(Some(""), 1, "main street", "90210", "la").unwrap_err();
        assert_eq!(err.field(), "unit_number");

        let err = Address::new(Some("12345"), 1, "main street", "90210", "la").unwrap_err();
        assert_eq!(err.field(), "unit_number");
    }

    #[test]
    fn test_street_number_bounds() {
        assert!(Address::new(None, 0, "main street", "90210", "la").is_ok());
        assert!(Address::new(None, MAX_STREET_NUMBER, "main street", "90210", "la").is_ok());

        let err =
            Address::new(None, MAX_STREET_NUMBER + 1, "main street", "90210", "la").unwrap_err();
        assert_eq!(err.field(), "street_number");
        assert!(!err.is_missing_value());
    }

    #[test]
    fn test_street_name_bounds() {
        assert!(Address::new(None, 1, "", "90210", "la").is_err());
        assert!(Address::new(None, 1, &"s".repeat(20), "90210", "la").is_ok());

        let err = Address::new(None, 1, &"s".repeat(21), "90210", "la").unwrap_err();
        assert_eq!(err.field(), "street_name");
    }

    #[test]
    fn test_postal_code_bounds() {
        assert!(Address::new(None, 1, "elm street", "9021", "la").is_err());
        assert!(Address::new(None, 1, "elm street", "90210", "la").is_ok());
        assert!(Address::new(None, 1, "elm street", "v7n2m8", "la").is_ok());
        assert!(Address::new(None, 1, "elm street", "v7n2m8x", "la").is_err());
    }

    #[test]
    fn test_city_name_bounds() {
        assert!(Address::new(None, 1, "elm street", "90210", "").is_err());
        assert!(Address::new(None, 1, "elm street", "90210", &"c".repeat(30)).is_ok());
        assert!(Address::new(None, 1, "elm street", "90210", &"c".repeat(31)).is_err());
    }

    #[test]
    fn test_missing_required_fields() {
        let err = Address::try_from(NewAddress {
            street_name: None,
            ..valid_input()
        })
        .unwrap_err();
        assert!(err.is_missing_value());
        assert_eq!(err.field(), "street_name");
        assert_eq!(err.to_string(), "Invalid street name: null");

        let err = Address::try_from(NewAddress {
            postal_code: None,
            ..valid_input()
        })
        .unwrap_err();
        assert!(err.is_missing_value());
        assert_eq!(err.field(), "postal_code");

        let err = Address::try_from(NewAddress {
            city_name: None,
            ..valid_input()
        })
        .unwrap_err();
        assert!(err.is_missing_value());
        assert_eq!(err.field(), "city_name");
    }

    #[test]
    fn test_first_invalid_field_is_reported() {
        let err = Address::try_from(NewAddress {
            unit_number: Some("toolong".to_string()),
            city_name: None,
            ..valid_input()
        })
        .unwrap_err();
        assert_eq!(err.field(), "unit_number");
    }

    #[test]
    fn test_formatted_unit_number() {
        let with_unit = Address::try_from(valid_input()).unwrap();
        assert_eq!(with_unit.formatted_unit_number(), "unit #9 at ");

        let without_unit = Address::new(None, 123, "main street", "v7r2g2", "west vancouver").unwrap();
        assert_eq!(without_unit.formatted_unit_number(), "");
    }

    #[test]
    fn test_formatted_names() {
        let address = Address::new(None, 123, "MAIN street", "v7r2g2", "west VANCOUVER").unwrap();
        assert_eq!(address.formatted_street_name().unwrap(), "Main Street");
        assert_eq!(address.formatted_city_name().unwrap(), "West Vancouver");
    }

    #[test]
    fn test_formatted_blank_name_is_error() {
        let address = Address::new(None, 1, " ", "90210", "la").unwrap();
        assert_eq!(address.formatted_street_name(), Err(FormatError::EmptyInput));
    }

    #[test]
    fn test_deserialize_validates() {
        let address: Address = serde_json::from_str(
            r#"{ "street_number": 456, "street_name": "elm street", "postal_code": "90210", "city_name": "los angeles" }"#,
        )
        .unwrap();
        assert_eq!(address.unit_number(), None);
        assert_eq!(address.street_name(), "elm street");

        let err = serde_json::from_str::<Address>(
            r#"{ "street_number": 456, "postal_code": "90210", "city_name": "los angeles" }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid street name: null"));
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let address = Address::try_from(valid_input()).unwrap();
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["unit_number"], "9");
        assert_eq!(json["street_number"], 99);
        assert_eq!(json["city_name"], "toronto");
    }
}
