#![allow(dead_code)]

use realty_agency::prelude::*;

/// Builds a property from plain values, panicking on invalid fixture data.
#[allow(clippy::too_many_arguments)]
pub fn listing(
    unit: Option<&str>,
    street_number: u32,
    street_name: &str,
    postal_code: &str,
    city_name: &str,
    price_usd: f64,
    bedrooms: u32,
    has_pool: bool,
    property_type: &str,
    id: &str,
) -> Property {
    let address = Address::new(unit, street_number, street_name, postal_code, city_name)
        .expect("fixture address must be valid");
    Property::new(price_usd, address, bedrooms, has_pool, property_type, id)
        .expect("fixture property must be valid")
}

/// Twelve listings spread over three property types.
pub fn fixture_properties() -> Vec<Property> {
    vec![
        listing(Some("1a"), 777, "56th avenue", "v7n2m8", "surrey", 499_000.0, 2, false, "residence", "abc123"),
        listing(None, 123, "main street", "v7r2g2", "west vancouver", 5_999_999.0, 5, true, "residence", "xyz789"),
        listing(None, 456, "elm street", "90210", "los angeles", 2_500_000.0, 6, true, "residence", "777def"),
        listing(Some("44"), 1111, "maple street", "v8y3r5", "vancouver", 1_000_000.0, 1, false, "retail", "876tru"),
        listing(Some("9"), 99, "gretzky way", "t6v7h3", "toronto", 99_999.0, 1, false, "commercial", "9999"),
        listing(Some("b"), 711, "country road", "v8h5f5", "maple ridge", 740_100.0, 3, false, "residence", "mr6789"),
        listing(None, 8785, "pinnacle avenue", "v9u3h3", "north vancouver", 15_000_000.0, 20, true, "residence", "78444a"),
        listing(None, 800, "elm street", "90557", "los angeles", 7_100_000.0, 10, false, "residence", "mmm33"),
        listing(None, 1515, "main street", "v8y7r3", "west vancouver", 4_000_000.0, 2, true, "commercial", "678T"),
        listing(Some("6"), 60, "60th street", "v8u9b1", "burnaby", 700_000.0, 2, true, "retail", "y6yyy"),
        listing(Some("7h"), 1500, "railway avenue", "v9v5v4", "richmond", 840_000.0, 4, false, "commercial", "A1212"),
        listing(None, 333, "elm street", "90111", "los angeles", 1_600_000.0, 3, false, "residence", "9000a"),
    ]
}

/// Agency holding every fixture property.
pub fn fixture_agency() -> Agency {
    let mut agency = Agency::new("BCIT Ltd").expect("fixture agency name must be valid");
    for property in fixture_properties() {
        agency.add_property(property);
    }
    agency
}

/// Sorted ids of the given properties.
pub fn ids<'a>(properties: impl IntoIterator<Item = &'a Property>) -> Vec<&'a str> {
    let mut ids: Vec<&str> = properties.into_iter().map(Property::id).collect();
    ids.sort_unstable();
    ids
}
