//! Human-readable lines for type-based property reports.
//!
//! A report is a header line, one numbered line per matching property, and a
//! `<none found>` marker when nothing matched:
//!
//! ```text
//! Type: COMMERCIAL
//! 1) Property 678T: 1515 Main Street V8Y7R3 in West Vancouver (2 bedrooms plus pool): $4000000.
//! 2) Property 9999: unit #9 at 99 Gretzky Way T6V7H3 in Toronto (1 bedroom): $99999.
//! ```

use super::entities::Property;
use crate::utils::formatting::FormatError;

/// Marker appended when a report has no matching properties.
pub const NONE_FOUND_LINE: &str = "<none found>\n";

/// Header line naming the requested type in upper case.
pub fn header_line(property_type: &str) -> String {
    format!("Type: {}\n", property_type.to_uppercase())
}

/// Renders one numbered report line for `property`.
///
/// `position` is the 1-based index of the property within the report. Names
/// that cannot be title-cased fall back to their stored form. The price is
/// rounded to whole dollars with halves away from zero.
pub fn property_line(position: usize, property: &Property) -> String {
    let address = property.address();
    let street = formatted_or_raw(address.formatted_street_name(), address.street_name());
    let city = formatted_or_raw(address.formatted_city_name(), address.city_name());

    format!(
        "{position}) Property {id}: {unit}{number} {street} {postal} in {city} ({rooms}): ${price:.0}.\n",
        id = property.id(),
        unit = address.formatted_unit_number(),
        number = address.street_number(),
        postal = address.postal_code().to_uppercase(),
        rooms = rooms_description(property.bedrooms(), property.has_pool()),
        price = property.price_usd().round(),
    )
}

/// `"<n> bedroom"` or `"<n> bedrooms"`, followed by `" plus pool"` when present.
fn rooms_description(bedrooms: u32, has_pool: bool) -> String {
    let noun = if bedrooms == 1 { "bedroom" } else { "bedrooms" };
    let pool = if has_pool { " plus pool" } else { "" };
    format!("{bedrooms} {noun}{pool}")
}

fn formatted_or_raw(formatted: Result<String, FormatError>, raw: &str) -> String {
    formatted.unwrap_or_else(|error| {
        tracing::warn!(%error, name = raw, "using unformatted name in report");
        raw.to_string()
    })
}
