//! Per-field value production.
//!
//! Most fields delegate to the `fake` crate ([`faker_rs`]); a handful are
//! formatted locally ([`semantic`]): simple phone numbers, license plates,
//! name-linked emails, SSNs, and draws from the curated city list.

pub mod faker_rs;
pub mod semantic;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fields::FieldKind;

pub use semantic::PlateStyle;

/// One generated cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    Text(String),
    Float(f64),
}

impl GeneratedValue {
    /// Canonical string form, as written to database and spreadsheet cells.
    pub fn render(&self) -> String {
        match self {
            GeneratedValue::Text(value) => value.clone(),
            GeneratedValue::Float(value) => format!("{value:.6}"),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            GeneratedValue::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Text(_) => None,
            GeneratedValue::Float(value) => Some(*value),
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Reference lists consulted by the locally-implemented generators.
pub(crate) struct GeneratorContext<'a> {
    pub cities: &'a [String],
}

/// Produce one value for `kind`.
pub(crate) fn generate(
    kind: FieldKind,
    ctx: &GeneratorContext<'_>,
    rng: &mut impl Rng,
) -> GeneratedValue {
    match kind {
        FieldKind::Name => GeneratedValue::Text(faker_rs::name(rng)),
        FieldKind::FirstName => GeneratedValue::Text(faker_rs::first_name(rng)),
        FieldKind::LastName => GeneratedValue::Text(faker_rs::last_name(rng)),
        FieldKind::Country => GeneratedValue::Text(faker_rs::country(rng)),
        FieldKind::StreetAddress => GeneratedValue::Text(faker_rs::street_address(rng)),
        FieldKind::City => GeneratedValue::Text(faker_rs::city(rng)),
        FieldKind::RealCity => GeneratedValue::Text(semantic::real_city(ctx.cities, rng)),
        FieldKind::State => GeneratedValue::Text(faker_rs::state(rng)),
        FieldKind::Zipcode => GeneratedValue::Text(faker_rs::zipcode(rng)),
        FieldKind::Latitude => GeneratedValue::Float(faker_rs::latitude(rng)),
        FieldKind::Longitude => GeneratedValue::Float(faker_rs::longitude(rng)),
        FieldKind::NameMonth => GeneratedValue::Text(faker_rs::month_name(rng)),
        FieldKind::Weekday => GeneratedValue::Text(faker_rs::weekday(rng)),
        FieldKind::Year => GeneratedValue::Text(faker_rs::year(rng)),
        FieldKind::Time => GeneratedValue::Text(faker_rs::time(rng)),
        FieldKind::Date => GeneratedValue::Text(faker_rs::date(rng)),
        FieldKind::Ssn => GeneratedValue::Text(semantic::ssn(rng)),
        FieldKind::Email => GeneratedValue::Text(faker_rs::email(rng)),
        FieldKind::OfficeEmail => GeneratedValue::Text(faker_rs::office_email(rng)),
        FieldKind::Company => GeneratedValue::Text(faker_rs::company(rng)),
        FieldKind::JobTitle => GeneratedValue::Text(faker_rs::job_title(rng)),
        FieldKind::PhoneNumberSimple => GeneratedValue::Text(semantic::simple_phone(rng)),
        FieldKind::PhoneNumberFull => GeneratedValue::Text(faker_rs::phone_number(rng)),
        FieldKind::LicensePlate => GeneratedValue::Text(semantic::license_plate(rng, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_formats_floats_with_six_decimals() {
        let value = GeneratedValue::Float(12.5);
        assert_eq!(value.render(), "12.500000");
    }

    #[test]
    fn render_passes_text_through() {
        let value = GeneratedValue::Text("Boston".to_string());
        assert_eq!(value.render(), "Boston");
    }
}
