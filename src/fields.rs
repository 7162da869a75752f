use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FabricaError, Result};

/// Closed vocabulary of generatable fields.
///
/// The table builder additionally understands the alias `phone` (resolved to
/// one of the two phone variants) and substitutes `real_city` for `city`
/// when asked; neither concern leaks into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    FirstName,
    LastName,
    Country,
    StreetAddress,
    City,
    RealCity,
    State,
    Zipcode,
    Latitude,
    Longitude,
    NameMonth,
    Weekday,
    Year,
    Time,
    Date,
    Ssn,
    Email,
    OfficeEmail,
    Company,
    JobTitle,
    PhoneNumberSimple,
    PhoneNumberFull,
    LicensePlate,
}

impl FieldKind {
    pub const ALL: &'static [FieldKind] = &[
        FieldKind::Name,
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::Country,
        FieldKind::StreetAddress,
        FieldKind::City,
        FieldKind::RealCity,
        FieldKind::State,
        FieldKind::Zipcode,
        FieldKind::Latitude,
        FieldKind::Longitude,
        FieldKind::NameMonth,
        FieldKind::Weekday,
        FieldKind::Year,
        FieldKind::Time,
        FieldKind::Date,
        FieldKind::Ssn,
        FieldKind::Email,
        FieldKind::OfficeEmail,
        FieldKind::Company,
        FieldKind::JobTitle,
        FieldKind::PhoneNumberSimple,
        FieldKind::PhoneNumberFull,
        FieldKind::LicensePlate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::FirstName => "first_name",
            FieldKind::LastName => "last_name",
            FieldKind::Country => "country",
            FieldKind::StreetAddress => "street_address",
            FieldKind::City => "city",
            FieldKind::RealCity => "real_city",
            FieldKind::State => "state",
            FieldKind::Zipcode => "zipcode",
            FieldKind::Latitude => "latitude",
            FieldKind::Longitude => "longitude",
            FieldKind::NameMonth => "name_month",
            FieldKind::Weekday => "weekday",
            FieldKind::Year => "year",
            FieldKind::Time => "time",
            FieldKind::Date => "date",
            FieldKind::Ssn => "ssn",
            FieldKind::Email => "email",
            FieldKind::OfficeEmail => "office_email",
            FieldKind::Company => "company",
            FieldKind::JobTitle => "job_title",
            FieldKind::PhoneNumberSimple => "phone_number_simple",
            FieldKind::PhoneNumberFull => "phone_number_full",
            FieldKind::LicensePlate => "license_plate",
        }
    }

    /// Resolve a field name against the registry.
    pub fn parse(name: &str) -> Result<FieldKind> {
        FieldKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| {
                FabricaError::InvalidArgument(format!(
                    "unknown field '{}', expected one of: {}",
                    name,
                    valid_names().join(", ")
                ))
            })
    }

}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FabricaError;

    fn from_str(name: &str) -> Result<FieldKind> {
        FieldKind::parse(name)
    }
}

fn valid_names() -> Vec<&'static str> {
    FieldKind::ALL.iter().map(|kind| kind.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::parse(kind.as_str()).unwrap(), *kind);
        }
    }

    #[test]
    fn parse_rejects_unknown_names_with_vocabulary() {
        let err = FieldKind::parse("telephone").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown field 'telephone'"));
        assert!(message.contains("phone_number_simple"));
    }
}
