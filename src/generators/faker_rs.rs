//! Delegation to the `fake` crate for the standard fields.
//!
//! Every draw goes through `fake_with_rng` so the caller-owned RNG drives
//! the output. Calendar fields are formatted off a faked date rather than
//! exposing the library's default rendering.

use chrono::{NaiveDate, NaiveTime};
use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, Latitude, Longitude, StateName, StreetName,
    StreetSuffix, ZipCode,
};
use fake::faker::chrono::en::{Date, Time};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::FreeEmail;
use fake::faker::job::en::Title;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

pub fn name(rng: &mut impl Rng) -> String {
    Name().fake_with_rng(rng)
}

pub fn first_name(rng: &mut impl Rng) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name(rng: &mut impl Rng) -> String {
    LastName().fake_with_rng(rng)
}

pub fn country(rng: &mut impl Rng) -> String {
    CountryName().fake_with_rng(rng)
}

/// Building number, street name, and suffix composed into one line.
pub fn street_address(rng: &mut impl Rng) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let suffix: String = StreetSuffix().fake_with_rng(rng);
    format!("{number} {street} {suffix}")
}

pub fn city(rng: &mut impl Rng) -> String {
    CityName().fake_with_rng(rng)
}

pub fn state(rng: &mut impl Rng) -> String {
    StateName().fake_with_rng(rng)
}

pub fn zipcode(rng: &mut impl Rng) -> String {
    ZipCode().fake_with_rng(rng)
}

pub fn latitude(rng: &mut impl Rng) -> f64 {
    Latitude().fake_with_rng(rng)
}

pub fn longitude(rng: &mut impl Rng) -> f64 {
    Longitude().fake_with_rng(rng)
}

pub fn month_name(rng: &mut impl Rng) -> String {
    fake_date(rng).format("%B").to_string()
}

pub fn weekday(rng: &mut impl Rng) -> String {
    fake_date(rng).format("%A").to_string()
}

pub fn year(rng: &mut impl Rng) -> String {
    fake_date(rng).format("%Y").to_string()
}

pub fn time(rng: &mut impl Rng) -> String {
    let value: NaiveTime = Time().fake_with_rng(rng);
    value.format("%H:%M:%S").to_string()
}

pub fn date(rng: &mut impl Rng) -> String {
    fake_date(rng).format("%Y-%m-%d").to_string()
}

pub fn email(rng: &mut impl Rng) -> String {
    FreeEmail().fake_with_rng(rng)
}

/// Company-flavored address in the manner of `first.last@company.com`.
pub fn office_email(rng: &mut impl Rng) -> String {
    let first: String = FirstName().fake_with_rng(rng);
    let last: String = LastName().fake_with_rng(rng);
    let company: String = CompanyName().fake_with_rng(rng);
    format!("{}.{}@{}.com", slug(&first), slug(&last), slug(&company))
}

pub fn company(rng: &mut impl Rng) -> String {
    CompanyName().fake_with_rng(rng)
}

pub fn job_title(rng: &mut impl Rng) -> String {
    Title().fake_with_rng(rng)
}

pub fn phone_number(rng: &mut impl Rng) -> String {
    PhoneNumber().fake_with_rng(rng)
}

fn fake_date(rng: &mut impl Rng) -> NaiveDate {
    Date().fake_with_rng(rng)
}

fn slug(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}
