//! Locally formatted fields: the pieces the fake-data library does not
//! cover in the shape this crate promises.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// License plate layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateStyle {
    /// `9ABC123`
    Prefixed,
    /// `ABC-1234`
    DashFour,
    /// `ABC-123`
    DashThree,
}

impl PlateStyle {
    pub const ALL: &'static [PlateStyle] = &[
        PlateStyle::Prefixed,
        PlateStyle::DashFour,
        PlateStyle::DashThree,
    ];
}

/// 10-digit US phone number in `NNN-NNN-NNNN` form. Digit groups are drawn
/// independently; the leading group never starts with 0.
pub fn simple_phone(rng: &mut impl Rng) -> String {
    let p1: u32 = rng.random_range(100..=999);
    let p2: u32 = rng.random_range(0..=999);
    let p3: u32 = rng.random_range(0..=9999);
    format!("{p1}-{p2:03}-{p3:04}")
}

/// Vehicle license plate; a style is picked uniformly when unspecified.
pub fn license_plate(rng: &mut impl Rng, style: Option<PlateStyle>) -> String {
    let style = style.unwrap_or_else(|| {
        PlateStyle::ALL
            .choose(rng)
            .copied()
            .unwrap_or(PlateStyle::Prefixed)
    });
    match style {
        PlateStyle::Prefixed => {
            let lead: u8 = rng.random_range(1..=9);
            let letters = upper_letters(rng, 3);
            let digits: String = (0..3)
                .map(|_| char::from(b'0' + rng.random_range(1u8..=9)))
                .collect();
            format!("{lead}{letters}{digits}")
        }
        PlateStyle::DashFour => {
            let digits: u32 = rng.random_range(0..=9999);
            format!("{}-{digits:04}", upper_letters(rng, 3))
        }
        PlateStyle::DashThree => {
            let digits: u32 = rng.random_range(0..=999);
            format!("{}-{digits:03}", upper_letters(rng, 3))
        }
    }
}

/// Email address derived from a person's name and a domain drawn from the
/// reference list.
///
/// The first and last whitespace-separated words of `full_name` serve as
/// the name tokens; a single-token name serves as both. One of eight
/// combination templates is picked uniformly, and 3 out of 10 addresses
/// carry a random 2-digit suffix before the `@`.
pub fn realistic_email(rng: &mut impl Rng, domains: &[String], full_name: &str) -> String {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    let first = tokens.first().copied().unwrap_or(full_name);
    let last = tokens.last().copied().unwrap_or(full_name);
    let f: String = first.chars().take(1).collect();
    let l: String = last.chars().take(1).collect();

    let combos = [
        format!("{f}{last}"),
        format!("{first}{last}"),
        format!("{first}.{l}"),
        format!("{first}_{l}"),
        format!("{first}.{last}"),
        format!("{first}_{last}"),
        format!("{last}_{first}"),
        format!("{last}.{first}"),
    ];
    let combo = combos.choose(rng).cloned().unwrap_or_default();
    let domain = domains
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("example.com");

    if rng.random_range(0..10) < 7 {
        format!("{combo}@{domain}")
    } else {
        let suffix: u32 = rng.random_range(11..=99);
        format!("{combo}{suffix}@{domain}")
    }
}

/// Uniform draw from the curated city list.
pub fn real_city(cities: &[String], rng: &mut impl Rng) -> String {
    cities.choose(rng).cloned().unwrap_or_default()
}

/// SSN-shaped digits in `AAA-GG-SSSS` form. Formatting only; the area
/// group avoids the never-issued 666 and the 900+ range.
pub fn ssn(rng: &mut impl Rng) -> String {
    let mut area: u32 = rng.random_range(1..=899);
    if area == 666 {
        area = 665;
    }
    let group: u32 = rng.random_range(1..=99);
    let serial: u32 = rng.random_range(1..=9999);
    format!("{area:03}-{group:02}-{serial:04}")
}

fn upper_letters(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(17)
    }

    #[test]
    fn simple_phone_has_three_dash_separated_groups() {
        let mut rng = rng();
        for _ in 0..50 {
            let phone = simple_phone(&mut rng);
            let groups: Vec<&str> = phone.split('-').collect();
            assert_eq!(groups.len(), 3);
            assert_eq!(groups[0].len(), 3);
            assert_eq!(groups[1].len(), 3);
            assert_eq!(groups[2].len(), 4);
            assert!(groups.iter().all(|g| g.bytes().all(|b| b.is_ascii_digit())));
            assert!(!phone.starts_with('0'));
        }
    }

    #[test]
    fn prefixed_plate_has_no_zeros() {
        let mut rng = rng();
        for _ in 0..50 {
            let plate = license_plate(&mut rng, Some(PlateStyle::Prefixed));
            assert_eq!(plate.len(), 7);
            let bytes = plate.as_bytes();
            assert!((b'1'..=b'9').contains(&bytes[0]));
            assert!(bytes[1..4].iter().all(u8::is_ascii_uppercase));
            assert!(bytes[4..7].iter().all(|b| (b'1'..=b'9').contains(b)));
        }
    }

    #[test]
    fn dashed_plates_have_letter_and_digit_halves() {
        let mut rng = rng();
        for (style, digits) in [(PlateStyle::DashFour, 4), (PlateStyle::DashThree, 3)] {
            let plate = license_plate(&mut rng, Some(style));
            let (letters, numbers) = plate.split_once('-').expect("dash separator");
            assert_eq!(letters.len(), 3);
            assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
            assert_eq!(numbers.len(), digits);
            assert!(numbers.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn realistic_email_uses_single_token_for_both_names() {
        let mut rng = rng();
        let domains = vec!["example.org".to_string()];
        let email = realistic_email(&mut rng, &domains, "Cher");
        assert!(email.ends_with("@example.org"));
        assert!(email.contains("Cher") || email.starts_with('C'));
    }

    #[test]
    fn ssn_is_zero_padded() {
        let mut rng = rng();
        for _ in 0..50 {
            let ssn = ssn(&mut rng);
            let groups: Vec<&str> = ssn.split('-').collect();
            assert_eq!(groups[0].len(), 3);
            assert_eq!(groups[1].len(), 2);
            assert_eq!(groups[2].len(), 4);
            assert_ne!(groups[0], "666");
        }
    }
}
