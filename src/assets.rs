use std::fs;
use std::path::Path;

use crate::errors::{FabricaError, Result};

const DEFAULT_CITIES: &str = include_str!("../assets/Cities.txt");
const DEFAULT_DOMAINS: &str = include_str!("../assets/Domains.txt");

/// Load the city reference list, preferring a caller-supplied file over the
/// bundled default.
pub fn load_city_list(path: Option<&Path>) -> Result<Vec<String>> {
    load_list("city list", path, DEFAULT_CITIES)
}

/// Load the email-domain reference list, preferring a caller-supplied file
/// over the bundled default.
pub fn load_domain_list(path: Option<&Path>) -> Result<Vec<String>> {
    load_list("domain list", path, DEFAULT_DOMAINS)
}

fn load_list(label: &str, path: Option<&Path>, bundled: &str) -> Result<Vec<String>> {
    let values = match path {
        Some(path) => parse_lines(&fs::read_to_string(path)?),
        None => parse_lines(bundled),
    };
    if values.is_empty() {
        return Err(FabricaError::InvalidArgument(format!(
            "{label} has no entries"
        )));
    }
    Ok(values)
}

fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_lists_are_non_empty() {
        let cities = load_city_list(None).unwrap();
        let domains = load_domain_list(None).unwrap();
        assert!(cities.len() > 100);
        assert!(domains.contains(&"gmail.com".to_string()));
    }

    #[test]
    fn parse_lines_trims_and_drops_blanks() {
        let values = parse_lines("  Boston \n\n Denver\n");
        assert_eq!(values, vec!["Boston".to_string(), "Denver".to_string()]);
    }

    #[test]
    fn missing_override_is_an_io_error() {
        let err = load_city_list(Some(Path::new("/nonexistent/cities.txt"))).unwrap_err();
        assert!(matches!(err, FabricaError::Io(_)));
    }
}
