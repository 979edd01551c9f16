use log::warn;
use serde::Deserialize;

use crate::state::filter::BrandFilter;

const CATALOG_JSON: &str = include_str!("catalog.json");

/// One card in the premium section. Optional fields are left off the card
/// markup entirely when absent, and the details modal falls back for them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Vehicle {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub fuel: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

impl Vehicle {
    pub fn is_visible(&self, filter: &BrandFilter) -> bool {
        filter.matches(&self.brand)
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<Vehicle>, serde_json::Error> {
    serde_json::from_str(json)
}

/// The bundled catalogue. A broken bundle leaves the section empty.
pub fn vehicles() -> Vec<Vehicle> {
    match parse_catalog(CATALOG_JSON) {
        Ok(vehicles) => vehicles,
        Err(e) => {
            warn!("Failed to parse vehicle catalogue: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalogue_parses() {
        let vehicles = parse_catalog(CATALOG_JSON).unwrap();
        assert!(!vehicles.is_empty());
        assert!(vehicles.iter().all(|v| !v.name.is_empty() && !v.brand.is_empty()));
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let vehicles = parse_catalog(r#"[{"name": "911", "brand": "porsche"}]"#).unwrap();
        assert_eq!(vehicles[0].year, None);
        assert_eq!(vehicles[0].img, None);
        assert!(vehicles[0].is_visible(&BrandFilter::from_value("porsche")));
        assert!(!vehicles[0].is_visible(&BrandFilter::from_value("bmw")));
    }

    #[test]
    fn malformed_catalogue_is_an_error() {
        assert!(parse_catalog(r#"[{"brand": "bmw"}]"#).is_err());
    }
}
