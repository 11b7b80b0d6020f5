use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded catalog of coastline forecast regions (name, lat, lon).
pub static REGIONS_CSV: &str = include_str!("../fixtures/regions.csv");

/// A coastline region the planner can fetch forecasts for.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Region {
    /// All regions from the embedded catalog, in catalog order.
    pub fn catalog() -> Vec<Region> {
        ReaderBuilder::new()
            .has_headers(true)
            .from_reader(REGIONS_CSV.as_bytes())
            .deserialize()
            .map(|row| row.expect("malformed region row in embedded catalog"))
            .collect()
    }

    /// Look a region up by its exact catalog name.
    pub fn find(name: &str) -> Option<Region> {
        Region::catalog().into_iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn test_catalog_parses() {
        let regions = Region::catalog();
        assert_eq!(regions.len(), 19);
        assert_eq!(regions[0].name, "Corfu (North)");
        assert_eq!(regions[0].latitude, 39.62);
    }

    #[test]
    fn test_find_region() {
        let solent = Region::find("Solent").unwrap();
        assert!(solent.longitude < 0.0);
        assert!(Region::find("Atlantis").is_none());
    }
}
