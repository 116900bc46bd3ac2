//! Named regions and bounding-box filtering.

use serde::{Deserialize, Serialize};

use crate::models::{FlightState, Snapshot};

/// Default number of flights returned by a region listing.
pub const DEFAULT_LIST_LIMIT: usize = 2;

/// Inclusive latitude/longitude bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Edges are inside.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub bounds: BoundingBox,
}

/// Fixed set of named regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self {
            regions: vec![
                // Western Europe
                Region {
                    name: "Region A".into(),
                    bounds: BoundingBox::new(40.0, 50.0, -10.0, 10.0),
                },
                // Continental US
                Region {
                    name: "Region B".into(),
                    bounds: BoundingBox::new(25.0, 45.0, -125.0, -70.0),
                },
            ],
        }
    }
}

impl RegionCatalog {
    /// Look up a region by its exact name.
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Up to `limit` flights inside the named region, in stored order.
    ///
    /// No region, or a name the catalog does not know, lists the first
    /// `limit` flights unfiltered. Flights without a usable position
    /// (see [`FlightState::position`]) never match a region. The scan
    /// stops as soon as `limit` matches are collected.
    pub fn filter<'a>(
        &self,
        snapshot: &'a Snapshot,
        region: Option<&str>,
        limit: usize,
    ) -> Vec<&'a FlightState> {
        let Some(region) = region.and_then(|name| self.get(name)) else {
            return snapshot.iter().take(limit).collect();
        };

        snapshot
            .iter()
            .filter(|flight| {
                flight
                    .position()
                    .is_some_and(|(lat, lon)| region.bounds.contains(lat, lon))
            })
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::flight;

    fn snapshot() -> Snapshot {
        Snapshot::new(vec![
            flight("us0001", Some("AAL100"), 35.0, -100.0),
            flight("eu0001", Some("AFR200"), 45.0, 2.0),
            flight("eu0002", Some("DLH300"), 50.0, 10.0),
            flight("eu0003", Some("BAW400"), 48.0, -5.0),
            flight("as0001", Some("THY500"), 41.0, 29.0),
        ])
    }

    #[test]
    fn test_bounding_box_is_inclusive() {
        let bounds = BoundingBox::new(40.0, 50.0, -10.0, 10.0);
        assert!(bounds.contains(40.0, -10.0));
        assert!(bounds.contains(50.0, 10.0));
        assert!(!bounds.contains(50.0001, 0.0));
        assert!(!bounds.contains(45.0, -10.5));
    }

    #[test]
    fn test_region_filter_respects_limit_and_bounds() {
        let catalog = RegionCatalog::default();
        let snapshot = snapshot();
        let bounds = catalog.get("Region A").unwrap().bounds;

        for limit in 0..5 {
            let flights = catalog.filter(&snapshot, Some("Region A"), limit);
            assert!(flights.len() <= limit);
            for f in &flights {
                let (lat, lon) = f.position().unwrap();
                assert!(bounds.contains(lat, lon));
            }
        }
    }

    #[test]
    fn test_region_filter_keeps_stored_order() {
        let catalog = RegionCatalog::default();
        let snapshot = snapshot();
        let ids: Vec<_> = catalog
            .filter(&snapshot, Some("Region A"), 10)
            .iter()
            .map(|f| f.icao24.as_str())
            .collect();
        assert_eq!(ids, ["eu0001", "eu0002", "eu0003"]);

        let first_two: Vec<_> = catalog
            .filter(&snapshot, Some("Region A"), DEFAULT_LIST_LIMIT)
            .iter()
            .map(|f| f.icao24.as_str())
            .collect();
        assert_eq!(first_two, ["eu0001", "eu0002"]);
    }

    #[test]
    fn test_zero_coordinates_are_excluded() {
        let catalog = RegionCatalog::default();
        // (45, 0) is inside Region A but a zero longitude counts as missing
        let snapshot = Snapshot::new(vec![flight("zero01", None, 45.0, 0.0)]);
        assert!(catalog.filter(&snapshot, Some("Region A"), 5).is_empty());
    }

    #[test]
    fn test_missing_or_unknown_region_lists_unfiltered() {
        let catalog = RegionCatalog::default();
        let snapshot = snapshot();

        let unfiltered: Vec<_> = catalog.filter(&snapshot, None, 2);
        let unknown: Vec<_> = catalog.filter(&snapshot, Some("Region Z"), 2);
        assert_eq!(unfiltered, unknown);
        assert_eq!(unfiltered[0].icao24, "us0001");
        assert_eq!(unfiltered[1].icao24, "eu0001");
    }

    #[test]
    fn test_region_names_are_exact() {
        let catalog = RegionCatalog::default();
        assert!(catalog.get("Region B").is_some());
        assert!(catalog.get("region b").is_none());
        assert_eq!(catalog.regions().len(), 2);
    }
}
