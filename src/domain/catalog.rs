use crate::domain::model::{LocationId, LocationRecord};
use crate::domain::ports::LocationSource;
use crate::utils::error::{ListingError, Result};
use std::collections::HashSet;

/// The fixed, ordered set of locations. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<LocationRecord>,
}

impl Catalog {
    pub fn new(records: Vec<LocationRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let id = record.id.get();
            if id == 0 {
                return Err(ListingError::InvalidLocationId { id });
            }
            if !seen.insert(id) {
                return Err(ListingError::DuplicateLocationId { id });
            }
        }
        Ok(Self { records })
    }

    /// The locations the site ships with, checked like any other record set.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_records())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: LocationId) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl LocationSource for Catalog {
    fn records(&self) -> &[LocationRecord] {
        &self.records
    }
}

fn record(
    id: u32,
    name: &str,
    category: &str,
    address: &str,
    description: &str,
    features: &[&str],
) -> LocationRecord {
    LocationRecord {
        id: LocationId::from_static(id),
        name: name.to_string(),
        image: format!("images/location-{id}.jpg"),
        category: category.to_string(),
        address: address.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn builtin_records() -> Vec<LocationRecord> {
    vec![
        record(
            1,
            "Sunset Loft",
            "Loft",
            "Los Angeles, CA",
            "An open-plan loft with west-facing windows and a rooftop terrace above the arts district.",
            &["Rooftop terrace", "Natural light", "Freight elevator"],
        ),
        record(
            2,
            "Harbor Warehouse",
            "Industrial",
            "Seattle, WA",
            "A converted brick warehouse on the waterfront with exposed beams and loading dock access.",
            &["Exposed brick", "Loading dock", "Water views", "Parking"],
        ),
        record(
            3,
            "Historic Corridor",
            "Historic",
            "San Francisco, CA",
            "A Victorian-era hallway with original tile floors, carved wood paneling and period lighting.",
            &["Original tile", "Period lighting", "Grand staircase"],
        ),
        record(
            4,
            "Desert Ranch",
            "Outdoor",
            "Scottsdale, AZ",
            "Twenty acres of open desert with a working ranch house, corrals and mountain backdrops.",
            &["Mountain views", "Horse corrals", "Fire pit", "Generator power"],
        ),
        record(
            5,
            "Modern Glass House",
            "Residential",
            "Austin, TX",
            "A minimalist home wrapped in floor-to-ceiling glass overlooking a wooded creek.",
            &["Floor-to-ceiling glass", "Infinity pool", "Chef's kitchen"],
        ),
        record(
            6,
            "Midcentury Diner",
            "Commercial",
            "Portland, OR",
            "A fully restored 1950s diner with chrome counters, vinyl booths and a neon sign.",
            &["Neon signage", "Working kitchen", "Vinyl booths"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_id_checks() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(builtin_records().iter().zip(catalog.records()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_builtin_contains_historic_corridor() {
        let catalog = Catalog::builtin().unwrap();
        let record = catalog.get(LocationId::new(3).unwrap()).unwrap();
        assert_eq!(record.name, "Historic Corridor");
        assert_eq!(record.category, "Historic");
        assert_eq!(record.address, "San Francisco, CA");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut records = Catalog::builtin().unwrap().records().to_vec();
        records.push(records[0].clone());
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, ListingError::DuplicateLocationId { id: 1 }));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Catalog);
    }

    #[test]
    fn test_zero_id_rejected() {
        let mut zero: LocationRecord = Catalog::builtin().unwrap().records()[0].clone();
        zero.id = serde_json::from_str("0").unwrap();
        let err = Catalog::new(vec![zero]).unwrap_err();
        assert!(matches!(err, ListingError::InvalidLocationId { id: 0 }));
    }
}
