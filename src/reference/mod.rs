//! Reference data for the dependent county/district dropdowns.

use crate::models::Location;

/// The loaded location list and its two derived views.
///
/// Counties are distinct in first-seen order; districts are the rows
/// matching one county, duplicates preserved exactly as the source rows
/// carry them.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    locations: Vec<Location>,
}

impl ReferenceData {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn is_loaded(&self) -> bool {
        !self.locations.is_empty()
    }

    /// Distinct counties, preserving the order they first appear in.
    pub fn counties(&self) -> Vec<&str> {
        let mut counties: Vec<&str> = Vec::new();
        for location in &self.locations {
            if !counties.contains(&location.county.as_str()) {
                counties.push(&location.county);
            }
        }
        counties
    }

    /// Districts of the rows matching `county`. Empty when no county is
    /// selected; duplicates are not collapsed.
    pub fn districts_for(&self, county: &str) -> Vec<&str> {
        if county.is_empty() {
            return Vec::new();
        }
        self.locations
            .iter()
            .filter(|l| l.county == county)
            .map(|l| l.district.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferenceData {
        ReferenceData::new(vec![
            Location::new("A", "X"),
            Location::new("A", "Y"),
            Location::new("B", "Z"),
        ])
    }

    #[test]
    fn test_counties_distinct_first_seen() {
        let reference = sample();
        assert!(reference.is_loaded());
        assert_eq!(reference.counties(), vec!["A", "B"]);
    }

    #[test]
    fn test_unloaded_reference_is_empty() {
        let reference = ReferenceData::default();
        assert!(!reference.is_loaded());
        assert!(reference.counties().is_empty());
    }

    #[test]
    fn test_districts_filtered_by_county() {
        let reference = sample();
        assert_eq!(reference.districts_for("A"), vec!["X", "Y"]);
        assert_eq!(reference.districts_for("B"), vec!["Z"]);
        assert_eq!(reference.districts_for("C"), Vec::<&str>::new());
    }

    #[test]
    fn test_no_county_selected_yields_no_districts() {
        let reference = sample();
        assert!(reference.districts_for("").is_empty());
    }

    #[test]
    fn test_duplicate_district_rows_preserved() {
        let reference = ReferenceData::new(vec![
            Location::new("A", "X"),
            Location::new("A", "X"),
            Location::new("A", "Y"),
        ]);
        assert_eq!(reference.counties(), vec!["A"]);
        assert_eq!(reference.districts_for("A"), vec!["X", "X", "Y"]);
    }
}
