use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Offer, EDUCATION_LEVELS};

/// Errors that can occur when deriving catalog statistics
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Catalog is empty, cannot derive statistics")]
    EmptyCatalog,
}

/// Mean and population standard deviation of one numeric catalog column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl NumericStats {
    /// Population statistics (divide by N) over a non-empty column.
    fn from_column(values: &[f64]) -> Self {
        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Immutable statistics snapshot derived from one catalog version
///
/// Vocabularies and numeric statistics always come from the same scan of
/// the catalog; a new snapshot fully replaces an old one, it is never
/// patched in place. Encoding offers from a different catalog version
/// against this snapshot produces wrong vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: Vec<String>,
    pub fields: Vec<String>,
    pub education_levels: Vec<String>,
    pub min_gpa: NumericStats,
    pub max_income: NumericStats,
    pub min_age: NumericStats,
    pub max_age: NumericStats,
    pub award_amount: NumericStats,
}

impl CatalogStats {
    /// Scan the catalog once and derive the full snapshot.
    ///
    /// Country and field vocabularies are distinct values sorted
    /// ascending (case-sensitive as stored). The education vocabulary is
    /// the canonical level ordering restricted to levels that occur in
    /// the catalog.
    pub fn from_catalog(offers: &[Offer]) -> Result<Self, StatsError> {
        if offers.is_empty() {
            return Err(StatsError::EmptyCatalog);
        }

        let countries = distinct_sorted(offers.iter().map(|o| o.country.as_str()));
        let fields = distinct_sorted(offers.iter().map(|o| o.field.as_str()));

        let education_levels = EDUCATION_LEVELS
            .iter()
            .filter(|level| offers.iter().any(|o| o.education_level == **level))
            .map(|level| level.to_string())
            .collect();

        let column = |extract: fn(&Offer) -> f64| {
            let values: Vec<f64> = offers.iter().map(extract).collect();
            NumericStats::from_column(&values)
        };

        Ok(Self {
            countries,
            fields,
            education_levels,
            min_gpa: column(|o| o.min_gpa),
            max_income: column(|o| o.max_income as f64),
            min_age: column(|o| o.min_age as f64),
            max_age: column(|o| o.max_age as f64),
            award_amount: column(|o| o.award_amount),
        })
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut distinct: Vec<String> = values.map(|v| v.to_string()).collect();
    distinct.sort();
    distinct.dedup();
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(country: &str, field: &str, education: &str, min_gpa: f64) -> Offer {
        Offer {
            id: 0,
            name: "Test Offer".to_string(),
            provider: "Test Provider".to_string(),
            description: String::new(),
            country: country.to_string(),
            education_level: education.to_string(),
            field: field.to_string(),
            min_gpa,
            max_income: 50_000,
            min_age: 18,
            max_age: 30,
            award_amount: 1_000.0,
            deadline: "2026-12-31".to_string(),
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = CatalogStats::from_catalog(&[]);
        assert!(matches!(result, Err(StatsError::EmptyCatalog)));
    }

    #[test]
    fn test_vocabularies_sorted_and_distinct() {
        let offers = vec![
            offer("US", "CS", "Bachelor", 3.0),
            offer("Canada", "Engineering", "Master", 3.5),
            offer("US", "CS", "Bachelor", 2.5),
        ];

        let stats = CatalogStats::from_catalog(&offers).unwrap();
        assert_eq!(stats.countries, vec!["Canada", "US"]);
        assert_eq!(stats.fields, vec!["CS", "Engineering"]);
    }

    #[test]
    fn test_education_vocabulary_keeps_canonical_order() {
        // Catalog order is Master-first; the vocabulary must not be.
        let offers = vec![
            offer("US", "CS", "Master", 3.0),
            offer("US", "CS", "High School", 2.0),
            offer("US", "CS", "Bachelor", 3.0),
        ];

        let stats = CatalogStats::from_catalog(&offers).unwrap();
        assert_eq!(stats.education_levels, vec!["High School", "Bachelor", "Master"]);
    }

    #[test]
    fn test_population_standard_deviation() {
        let offers = vec![
            offer("US", "CS", "Bachelor", 2.0),
            offer("US", "CS", "Bachelor", 4.0),
        ];

        let stats = CatalogStats::from_catalog(&offers).unwrap();
        assert_eq!(stats.min_gpa.mean, 3.0);
        // Population std over {2, 4} is 1.0 (sample std would be sqrt(2)).
        assert!((stats.min_gpa.std_dev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_offer_has_zero_std() {
        let offers = vec![offer("US", "CS", "Bachelor", 3.0)];

        let stats = CatalogStats::from_catalog(&offers).unwrap();
        assert_eq!(stats.min_gpa.std_dev, 0.0);
        assert_eq!(stats.max_income.std_dev, 0.0);
        assert!(stats.min_gpa.std_dev.is_finite());
    }
}
