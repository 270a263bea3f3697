use crate::core::stats::{CatalogStats, NumericStats};
use crate::models::{Offer, Profile};

/// One-hot encode a categorical value over a vocabulary
///
/// Produces a 0/1 entry per vocabulary term, with a 1 only at the
/// position whose term matches the value case-insensitively. Values
/// outside the vocabulary encode as all zeros.
pub fn one_hot(value: &str, vocabulary: &[String]) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|term| {
            if term.eq_ignore_ascii_case(value) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Z-score a value against a column statistic
///
/// A zero standard deviation means the column had a single distinct
/// value; every record normalizes to 0 on that column.
#[inline]
pub fn normalize(value: f64, stats: &NumericStats) -> f64 {
    if stats.std_dev == 0.0 {
        return 0.0;
    }
    (value - stats.mean) / stats.std_dev
}

/// Encode a candidate profile into the shared feature layout.
///
/// The profile's raw GPA, income, and age are normalized against the
/// catalog's min_gpa, max_income, and min_age statistics respectively.
/// The asymmetry with [`encode_offer`] is deliberate: the similarity
/// compares the candidate's own values against the population of bounds
/// that define the offers.
pub fn encode_profile(profile: &Profile, stats: &CatalogStats) -> Vec<f64> {
    let mut vector = Vec::with_capacity(vector_len(stats));
    vector.extend(one_hot(&profile.country, &stats.countries));
    vector.extend(one_hot(&profile.field_of_study, &stats.fields));
    vector.extend(one_hot(&profile.education_level, &stats.education_levels));

    vector.push(normalize(profile.gpa, &stats.min_gpa));
    vector.push(normalize(profile.income as f64, &stats.max_income));
    vector.push(normalize(profile.age as f64, &stats.min_age));
    vector
}

/// Encode a catalog offer into the shared feature layout.
pub fn encode_offer(offer: &Offer, stats: &CatalogStats) -> Vec<f64> {
    let mut vector = Vec::with_capacity(vector_len(stats));
    vector.extend(one_hot(&offer.country, &stats.countries));
    vector.extend(one_hot(&offer.field, &stats.fields));
    vector.extend(one_hot(&offer.education_level, &stats.education_levels));

    vector.push(normalize(offer.min_gpa, &stats.min_gpa));
    vector.push(normalize(offer.max_income as f64, &stats.max_income));
    vector.push(normalize(offer.min_age as f64, &stats.min_age));
    vector
}

/// Length of every vector produced against this snapshot.
#[inline]
pub fn vector_len(stats: &CatalogStats) -> usize {
    stats.countries.len() + stats.fields.len() + stats.education_levels.len() + 3
}
