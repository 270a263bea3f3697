use serde::{Deserialize, Serialize};

/// Canonical education level ordering, lowest to highest.
///
/// Rank comparisons and the statistics vocabulary both rely on this
/// ordering, never on alphabetical or first-seen order.
pub const EDUCATION_LEVELS: [&str; 5] = ["High School", "Associate", "Bachelor", "Master", "PhD"];

/// Zero-based rank of an education level in the canonical ordering.
/// Unknown levels rank lowest.
pub fn education_rank(level: &str) -> usize {
    EDUCATION_LEVELS
        .iter()
        .position(|candidate| *candidate == level)
        .unwrap_or(0)
}

/// Candidate profile submitted for a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub country: String,
    pub education_level: String,
    pub gpa: f64,
    pub field_of_study: String,
    pub income: i64,
}

/// Scholarship offer from the catalog
///
/// `country` and `field` may carry the sentinel value "any" (matched
/// case-insensitively), meaning no restriction on that attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Offer {
    pub id: i64,
    pub name: String,
    pub provider: String,
    pub description: String,
    pub country: String,
    pub education_level: String,
    pub field: String,
    pub min_gpa: f64,
    pub max_income: i64,
    pub min_age: u8,
    pub max_age: u8,
    pub award_amount: f64,
    pub deadline: String,
}

/// Scored recommendation result: the offer plus match annotations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub offer: Offer,
    pub match_score: f64,
    pub eligible: bool,
    pub reasons: Vec<String>,
}
