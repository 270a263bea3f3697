use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Profile;

/// Request to rank the catalog against a candidate profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub age: u8,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub education_level: String,
    #[validate(range(min = 0.0))]
    pub gpa: f64,
    #[validate(length(min = 1))]
    pub field_of_study: String,
    #[validate(range(min = 0))]
    pub income: i64,
}

impl RecommendRequest {
    /// Build the validated domain profile consumed by the core.
    pub fn into_profile(self) -> Profile {
        Profile {
            name: self.name.trim().to_string(),
            age: self.age,
            country: self.country.trim().to_string(),
            education_level: self.education_level,
            gpa: self.gpa,
            field_of_study: self.field_of_study.trim().to_string(),
            income: self.income,
        }
    }
}
