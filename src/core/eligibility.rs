use crate::models::{education_rank, Offer, Profile};

/// Catalog value meaning "no restriction", matched case-insensitively.
const ANY: &str = "any";

/// Evaluate the hard eligibility rules for one profile/offer pair
///
/// All six rules run unconditionally and each appends its reason when
/// violated, so a caller sees every failed rule at once. The reason
/// order is fixed by the rule order below.
pub fn check_eligibility(profile: &Profile, offer: &Offer) -> (bool, Vec<String>) {
    let mut reasons = Vec::new();

    if profile.gpa < offer.min_gpa {
        reasons.push("GPA below minimum requirement".to_string());
    }

    if profile.income > offer.max_income {
        reasons.push("Income exceeds maximum threshold".to_string());
    }

    if profile.age < offer.min_age || profile.age > offer.max_age {
        reasons.push("Age outside allowed range".to_string());
    }

    if education_rank(&profile.education_level) < education_rank(&offer.education_level) {
        reasons.push("Education level below requirement".to_string());
    }

    if !offer.country.eq_ignore_ascii_case(ANY)
        && !offer.country.eq_ignore_ascii_case(&profile.country)
    {
        reasons.push("Country does not match eligibility".to_string());
    }

    if !offer.field.eq_ignore_ascii_case(ANY)
        && !offer.field.eq_ignore_ascii_case(&profile.field_of_study)
    {
        reasons.push("Field of study does not match".to_string());
    }

    (reasons.is_empty(), reasons)
}
