use crate::core::{
    eligibility::check_eligibility,
    encoding::{encode_offer, encode_profile},
    similarity::cosine_similarity,
    stats::CatalogStats,
};
use crate::models::{Offer, Profile, Recommendation};

/// Flat score bonus applied to eligible offers, in match-score points.
pub const DEFAULT_ELIGIBILITY_BONUS: f64 = 15.0;

/// Main ranking orchestrator
///
/// # Pipeline stages
/// 1. Encode the profile once against the statistics snapshot
/// 2. Encode each offer and compute cosine similarity
/// 3. Evaluate hard eligibility rules
/// 4. Combine into a 0-100 match score and rank
#[derive(Debug, Clone)]
pub struct Recommender {
    eligibility_bonus: f64,
}

impl Recommender {
    pub fn new(eligibility_bonus: f64) -> Self {
        Self { eligibility_bonus }
    }

    pub fn with_default_bonus() -> Self {
        Self {
            eligibility_bonus: DEFAULT_ELIGIBILITY_BONUS,
        }
    }

    /// Rank the full catalog against a candidate profile
    ///
    /// Per offer: `match_score = max(0, cosine) * 100`, plus the
    /// eligibility bonus capped at 100 when all hard rules pass, rounded
    /// to two decimals. Every offer appears in the output exactly once.
    ///
    /// The result is sorted by match_score descending. The sort is
    /// stable, so offers with equal scores keep their catalog iteration
    /// order; identical inputs always produce identical output.
    pub fn recommend(
        &self,
        profile: &Profile,
        offers: &[Offer],
        stats: &CatalogStats,
    ) -> Vec<Recommendation> {
        let profile_vector = encode_profile(profile, stats);

        let mut recommendations: Vec<Recommendation> = offers
            .iter()
            .map(|offer| {
                let offer_vector = encode_offer(offer, stats);
                let similarity = cosine_similarity(&profile_vector, &offer_vector);
                let (eligible, reasons) = check_eligibility(profile, offer);

                let mut match_score = similarity.max(0.0) * 100.0;
                if eligible {
                    match_score = (match_score + self.eligibility_bonus).min(100.0);
                }

                Recommendation {
                    offer: offer.clone(),
                    match_score: round2(match_score),
                    eligible,
                    reasons,
                }
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        recommendations
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_bonus()
    }
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: i64, country: &str, field: &str, education: &str) -> Offer {
        Offer {
            id,
            name: format!("Offer {}", id),
            provider: "Test Fund".to_string(),
            description: String::new(),
            country: country.to_string(),
            education_level: education.to_string(),
            field: field.to_string(),
            min_gpa: 3.0,
            max_income: 50_000,
            min_age: 18,
            max_age: 30,
            award_amount: 1_000.0,
            deadline: "2026-12-31".to_string(),
        }
    }

    fn profile() -> Profile {
        Profile {
            name: "Test Student".to_string(),
            age: 22,
            country: "US".to_string(),
            education_level: "Master".to_string(),
            gpa: 3.5,
            field_of_study: "CS".to_string(),
            income: 40_000,
        }
    }

    #[test]
    fn test_scores_within_range() {
        let offers = vec![
            offer(1, "Any", "Any", "Bachelor"),
            offer(2, "US", "CS", "Master"),
            offer(3, "Canada", "Biology", "PhD"),
        ];
        let stats = CatalogStats::from_catalog(&offers).unwrap();

        let recommendations = Recommender::default().recommend(&profile(), &offers, &stats);

        assert_eq!(recommendations.len(), offers.len());
        for rec in &recommendations {
            assert!(
                rec.match_score >= 0.0 && rec.match_score <= 100.0,
                "score {} out of range",
                rec.match_score
            );
        }
    }

    #[test]
    fn test_sorted_descending() {
        let offers = vec![
            offer(1, "Canada", "Biology", "PhD"),
            offer(2, "US", "CS", "Bachelor"),
            offer(3, "Any", "Any", "Bachelor"),
        ];
        let stats = CatalogStats::from_catalog(&offers).unwrap();

        let recommendations = Recommender::default().recommend(&profile(), &offers, &stats);

        for pair in recommendations.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_eligibility_bonus_is_flat_and_capped() {
        let offers = vec![offer(1, "Any", "Any", "Bachelor")];
        let stats = CatalogStats::from_catalog(&offers).unwrap();

        let with_bonus = Recommender::default().recommend(&profile(), &offers, &stats);
        let without_bonus = Recommender::new(0.0).recommend(&profile(), &offers, &stats);

        assert!(with_bonus[0].eligible);
        let base = without_bonus[0].match_score;
        let expected = (base + DEFAULT_ELIGIBILITY_BONUS).min(100.0);
        assert!((with_bonus[0].match_score - expected).abs() < 0.01);
    }

    #[test]
    fn test_ineligible_offer_gets_base_score_only() {
        let mut ineligible = offer(1, "Any", "Any", "Bachelor");
        ineligible.min_gpa = 3.9;
        let offers = vec![ineligible];
        let stats = CatalogStats::from_catalog(&offers).unwrap();

        let scored = Recommender::default().recommend(&profile(), &offers, &stats);
        let unscored = Recommender::new(0.0).recommend(&profile(), &offers, &stats);

        assert!(!scored[0].eligible);
        assert_eq!(scored[0].reasons, vec!["GPA below minimum requirement"]);
        assert_eq!(scored[0].match_score, unscored[0].match_score);
    }

    #[test]
    fn test_idempotent_for_same_input() {
        let offers = vec![
            offer(1, "Any", "Any", "Bachelor"),
            offer(2, "US", "CS", "Master"),
        ];
        let stats = CatalogStats::from_catalog(&offers).unwrap();
        let recommender = Recommender::default();

        let first = recommender.recommend(&profile(), &offers, &stats);
        let second = recommender.recommend(&profile(), &offers, &stats);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.offer.id, b.offer.id);
            assert_eq!(a.match_score, b.match_score);
            assert_eq!(a.eligible, b.eligible);
            assert_eq!(a.reasons, b.reasons);
        }
    }

    #[test]
    fn test_two_decimal_rounding() {
        let offers = vec![
            offer(1, "US", "CS", "Bachelor"),
            offer(2, "Canada", "Math", "Master"),
            offer(3, "Any", "Any", "PhD"),
        ];
        let stats = CatalogStats::from_catalog(&offers).unwrap();

        let recommendations = Recommender::default().recommend(&profile(), &offers, &stats);
        for rec in &recommendations {
            let rescaled = rec.match_score * 100.0;
            assert!((rescaled - rescaled.round()).abs() < 1e-9);
        }
    }
}
