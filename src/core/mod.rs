// Core algorithm exports
pub mod eligibility;
pub mod encoding;
pub mod recommender;
pub mod similarity;
pub mod stats;

pub use eligibility::check_eligibility;
pub use encoding::{encode_offer, encode_profile, normalize, one_hot, vector_len};
pub use recommender::{Recommender, DEFAULT_ELIGIBILITY_BONUS};
pub use similarity::cosine_similarity;
pub use stats::{CatalogStats, NumericStats, StatsError};
