// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{education_rank, Offer, Profile, Recommendation, EDUCATION_LEVELS};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse};
