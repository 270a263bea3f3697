/// Cosine similarity between two equal-length vectors, in [-1, 1]
///
/// A zero norm on either side yields 0: a degenerate all-zero vector
/// (e.g. a single-offer catalog with zero-variance numeric columns and
/// no categorical match) carries no direction to compare. Mismatched
/// lengths are a construction bug, not a runtime input.
pub fn cosine_similarity(vec_a: &[f64], vec_b: &[f64]) -> f64 {
    debug_assert_eq!(vec_a.len(), vec_b.len(), "vectors from different snapshots");

    let dot: f64 = vec_a.iter().zip(vec_b).map(|(a, b)| a * b).sum();
    let norm_a = vec_a.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm_b = vec_b.iter().map(|b| b * b).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
