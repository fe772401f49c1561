//! Distance and similarity metrics over dense vectors.
//!
//! Both clustering engines and the silhouette scorer take the metric as a
//! per-call configuration ([`Metric`]) rather than hardwiring one, so the
//! same engine can cluster by angle (cosine) or by position (Euclidean).

use serde::{Deserialize, Serialize};

/// Distance metric used by the clustering engines and the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// `1 - cosine_similarity`, range [0, 2]. The default: document
    /// vectors are L2-normalized, so angle is what matters.
    #[default]
    Cosine,
    /// Straight-line distance, range [0, ∞).
    Euclidean,
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    #[inline]
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            Metric::Cosine => cosine_distance(a, b),
            Metric::Euclidean => euclidean_distance(a, b),
        }
    }
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Returns 0.0 when either vector has zero magnitude or the lengths differ;
/// a zero vector has no direction to compare.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f32::EPSILON {
        return 0.0;
    }

    dot / denom
}

/// Cosine distance: `1 - cosine_similarity`, range [0, 2]. Clamped at
/// zero; rounding in the norms can otherwise push identical vectors a
/// few ulps negative.
#[inline]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    (1.0 - cosine_similarity(a, b)).max(0.0)
}

/// Euclidean (L2) distance between two vectors.
#[inline]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

/// Mean pairwise distance over all unordered vector pairs.
///
/// The algorithm selector derives DBSCAN's epsilon from this. With fewer
/// than two vectors there are no pairs; 0.5 is returned as a neutral
/// default so the derived epsilon stays usable.
pub fn mean_pairwise_distance(vectors: &[Vec<f32>], metric: Metric) -> f32 {
    let n = vectors.len();
    if n < 2 {
        return 0.5;
    }

    let mut total = 0.0f32;
    let mut pairs = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            total += metric.distance(&vectors[i], &vectors[j]);
            pairs += 1;
        }
    }
    total / pairs as f32
}
