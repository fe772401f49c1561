//! Silhouette scoring and cluster coherence.
//!
//! # The Silhouette Coefficient (Rousseeuw, 1987)
//!
//! For a point `i` in cluster `C`:
//!
//! - `a(i)`: mean distance from `i` to the other members of `C`
//!   (0 when `i` is the only member);
//! - `b(i)`: the smallest, over every other cluster `C'`, of the mean
//!   distance from `i` to the members of `C'`;
//! - `s(i)`: 0 when `a` and `b` are both 0, `1 - a/b` when `a < b`,
//!   otherwise `b/a - 1`.
//!
//! The overall score is the mean of `s(i)` across all clustered points,
//! in [-1, 1]: near 1 means tight, well-separated clusters, near 0 means
//! overlapping ones, negative means points sit closer to a foreign
//! cluster than their own. With fewer than two non-empty clusters
//! separation is undefined and the score is 0.
//!
//! ## References
//!
//! Rousseeuw (1987). "Silhouettes: a Graphical Aid to the Interpretation
//! and Validation of Cluster Analysis." J. Comput. Appl. Math. 20.

use std::collections::BTreeMap;

use crate::distance::{cosine_similarity, Metric};

/// Mean silhouette coefficient over every clustered point.
///
/// `clusters` maps cluster id to member indices into `vectors`. Empty
/// member lists are ignored; 0.0 is returned when fewer than two
/// non-empty clusters remain.
pub fn silhouette_score(
    vectors: &[Vec<f32>],
    clusters: &BTreeMap<usize, Vec<usize>>,
    metric: Metric,
) -> f32 {
    let populated: Vec<&Vec<usize>> = clusters.values().filter(|m| !m.is_empty()).collect();
    if populated.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0f32;
    let mut count = 0usize;

    for (own_pos, members) in populated.iter().enumerate() {
        for &i in members.iter() {
            let a = mean_distance_within(vectors, i, members, metric);
            let b = populated
                .iter()
                .enumerate()
                .filter(|(pos, _)| *pos != own_pos)
                .map(|(_, other)| mean_distance_to(vectors, i, other, metric))
                .fold(f32::INFINITY, f32::min);

            let s = if a == 0.0 && b == 0.0 {
                0.0
            } else if a < b {
                1.0 - a / b
            } else {
                b / a - 1.0
            };

            total += s;
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }
    total / count as f32
}

/// Mean distance from `i` to the other members of its own cluster;
/// 0.0 for a singleton.
fn mean_distance_within(
    vectors: &[Vec<f32>],
    i: usize,
    members: &[usize],
    metric: Metric,
) -> f32 {
    if members.len() <= 1 {
        return 0.0;
    }
    let total: f32 = members
        .iter()
        .filter(|&&j| j != i)
        .map(|&j| metric.distance(&vectors[i], &vectors[j]))
        .sum();
    total / (members.len() - 1) as f32
}

/// Mean distance from `i` to every member of a foreign cluster.
fn mean_distance_to(vectors: &[Vec<f32>], i: usize, members: &[usize], metric: Metric) -> f32 {
    let total: f32 = members
        .iter()
        .map(|&j| metric.distance(&vectors[i], &vectors[j]))
        .sum();
    total / members.len() as f32
}

/// Cluster coherence: mean pairwise cosine similarity between members.
///
/// Always cosine regardless of the clustering metric, so coherence reads
/// the same across algorithms. Clusters of one (or zero) members are
/// perfectly coherent by definition: 1.0.
pub fn cluster_coherence(vectors: &[Vec<f32>], members: &[usize]) -> f32 {
    if members.len() <= 1 {
        return 1.0;
    }

    let mut total = 0.0f32;
    let mut pairs = 0usize;
    for (pos, &i) in members.iter().enumerate() {
        for &j in members.iter().skip(pos + 1) {
            total += cosine_similarity(&vectors[i], &vectors[j]);
            pairs += 1;
        }
    }
    total / pairs as f32
}
