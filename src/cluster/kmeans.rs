//! K-means clustering with k-means++ seeding.
//!
//! # The Algorithm (Lloyd, 1982)
//!
//! K-means partitions points into `k` clusters by alternating two steps
//! until the centroids settle:
//!
//! 1. **Assign**: every point joins its nearest centroid.
//! 2. **Update**: every centroid moves to the mean of its members.
//!
//! ## k-means++ Seeding
//!
//! Initial centroids follow Arthur & Vassilvitskii (2007): the first is
//! drawn uniformly, each later one by roulette wheel where a point's
//! weight is its squared distance to the nearest already-chosen centroid.
//! Spreading the seeds out this way avoids most of the bad local optima
//! plain random seeding falls into. When every remaining weight is zero
//! (duplicate-heavy inputs) or the wheel fails to land from accumulated
//! rounding, the first not-yet-chosen index is taken instead, keeping
//! seeded runs reproducible.
//!
//! ## Empty-cluster repair
//!
//! An iteration can leave a centroid with no members. Rather than drop
//! it, the largest cluster (first one on ties) is split in half by member
//! order and the second half donated to the empty one. The donation only
//! re-seeds the centroid for the next update; scoring always sees the
//! raw assignment, so indistinguishable points settle on fewer than `k`
//! clusters (a single one when every point coincides) instead of an
//! arbitrary split.
//!
//! ## Which iteration wins
//!
//! Lloyd's loop minimizes within-cluster variance, which is not the same
//! thing as silhouette. Every iteration's raw assignment is scored and
//! the best-scoring partition is returned, even when a later iteration
//! converged past it.
//!
//! ## References
//!
//! Lloyd (1982). "Least Squares Quantization in PCM." IEEE Trans. Inf.
//! Theory 28(2). Arthur & Vassilvitskii (2007). "k-means++: The
//! Advantages of Careful Seeding." SODA '07.

use std::collections::BTreeMap;

use rand::prelude::*;
use tracing::{debug, info};

use super::check_dimensions;
use super::silhouette::{cluster_coherence, silhouette_score};
use super::traits::ClusterEngine;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::result::{Algorithm, AlgorithmParams, ClusteringResult};

/// K-means clusterer.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Requested cluster count; clamped to the point count at run time.
    k: usize,
    max_iterations: usize,
    /// Centroid movement (under the configured metric) below which the
    /// loop is considered converged.
    tolerance: f32,
    metric: Metric,
    seed: Option<u64>,
}

impl Kmeans {
    /// Create a new K-means clusterer targeting `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: 100,
            tolerance: 1e-3,
            metric: Metric::default(),
            seed: None,
        }
    }

    /// Cap on Lloyd iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Convergence tolerance on centroid movement.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Distance metric for assignment and convergence.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Fix the RNG seed for reproducible seeding.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster `vectors` and return the best partition found.
    ///
    /// Empty input yields an empty result, not an error; `k == 0` or a
    /// zero iteration cap is an [`Error::InvalidParameter`].
    pub fn run(&self, vectors: &[Vec<f32>]) -> Result<ClusteringResult> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iterations",
                message: "must be at least 1",
            });
        }

        let n = vectors.len();
        if n == 0 {
            return Ok(ClusteringResult::empty(
                Algorithm::KMeans,
                AlgorithmParams::KMeans {
                    k: self.k,
                    max_iterations: self.max_iterations,
                    iterations: 0,
                },
            ));
        }
        check_dimensions(vectors)?;

        let k = self.k.min(n);
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut centroids = self.seed_centroids(vectors, k, &mut rng);
        let mut best: Option<(BTreeMap<usize, Vec<usize>>, f32)> = None;
        let mut iterations = self.max_iterations;

        for iter in 0..self.max_iterations {
            let mut members = self.assign(vectors, &centroids);

            // Score the assignment as-is. Repair happens after the
            // snapshot: a donated half-split re-seeds a starved
            // centroid but is never itself a candidate partition.
            let clusters = to_cluster_map(&members);
            let score = silhouette_score(vectors, &clusters, self.metric);
            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((clusters, score));
            }

            repair_empty_clusters(&mut members);
            let shift = self.update_centroids(vectors, &members, &mut centroids);
            debug!(
                "k-means iteration {}: max centroid shift {:.6}",
                iter + 1,
                shift
            );

            if shift <= self.tolerance {
                iterations = iter + 1;
                info!("k-means converged after {} iterations", iterations);
                break;
            }
        }

        let (clusters, silhouette) = match best {
            Some(snapshot) => snapshot,
            None => (BTreeMap::new(), 0.0),
        };
        let coherence = clusters
            .iter()
            .map(|(&id, members)| (id, cluster_coherence(vectors, members)))
            .collect();

        Ok(ClusteringResult {
            clusters,
            coherence,
            silhouette,
            algorithm: Algorithm::KMeans,
            params: AlgorithmParams::KMeans {
                k,
                max_iterations: self.max_iterations,
                iterations,
            },
        })
    }

    /// k-means++ seeding. Returns `k` centroid positions cloned from
    /// input points.
    fn seed_centroids<R: Rng>(&self, vectors: &[Vec<f32>], k: usize, rng: &mut R) -> Vec<Vec<f32>> {
        let n = vectors.len();
        let mut chosen_flags = vec![false; n];
        let mut chosen: Vec<usize> = Vec::with_capacity(k);

        let first = rng.random_range(0..n);
        chosen_flags[first] = true;
        chosen.push(first);

        while chosen.len() < k {
            let weights: Vec<f32> = (0..n)
                .map(|i| {
                    if chosen_flags[i] {
                        return 0.0;
                    }
                    chosen
                        .iter()
                        .map(|&c| {
                            let d = self.metric.distance(&vectors[i], &vectors[c]);
                            d * d
                        })
                        .fold(f32::INFINITY, f32::min)
                })
                .collect();
            let total: f32 = weights.iter().sum();

            let next = if total <= f32::EPSILON {
                first_unchosen(&chosen_flags)
            } else {
                let threshold = rng.random::<f32>() * total;
                let mut cumulative = 0.0f32;
                let mut pick = None;
                for (i, w) in weights.iter().enumerate() {
                    cumulative += w;
                    if cumulative > threshold {
                        pick = Some(i);
                        break;
                    }
                }
                pick.unwrap_or_else(|| first_unchosen(&chosen_flags))
            };

            chosen_flags[next] = true;
            chosen.push(next);
        }

        chosen.iter().map(|&i| vectors[i].clone()).collect()
    }

    /// One assignment pass: member indices per centroid, ascending within
    /// each cluster. Ties go to the lower centroid index.
    fn assign(&self, vectors: &[Vec<f32>], centroids: &[Vec<f32>]) -> Vec<Vec<usize>> {
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); centroids.len()];
        for (i, point) in vectors.iter().enumerate() {
            let mut nearest = 0;
            let mut nearest_dist = f32::INFINITY;
            for (c, centroid) in centroids.iter().enumerate() {
                let d = self.metric.distance(point, centroid);
                if d < nearest_dist {
                    nearest_dist = d;
                    nearest = c;
                }
            }
            members[nearest].push(i);
        }
        members
    }

    /// Recompute each centroid as the mean of its members; returns the
    /// largest centroid movement under the configured metric. Centroids
    /// with no members keep their position.
    fn update_centroids(
        &self,
        vectors: &[Vec<f32>],
        members: &[Vec<usize>],
        centroids: &mut [Vec<f32>],
    ) -> f32 {
        let mut max_shift = 0.0f32;
        for (c, cluster_members) in members.iter().enumerate() {
            if cluster_members.is_empty() {
                continue;
            }
            let mut mean = vec![0.0f32; centroids[c].len()];
            for &i in cluster_members {
                for (m, x) in mean.iter_mut().zip(vectors[i].iter()) {
                    *m += x;
                }
            }
            let count = cluster_members.len() as f32;
            for m in mean.iter_mut() {
                *m /= count;
            }
            let shift = self.metric.distance(&centroids[c], &mean);
            max_shift = max_shift.max(shift);
            centroids[c] = mean;
        }
        max_shift
    }
}

impl ClusterEngine for Kmeans {
    fn algorithm(&self) -> Algorithm {
        Algorithm::KMeans
    }

    fn run(&self, vectors: &[Vec<f32>]) -> Result<ClusteringResult> {
        Kmeans::run(self, vectors)
    }
}

fn first_unchosen(chosen_flags: &[bool]) -> usize {
    chosen_flags.iter().position(|c| !c).unwrap_or(0)
}

/// Donate the second half (by member order) of the largest cluster to
/// each empty one. First largest wins ties. A largest cluster of fewer
/// than two members cannot be split, which ends the repair.
fn repair_empty_clusters(members: &mut [Vec<usize>]) {
    loop {
        let Some(empty) = members.iter().position(Vec::is_empty) else {
            return;
        };

        let mut largest = 0;
        let mut largest_len = 0;
        for (c, cluster_members) in members.iter().enumerate() {
            if cluster_members.len() > largest_len {
                largest_len = cluster_members.len();
                largest = c;
            }
        }
        if largest_len < 2 {
            return;
        }

        let donated = members[largest].split_off(largest_len / 2);
        members[empty] = donated;
    }
}

/// Non-empty member lists become clusters with sequential ids.
fn to_cluster_map(members: &[Vec<usize>]) -> BTreeMap<usize, Vec<usize>> {
    members
        .iter()
        .filter(|m| !m.is_empty())
        .enumerate()
        .map(|(id, m)| (id, m.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_groups() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
            vec![10.0, 10.1],
        ]
    }

    #[test]
    fn separates_two_obvious_groups() {
        let result = Kmeans::new(2)
            .with_metric(Metric::Euclidean)
            .with_seed(42)
            .run(&two_groups())
            .unwrap();

        assert_eq!(result.num_clusters(), 2);
        assert!(result.silhouette > 0.9);
        let first = result.cluster_of(0).unwrap();
        assert_eq!(result.cluster_of(1), Some(first));
        assert_eq!(result.cluster_of(2), Some(first));
        let second = result.cluster_of(3).unwrap();
        assert_ne!(first, second);
        assert_eq!(result.cluster_of(4), Some(second));
        assert_eq!(result.cluster_of(5), Some(second));
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = Kmeans::new(3).run(&[]).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.silhouette, 0.0);
    }

    #[test]
    fn zero_k_is_rejected() {
        assert!(matches!(
            Kmeans::new(0).run(&two_groups()),
            Err(Error::InvalidParameter { name: "k", .. })
        ));
    }

    #[test]
    fn zero_iteration_cap_is_rejected() {
        assert!(Kmeans::new(2).with_max_iterations(0).run(&two_groups()).is_err());
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let vectors = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            Kmeans::new(1).run(&vectors),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn k_is_clamped_to_point_count() {
        let vectors = vec![vec![0.0], vec![5.0], vec![10.0]];
        let result = Kmeans::new(10)
            .with_metric(Metric::Euclidean)
            .with_seed(1)
            .run(&vectors)
            .unwrap();
        assert!(result.num_clusters() <= 3);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn every_index_appears_exactly_once() {
        let result = Kmeans::new(3)
            .with_metric(Metric::Euclidean)
            .with_seed(9)
            .run(&two_groups())
            .unwrap();
        let mut covered: Vec<usize> = result.clusters.values().flatten().copied().collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn seeded_runs_are_deterministic() {
        let vectors = two_groups();
        let a = Kmeans::new(2).with_seed(7).run(&vectors).unwrap();
        let b = Kmeans::new(2).with_seed(7).run(&vectors).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_cluster_scores_zero_silhouette() {
        let result = Kmeans::new(1)
            .with_metric(Metric::Euclidean)
            .with_seed(3)
            .run(&two_groups())
            .unwrap();
        assert_eq!(result.num_clusters(), 1);
        assert_eq!(result.silhouette, 0.0);
    }

    #[test]
    fn identical_points_collapse_to_one_cluster() {
        let vectors = vec![vec![1.0, 1.0]; 6];
        let result = Kmeans::new(2)
            .with_metric(Metric::Euclidean)
            .with_seed(42)
            .run(&vectors)
            .unwrap();
        assert_eq!(result.num_clusters(), 1);
        assert_eq!(result.len(), 6);
        assert_eq!(result.silhouette, 0.0);
    }

    #[test]
    fn repair_splits_largest_cluster() {
        let mut members = vec![vec![0, 1, 2, 3], Vec::new()];
        repair_empty_clusters(&mut members);
        assert_eq!(members[0], vec![0, 1]);
        assert_eq!(members[1], vec![2, 3]);
    }

    #[test]
    fn repair_gives_up_on_singletons() {
        let mut members = vec![vec![0], Vec::new()];
        repair_empty_clusters(&mut members);
        assert_eq!(members[0], vec![0]);
        assert!(members[1].is_empty());
    }

    #[test]
    fn params_record_effective_k_and_iterations() {
        let result = Kmeans::new(8)
            .with_metric(Metric::Euclidean)
            .with_seed(5)
            .run(&two_groups())
            .unwrap();
        match result.params {
            AlgorithmParams::KMeans { k, iterations, .. } => {
                assert_eq!(k, 6);
                assert!(iterations >= 1);
            }
            _ => panic!("expected k-means params"),
        }
    }
}
