//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN grows clusters out of dense neighborhoods instead of
//! partitioning around centroids, so unlike k-means it discovers the
//! cluster count itself and follows cluster shapes that are not convex.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: neighborhood radius under the configured metric.
//! - **MinPts**: neighborhood size at which a point counts as *core*.
//!   Neighborhoods here include the point itself, so `min_pts = 2`
//!   means "me plus one other".
//! - A core point opens or extends a cluster; a point inside a core
//!   point's neighborhood joins that cluster as a *border* point; what
//!   remains is *noise*.
//!
//! ## Expansion
//!
//! Each cluster grows breadth-first: the opening core point's
//! neighborhood seeds a FIFO queue (deduplicated on append), every
//! dequeued point joins the cluster unless some earlier cluster already
//! claimed it, and core points among them extend the frontier. A point
//! shelved as noise earlier is still eligible to join as border later.
//!
//! ## Noise folding
//!
//! Downstream consumers want a partition, not labels-plus-outliers, so
//! leftover noise is folded in: up to three noise points each become a
//! singleton cluster (an outlier is its own story), more than three are
//! grouped into a single catch-all cluster. No index is ever dropped.
//!
//! ## Complexity
//!
//! O(n²) time with the naive neighborhood scan used here, O(n) space.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering
//! Clusters in Large Spatial Databases with Noise." KDD-96.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, info};

use super::check_dimensions;
use super::silhouette::{cluster_coherence, silhouette_score};
use super::traits::ClusterEngine;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::result::{Algorithm, AlgorithmParams, ClusteringResult};

/// Noise counts up to this size become one singleton cluster per point;
/// anything larger folds into a single grouped cluster.
const MAX_NOISE_SINGLETONS: usize = 3;

/// DBSCAN clusterer.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Neighborhood radius.
    epsilon: f32,
    /// Neighborhood size (self included) for core classification.
    min_pts: usize,
    metric: Metric,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - neighborhood radius; points at exactly `epsilon`
    ///   are neighbors.
    /// * `min_pts` - neighbors (self included) required for a core point.
    pub fn new(epsilon: f32, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            metric: Metric::default(),
        }
    }

    /// Distance metric for neighborhood queries.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Cluster `vectors`.
    ///
    /// Empty input yields an empty result, not an error; a non-positive
    /// `epsilon` or zero `min_pts` is an [`Error::InvalidParameter`].
    pub fn run(&self, vectors: &[Vec<f32>]) -> Result<ClusteringResult> {
        if self.epsilon <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive",
            });
        }
        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        let n = vectors.len();
        if n == 0 {
            return Ok(ClusteringResult::empty(
                Algorithm::Dbscan,
                AlgorithmParams::Dbscan {
                    epsilon: self.epsilon,
                    min_pts: self.min_pts,
                    noise_points: 0,
                },
            ));
        }
        check_dimensions(vectors)?;

        let mut assignment: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut next_cluster = 0usize;

        for i in 0..n {
            if visited[i] {
                continue;
            }
            visited[i] = true;

            let neighbors = self.region_query(vectors, i);
            if neighbors.len() < self.min_pts {
                // Noise for now; a later expansion may still claim it.
                continue;
            }

            debug!("dbscan opening cluster {} from point {}", next_cluster, i);
            self.expand_cluster(vectors, &neighbors, &mut assignment, &mut visited, next_cluster);
            next_cluster += 1;
        }

        let noise: Vec<usize> = (0..n).filter(|&i| assignment[i].is_none()).collect();
        let noise_points = noise.len();
        if noise_points <= MAX_NOISE_SINGLETONS {
            for &i in &noise {
                assignment[i] = Some(next_cluster);
                next_cluster += 1;
            }
        } else {
            for &i in &noise {
                assignment[i] = Some(next_cluster);
            }
        }

        let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, assigned) in assignment.iter().enumerate() {
            if let Some(cluster) = assigned {
                clusters.entry(*cluster).or_default().push(i);
            }
        }

        let coherence = clusters
            .iter()
            .map(|(&id, members)| (id, cluster_coherence(vectors, members)))
            .collect();
        let silhouette = silhouette_score(vectors, &clusters, self.metric);
        info!(
            "dbscan produced {} clusters ({} noise points folded)",
            clusters.len(),
            noise_points
        );

        Ok(ClusteringResult {
            clusters,
            coherence,
            silhouette,
            algorithm: Algorithm::Dbscan,
            params: AlgorithmParams::Dbscan {
                epsilon: self.epsilon,
                min_pts: self.min_pts,
                noise_points,
            },
        })
    }

    /// Every index within `epsilon` of `point_idx`, the point itself
    /// included.
    fn region_query(&self, vectors: &[Vec<f32>], point_idx: usize) -> Vec<usize> {
        let point = &vectors[point_idx];
        vectors
            .iter()
            .enumerate()
            .filter(|(_, other)| self.metric.distance(point, other) <= self.epsilon)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Breadth-first growth of one cluster from an opening core point's
    /// neighborhood.
    fn expand_cluster(
        &self,
        vectors: &[Vec<f32>],
        seeds: &[usize],
        assignment: &mut [Option<usize>],
        visited: &mut [bool],
        cluster_id: usize,
    ) {
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(seeds.len());
        let mut queued = vec![false; vectors.len()];
        for &seed in seeds {
            if !queued[seed] {
                queued[seed] = true;
                queue.push_back(seed);
            }
        }

        while let Some(point) = queue.pop_front() {
            if assignment[point].is_none() {
                assignment[point] = Some(cluster_id);
            }

            if visited[point] {
                continue;
            }
            visited[point] = true;

            let neighbors = self.region_query(vectors, point);
            if neighbors.len() >= self.min_pts {
                for neighbor in neighbors {
                    if !queued[neighbor] {
                        queued[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 2)
    }
}

impl ClusterEngine for Dbscan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dbscan
    }

    fn run(&self, vectors: &[Vec<f32>]) -> Result<ClusteringResult> {
        Dbscan::run(self, vectors)
    }
}
