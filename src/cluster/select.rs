//! Data-driven algorithm selection.
//!
//! Rather than ask the caller to pick an engine and tune it, the
//! selector derives workable parameters from the input, runs both
//! engines, and keeps whichever partition scores the better silhouette.
//!
//! ## Parameter heuristics
//!
//! - `k = ceil(sqrt(n / 2))`, clamped to [2, 10]. The square-root rule
//!   of thumb tracks how topical variety grows with corpus size; the
//!   clamp keeps tiny and huge corpora out of silly territory.
//! - `epsilon = 1.5 × mean pairwise cosine distance` between the input
//!   vectors. Scaling the observed spread beats any fixed radius across
//!   corpora of different diversity.
//! - `min_pts = n / 10`, clamped to [2, 4].

use tracing::{debug, info};

use super::dbscan::Dbscan;
use super::kmeans::Kmeans;
use super::traits::ClusterEngine;
use crate::distance::{mean_pairwise_distance, Metric};
use crate::error::Result;
use crate::result::ClusteringResult;

/// Runs both engines with derived parameters and returns the
/// higher-silhouette result. K-means wins ties.
#[derive(Debug, Clone)]
pub struct AutoSelect {
    metric: Metric,
    seed: Option<u64>,
    max_iterations: usize,
}

impl AutoSelect {
    pub fn new() -> Self {
        Self {
            metric: Metric::default(),
            seed: None,
            max_iterations: 100,
        }
    }

    /// Distance metric both engines cluster under.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Fix the k-means seeding RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Iteration cap passed through to k-means.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Cluster `vectors` with both engines and keep the better run.
    pub fn run(&self, vectors: &[Vec<f32>]) -> Result<ClusteringResult> {
        let n = vectors.len();
        let k = derive_k(n);
        let epsilon = derive_epsilon(vectors);
        let min_pts = derive_min_pts(n);
        debug!(
            "selector derived k={}, epsilon={:.4}, min_pts={} for {} vectors",
            k, epsilon, min_pts, n
        );

        let mut kmeans = Kmeans::new(k)
            .with_metric(self.metric)
            .with_max_iterations(self.max_iterations);
        if let Some(seed) = self.seed {
            kmeans = kmeans.with_seed(seed);
        }
        let dbscan = Dbscan::new(epsilon, min_pts).with_metric(self.metric);

        let kmeans_run = run_engine(&kmeans, vectors)?;
        let dbscan_run = run_engine(&dbscan, vectors)?;

        let (winner, loser) = if dbscan_run.silhouette > kmeans_run.silhouette {
            (dbscan_run, kmeans_run)
        } else {
            (kmeans_run, dbscan_run)
        };
        info!(
            "selected {} over {} (silhouette {:.4} vs {:.4})",
            winner.algorithm, loser.algorithm, winner.silhouette, loser.silhouette
        );
        Ok(winner)
    }
}

impl Default for AutoSelect {
    fn default() -> Self {
        Self::new()
    }
}

fn run_engine(engine: &dyn ClusterEngine, vectors: &[Vec<f32>]) -> Result<ClusteringResult> {
    let result = engine.run(vectors)?;
    debug!(
        "{} scored silhouette {:.4} across {} clusters",
        engine.algorithm(),
        result.silhouette,
        result.num_clusters()
    );
    Ok(result)
}

/// `ceil(sqrt(n / 2))` clamped to [2, 10].
pub fn derive_k(n: usize) -> usize {
    ((n as f32 / 2.0).sqrt().ceil() as usize).clamp(2, 10)
}

/// 1.5 times the mean pairwise cosine distance, floored at
/// `f32::EPSILON` so identical-input corpora still derive a valid
/// radius. Fewer than two vectors derive from the 0.5 default mean.
pub fn derive_epsilon(vectors: &[Vec<f32>]) -> f32 {
    (mean_pairwise_distance(vectors, Metric::Cosine) * 1.5).max(f32::EPSILON)
}

/// `n / 10` clamped to [2, 4].
pub fn derive_min_pts(n: usize) -> usize {
    (n / 10).clamp(2, 4)
}
