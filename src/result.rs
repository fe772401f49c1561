//! Result types produced by the clustering engines.
//!
//! Clusters are keyed in a [`BTreeMap`] so iteration order is defined and
//! stable: rendering, labeling, and tests all see clusters in ascending id
//! order without sorting first. Every type serializes with serde so results
//! can cross a process or cache boundary as JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which engine produced a [`ClusteringResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    KMeans,
    Dbscan,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::KMeans => write!(f, "kmeans"),
            Algorithm::Dbscan => write!(f, "dbscan"),
        }
    }
}

/// The effective parameters an engine ran with, echoed back in the result
/// so downstream consumers can display or log how a clustering was made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum AlgorithmParams {
    KMeans {
        k: usize,
        max_iterations: usize,
        /// Iterations actually run before convergence or the cap.
        iterations: usize,
    },
    Dbscan {
        epsilon: f32,
        min_pts: usize,
        /// Points that were noise before folding into clusters.
        noise_points: usize,
    },
}

/// Output of a clustering run.
///
/// `clusters` maps cluster id to the member document indices, in insertion
/// order within each cluster. Every input index appears in exactly one
/// cluster; engines never drop points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// Cluster id to member indices into the input vector slice.
    pub clusters: BTreeMap<usize, Vec<usize>>,
    /// Per-cluster coherence (mean pairwise cosine similarity), same keys
    /// as `clusters`.
    pub coherence: BTreeMap<usize, f32>,
    /// Overall silhouette score in [-1, 1]; 0.0 when fewer than two
    /// clusters exist.
    pub silhouette: f32,
    pub algorithm: Algorithm,
    pub params: AlgorithmParams,
}

impl ClusteringResult {
    /// A well-formed result with no clusters, used for empty input.
    pub fn empty(algorithm: Algorithm, params: AlgorithmParams) -> Self {
        Self {
            clusters: BTreeMap::new(),
            coherence: BTreeMap::new(),
            silhouette: 0.0,
            algorithm,
            params,
        }
    }

    /// Number of clusters.
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Total points across all clusters.
    pub fn len(&self) -> usize {
        self.clusters.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Cluster id owning `index`, if any.
    pub fn cluster_of(&self, index: usize) -> Option<usize> {
        self.clusters
            .iter()
            .find(|(_, members)| members.contains(&index))
            .map(|(id, _)| *id)
    }
}

/// Human-facing description of one cluster, produced by the summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: usize,
    /// Label assigned by the labeler, unique across the result set.
    pub label: String,
    /// Member count.
    pub size: usize,
    pub coherence: f32,
    /// Most frequent terms in the cluster's documents, best first.
    pub top_terms: Vec<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ClusteringResult {
        let mut clusters = BTreeMap::new();
        clusters.insert(0, vec![0, 2]);
        clusters.insert(1, vec![1, 3, 4]);
        let mut coherence = BTreeMap::new();
        coherence.insert(0, 0.9);
        coherence.insert(1, 0.7);
        ClusteringResult {
            clusters,
            coherence,
            silhouette: 0.42,
            algorithm: Algorithm::KMeans,
            params: AlgorithmParams::KMeans {
                k: 2,
                max_iterations: 100,
                iterations: 7,
            },
        }
    }

    #[test]
    fn counts() {
        let result = sample_result();
        assert_eq!(result.num_clusters(), 2);
        assert_eq!(result.len(), 5);
        assert!(!result.is_empty());
    }

    #[test]
    fn empty_result_is_well_formed() {
        let result = ClusteringResult::empty(
            Algorithm::Dbscan,
            AlgorithmParams::Dbscan {
                epsilon: 0.5,
                min_pts: 2,
                noise_points: 0,
            },
        );
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.silhouette, 0.0);
    }

    #[test]
    fn cluster_lookup() {
        let result = sample_result();
        assert_eq!(result.cluster_of(2), Some(0));
        assert_eq!(result.cluster_of(4), Some(1));
        assert_eq!(result.cluster_of(99), None);
    }

    #[test]
    fn algorithm_display() {
        assert_eq!(Algorithm::KMeans.to_string(), "kmeans");
        assert_eq!(Algorithm::Dbscan.to_string(), "dbscan");
    }

    #[test]
    fn json_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: ClusteringResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
