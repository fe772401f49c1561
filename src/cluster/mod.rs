//! Clustering engines, quality scoring, and algorithm selection.
//!
//! Two complementary engines cluster the document vectors:
//!
//! - [`Kmeans`] partitions into a requested number of roughly spherical
//!   clusters. Fast and predictable, but `k` must come from somewhere
//!   and odd-shaped groups suffer.
//! - [`Dbscan`] grows clusters out of dense neighborhoods, discovering
//!   the cluster count itself and tolerating outliers, at the price of
//!   an epsilon that is awkward to pick by hand.
//!
//! Neither wins universally, so [`AutoSelect`] derives parameters for
//! both from the data, runs both, and keeps whichever partition scores
//! the better [silhouette](silhouette_score).
//!
//! ## Usage
//!
//! ```rust
//! use corral::cluster::{AutoSelect, Dbscan, Kmeans};
//! use corral::Metric;
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! // Partition into two clusters with k-means.
//! let result = Kmeans::new(2)
//!     .with_metric(Metric::Euclidean)
//!     .with_seed(42)
//!     .run(&data)
//!     .unwrap();
//! assert_eq!(result.num_clusters(), 2);
//! assert_eq!(result.cluster_of(0), result.cluster_of(1));
//!
//! // Density clustering; the cluster count falls out of the data.
//! let result = Dbscan::new(0.5, 2)
//!     .with_metric(Metric::Euclidean)
//!     .run(&data)
//!     .unwrap();
//! assert_eq!(result.len(), data.len());
//!
//! // Or let the selector try both and keep the better-scoring run.
//! let result = AutoSelect::new()
//!     .with_metric(Metric::Euclidean)
//!     .with_seed(42)
//!     .run(&data)
//!     .unwrap();
//! assert!(result.silhouette > 0.0);
//! ```

mod dbscan;
mod kmeans;
mod select;
mod silhouette;
mod traits;

pub use dbscan::Dbscan;
pub use kmeans::Kmeans;
pub use select::{derive_epsilon, derive_k, derive_min_pts, AutoSelect};
pub use silhouette::{cluster_coherence, silhouette_score};
pub use traits::ClusterEngine;

use crate::error::{Error, Result};

/// Every vector must share the first vector's dimension.
pub(crate) fn check_dimensions(vectors: &[Vec<f32>]) -> Result<()> {
    let Some(first) = vectors.first() else {
        return Ok(());
    };
    let expected = first.len();
    for vector in vectors.iter().skip(1) {
        if vector.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: vector.len(),
            });
        }
    }
    Ok(())
}
