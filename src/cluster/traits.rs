use crate::error::Result;
use crate::result::{Algorithm, ClusteringResult};

/// Common interface for the clustering engines.
///
/// Both engines take one vector per document and return a full
/// [`ClusteringResult`] covering every input index. The algorithm
/// selector drives either engine through this seam.
pub trait ClusterEngine {
    /// Which algorithm this engine implements.
    fn algorithm(&self) -> Algorithm;

    /// Cluster the vectors. Empty input is a valid degenerate case and
    /// yields an empty result rather than an error.
    fn run(&self, vectors: &[Vec<f32>]) -> Result<ClusteringResult>;
}
