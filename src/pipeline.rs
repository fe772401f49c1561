//! The front door: raw text in, labeled clusters out.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cluster::AutoSelect;
use crate::error::Result;
use crate::result::{ClusterSummary, ClusteringResult};
use crate::summary::summarize;
use crate::vectorize::Vectorizer;

/// A clustering run together with its human-facing summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentClustering {
    pub result: ClusteringResult,
    /// One summary per cluster, in cluster-id order, labels unique.
    pub summaries: Vec<ClusterSummary>,
}

/// Vectorize `texts`, cluster them with the algorithm selector, and
/// summarize the outcome.
///
/// `seed` pins k-means seeding for reproducible runs. Fewer than two
/// documents produce a degenerate result (empty, or one single-member
/// cluster) rather than an error.
pub fn cluster_documents<S: AsRef<str>>(
    texts: &[S],
    seed: Option<u64>,
) -> Result<DocumentClustering> {
    let vectorizer = Vectorizer::new()?;
    let vectors = vectorizer.vectorize(texts);

    let mut selector = AutoSelect::new();
    if let Some(seed) = seed {
        selector = selector.with_seed(seed);
    }
    let result = selector.run(&vectors)?;
    let summaries = summarize(&result, texts);

    info!(
        "clustered {} documents into {} clusters via {}",
        texts.len(),
        result.num_clusters(),
        result.algorithm
    );
    Ok(DocumentClustering { result, summaries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_valid_degenerate_case() {
        let clustering = cluster_documents::<&str>(&[], None).unwrap();
        assert!(clustering.result.is_empty());
        assert!(clustering.summaries.is_empty());
    }

    #[test]
    fn single_document_forms_a_single_cluster() {
        let clustering =
            cluster_documents(&["One lonely note about nothing much."], Some(42)).unwrap();
        assert_eq!(clustering.result.num_clusters(), 1);
        assert_eq!(clustering.result.len(), 1);
        assert_eq!(clustering.result.silhouette, 0.0);
        assert_eq!(clustering.summaries.len(), 1);
        assert_eq!(clustering.summaries[0].size, 1);
    }
}
