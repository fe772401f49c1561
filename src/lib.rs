//! Document clustering from plain text.
//!
//! `corral` herds text documents into topical clusters without any
//! trained model: a lightweight regex-and-statistics vectorizer embeds
//! each document into a fixed feature space, two clustering engines
//! (k-means and DBSCAN) partition the vectors, a silhouette-based
//! selector keeps the better partition, and a catalogue-driven labeler
//! names what came out.
//!
//! The one-call entry point is [`cluster_documents`]:
//!
//! ```rust
//! let docs = [
//!     "The football team won the league match with a late score.",
//!     "A soccer championship season for the players.",
//!     "Bake the dish slowly and balance the flavor.",
//!     "This recipe needs one more ingredient.",
//! ];
//!
//! let clustering = corral::cluster_documents(&docs, Some(42)).unwrap();
//! assert_eq!(clustering.result.len(), docs.len());
//! assert!(clustering.result.num_clusters() >= 1);
//! ```
//!
//! Every stage is public for callers that want the pieces: [`vectorize`]
//! for the embedding, [`cluster`] for the engines and the selector,
//! [`summary`] and [`label`] for the reporting layer.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod distance;
pub mod error;
pub mod label;
pub mod pipeline;
pub mod result;
pub mod summary;
pub mod vectorize;

pub use cluster::{AutoSelect, ClusterEngine, Dbscan, Kmeans};
pub use distance::Metric;
pub use error::{Error, Result};
pub use pipeline::{cluster_documents, DocumentClustering};
pub use result::{Algorithm, AlgorithmParams, ClusterSummary, ClusteringResult};
pub use vectorize::Vectorizer;
