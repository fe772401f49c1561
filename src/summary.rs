//! Cluster summaries: top terms, labels, and descriptions.
//!
//! The summarizer is deliberately dumb about language: terms are
//! lowercase alphabetic tokens of three letters or more with a stopword
//! list applied, ranked by raw count. Count ties break alphabetically so
//! a cluster always summarizes the same way.

use std::collections::HashMap;

use tracing::debug;

use crate::label::{dedup_labels, label_cluster};
use crate::result::{ClusterSummary, ClusteringResult};

/// Ranked terms kept per cluster.
const TOP_TERMS: usize = 10;

const STOPWORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "because", "been", "before", "between",
    "but", "can", "could", "did", "does", "each", "for", "from", "had", "has", "have", "her",
    "him", "his", "how", "into", "its", "just", "like", "more", "most", "not", "now", "only",
    "other", "our", "out", "over", "she", "should", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "very", "was", "well",
    "were", "what", "when", "where", "which", "who", "will", "with", "would", "you", "your",
];

/// Summarize every cluster in `result` against the member documents.
///
/// Summaries come back in cluster-id order with labels made unique
/// across the set. Member indices outside `documents` contribute no
/// text.
pub fn summarize<S: AsRef<str>>(result: &ClusteringResult, documents: &[S]) -> Vec<ClusterSummary> {
    struct Draft {
        id: usize,
        size: usize,
        top_terms: Vec<String>,
    }

    let mut drafts = Vec::with_capacity(result.num_clusters());
    let mut labels = Vec::with_capacity(result.num_clusters());

    for (&id, members) in &result.clusters {
        let text = members
            .iter()
            .filter_map(|&i| documents.get(i))
            .map(|doc| doc.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        let term_freq = term_frequencies(&text);
        let top_terms = top_terms(&term_freq, TOP_TERMS);

        labels.push(label_cluster(&text, &top_terms, &term_freq));
        drafts.push(Draft {
            id,
            size: members.len(),
            top_terms,
        });
    }

    dedup_labels(&mut labels);
    debug!("summarized {} clusters", drafts.len());

    drafts
        .into_iter()
        .zip(labels)
        .map(|(draft, label)| {
            let description = describe(draft.size, &draft.top_terms);
            ClusterSummary {
                id: draft.id,
                label,
                size: draft.size,
                coherence: result.coherence.get(&draft.id).copied().unwrap_or(0.0),
                top_terms: draft.top_terms,
                description,
            }
        })
        .collect()
}

/// Lowercase alphabetic tokens of length >= 3, stopwords removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|token| token.len() >= 3 && !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

fn term_frequencies(text: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for token in tokenize(text) {
        *frequencies.entry(token).or_insert(0) += 1;
    }
    frequencies
}

/// Terms ranked by count, alphabetically within a count.
fn top_terms(frequencies: &HashMap<String, usize>, limit: usize) -> Vec<String> {
    let mut entries: Vec<(&String, &usize)> = frequencies.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(limit)
        .map(|(term, _)| term.clone())
        .collect()
}

fn describe(size: usize, top_terms: &[String]) -> String {
    let noun = if size == 1 { "document" } else { "documents" };
    if top_terms.is_empty() {
        format!("{size} {noun}")
    } else {
        let preview: Vec<&str> = top_terms.iter().take(3).map(String::as_str).collect();
        format!("{size} {noun}; frequent terms: {}", preview.join(", "))
    }
}
