//! Cluster labeling.
//!
//! Labels come from a fixed category catalogue scored against the
//! cluster's combined text and top terms. Measured term frequencies
//! weigh heavier than bare keyword sightings, and a top term that
//! overlaps a keyword is the strongest signal of all. Clusters no
//! category claims fall back to their own top terms.

mod catalog;

pub use catalog::CATEGORIES;

use std::collections::{HashMap, HashSet};

/// Label awarded per keyword found in the cluster text when the term
/// frequency map has no count for it.
const TEXT_MATCH_SCORE: usize = 2;
/// Multiplier on the measured frequency of a keyword found in the text.
const FREQUENCY_WEIGHT: usize = 3;
/// Flat score for a top term and a keyword containing one another.
const TOP_TERM_MATCH_SCORE: usize = 5;

/// Pick a label for one cluster.
///
/// `cluster_text` is the concatenated member text, `top_terms` the
/// ranked frequent terms, `term_freq` the measured counts behind them.
/// The best positively scoring catalogue category wins, earlier
/// registration winning ties. With no category match the label is up to
/// three capitalized top terms joined with " & ", or "Miscellaneous"
/// when there are no terms either.
pub fn label_cluster(
    cluster_text: &str,
    top_terms: &[String],
    term_freq: &HashMap<String, usize>,
) -> String {
    let text = cluster_text.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for (name, keywords) in CATEGORIES {
        let mut score = 0usize;
        for keyword in *keywords {
            if text.contains(keyword) {
                score += match term_freq.get(*keyword) {
                    Some(freq) => FREQUENCY_WEIGHT * freq,
                    None => TEXT_MATCH_SCORE,
                };
            }
            for term in top_terms {
                if term.contains(keyword) || keyword.contains(term.as_str()) {
                    score += TOP_TERM_MATCH_SCORE;
                }
            }
        }
        if score > 0 && best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((name, score));
        }
    }

    match best {
        Some((name, _)) => name.to_string(),
        None => fallback_label(top_terms),
    }
}

/// Make repeated labels unique by appending " 2", " 3", ... in order of
/// appearance. The first occurrence keeps its bare label; a counter that
/// lands on a label already in use keeps climbing until it finds a free
/// one.
pub fn dedup_labels(labels: &mut [String]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::with_capacity(labels.len());
    for label in labels.iter_mut() {
        let base = label.clone();
        let count = counts.entry(base.clone()).or_insert(0);
        *count += 1;
        let mut candidate = if *count == 1 {
            base.clone()
        } else {
            format!("{} {}", base, count)
        };
        while !taken.insert(candidate.clone()) {
            *count += 1;
            candidate = format!("{} {}", base, count);
        }
        *label = candidate;
    }
}

fn fallback_label(top_terms: &[String]) -> String {
    if top_terms.is_empty() {
        return "Miscellaneous".to_string();
    }
    top_terms
        .iter()
        .take(3)
        .map(|term| capitalize(term))
        .collect::<Vec<_>>()
        .join(" & ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
