//! Lightweight document vectorization.
//!
//! Documents are embedded into a fixed 50-dimensional space without any
//! trained model: 10 surface-statistics features, 20 topic-catalogue
//! slots, and 20 concept-catalogue slots, L2-normalized at the end. The
//! embedding is crude next to a learned one, but it is deterministic,
//! dependency-free at runtime, and separates topically distinct text well
//! enough for the clustering engines downstream.

mod catalog;

pub use catalog::{builtin_concepts, builtin_topics, Concept, TopicCategory};

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Surface-statistics features at the front of every vector.
pub const STATS_SLOTS: usize = 10;
/// Topic-catalogue slots following the stats block.
pub const TOPIC_SLOTS: usize = 20;
/// Concept-catalogue slots at the tail.
pub const CONCEPT_SLOTS: usize = 20;
/// Total embedding dimension.
pub const DIM: usize = STATS_SLOTS + TOPIC_SLOTS + CONCEPT_SLOTS;

const COMMON_SUFFIXES: &[&str] = &["ing", "tion", "ment", "ness", "able", "ity"];

struct CompiledTopic {
    pattern: Option<Regex>,
}

impl CompiledTopic {
    fn compile(topic: &TopicCategory) -> Result<Self> {
        Ok(Self {
            pattern: keyword_pattern(&topic.keywords)?,
        })
    }

    /// `min(1, matches / 5)` over all keyword occurrences.
    fn score(&self, text: &str) -> f32 {
        let matches = match &self.pattern {
            Some(pattern) => pattern.find_iter(text).count(),
            None => 0,
        };
        (matches as f32 / 5.0).min(1.0)
    }
}

struct CompiledConcept {
    seed: Regex,
    related: Option<Regex>,
}

impl CompiledConcept {
    fn compile(concept: &Concept) -> Result<Self> {
        let seed = keyword_pattern(std::slice::from_ref(&concept.seed))?
            .ok_or(Error::InvalidParameter {
                name: "concepts",
                message: "concept seed term is empty",
            })?;
        Ok(Self {
            seed,
            related: keyword_pattern(&concept.related)?,
        })
    }

    /// `min(1, (2 * seed + related) / 5)`; the seed term counts double.
    fn score(&self, text: &str) -> f32 {
        let seed = self.seed.find_iter(text).count();
        let related = self
            .related
            .as_ref()
            .map_or(0, |pattern| pattern.find_iter(text).count());
        ((2 * seed + related) as f32 / 5.0).min(1.0)
    }
}

/// Case-insensitive whole-word alternation over `words`; `None` when the
/// list is empty. Keywords are escaped, so user catalogues cannot inject
/// pattern syntax.
fn keyword_pattern(words: &[String]) -> Result<Option<Regex>> {
    let alternation: Vec<String> = words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| regex::escape(w))
        .collect();
    if alternation.is_empty() {
        return Ok(None);
    }
    let pattern = format!(r"(?i)\b(?:{})\b", alternation.join("|"));
    let compiled = Regex::new(&pattern).map_err(|_| Error::InvalidParameter {
        name: "catalog",
        message: "keyword pattern failed to compile",
    })?;
    Ok(Some(compiled))
}

/// Embeds documents into the fixed [`DIM`]-dimensional feature space.
pub struct Vectorizer {
    topics: Vec<CompiledTopic>,
    concepts: Vec<CompiledConcept>,
}

impl Vectorizer {
    /// Vectorizer over the built-in catalogues.
    pub fn new() -> Result<Self> {
        Self::with_catalogs(builtin_topics(), builtin_concepts())
    }

    /// Vectorizer over caller-supplied catalogues. Fails if either
    /// catalogue exceeds its slot budget ([`TOPIC_SLOTS`] / [`CONCEPT_SLOTS`]).
    pub fn with_catalogs(topics: Vec<TopicCategory>, concepts: Vec<Concept>) -> Result<Self> {
        if topics.len() > TOPIC_SLOTS {
            return Err(Error::InvalidParameter {
                name: "topics",
                message: "topic catalogue exceeds its 20 slots",
            });
        }
        if concepts.len() > CONCEPT_SLOTS {
            return Err(Error::InvalidParameter {
                name: "concepts",
                message: "concept catalogue exceeds its 20 slots",
            });
        }

        let topics = topics
            .iter()
            .map(CompiledTopic::compile)
            .collect::<Result<Vec<_>>>()?;
        let concepts = concepts
            .iter()
            .map(CompiledConcept::compile)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "compiled vectorizer catalogues: {} topics, {} concepts",
            topics.len(),
            concepts.len()
        );
        Ok(Self { topics, concepts })
    }

    /// One [`DIM`]-dimensional vector per document, in input order.
    pub fn vectorize<S: AsRef<str>>(&self, documents: &[S]) -> Vec<Vec<f32>> {
        let vectors: Vec<Vec<f32>> = documents
            .iter()
            .map(|doc| self.embed(doc.as_ref()))
            .collect();
        debug!("vectorized {} documents into {}-dim space", vectors.len(), DIM);
        vectors
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = Vec::with_capacity(DIM);
        vector.extend_from_slice(&stats_features(text));
        for slot in 0..TOPIC_SLOTS {
            vector.push(match self.topics.get(slot) {
                Some(topic) => topic.score(text),
                None => 0.0,
            });
        }
        for slot in 0..CONCEPT_SLOTS {
            vector.push(match self.concepts.get(slot) {
                Some(concept) => concept.score(text),
                None => 0.0,
            });
        }
        l2_normalize(&mut vector);
        vector
    }
}

/// Scales `v` to unit L2 length in place. Zero vectors are left alone;
/// already-unit vectors are unchanged up to rounding.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// The 10 surface statistics, each clipped to [0, 1]. Empty text scores
/// zero everywhere rather than dividing by zero.
fn stats_features(text: &str) -> [f32; STATS_SLOTS] {
    let total_chars = text.chars().count();
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let log_length = ((total_chars as f32) + 1.0).ln() / 10.0;
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let lines = text.lines().count();
    let digits = text.chars().filter(char::is_ascii_digit).count();
    let capitalized = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    let long_words = words.iter().filter(|w| w.chars().count() > 6).count();

    let punctuation = text.chars().filter(char::is_ascii_punctuation).count();
    let punctuation_density = if total_chars == 0 {
        0.0
    } else {
        punctuation as f32 / total_chars as f32
    };

    let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let richness = if word_count == 0 {
        0.0
    } else {
        unique.len() as f32 / word_count as f32
    };

    let suffixed = words.iter().filter(|w| has_common_suffix(w)).count();
    let suffix_ratio = if word_count == 0 {
        0.0
    } else {
        suffixed as f32 / word_count as f32
    };

    [
        log_length.min(1.0),
        (word_count as f32 / 500.0).min(1.0),
        (sentences as f32 / 50.0).min(1.0),
        (lines as f32 / 100.0).min(1.0),
        (digits as f32 / 50.0).min(1.0),
        (capitalized as f32 / 50.0).min(1.0),
        (long_words as f32 / 100.0).min(1.0),
        punctuation_density.min(1.0),
        richness.min(1.0),
        suffix_ratio.min(1.0),
    ]
}

fn has_common_suffix(word: &str) -> bool {
    let stem = word
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    COMMON_SUFFIXES
        .iter()
        .any(|suffix| stem.len() > suffix.len() && stem.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::cosine_similarity;
    use approx::assert_relative_eq;

    #[test]
    fn every_vector_has_fixed_dimension() {
        let vectorizer = Vectorizer::new().unwrap();
        let docs = ["a short note", "", "Numbers 123 and punctuation!?"];
        for v in vectorizer.vectorize(&docs) {
            assert_eq!(v.len(), DIM);
        }
    }

    #[test]
    fn empty_document_embeds_to_zero() {
        let vectorizer = Vectorizer::new().unwrap();
        let v = &vectorizer.vectorize(&[""])[0];
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn nonempty_vector_is_unit_length() {
        let vectorizer = Vectorizer::new().unwrap();
        let v = &vectorizer.vectorize(&["The team won the football league."])[0];
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert_relative_eq!(norm, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        let once = v.clone();
        l2_normalize(&mut v);
        for (a, b) in v.iter().zip(once.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }
    }

    #[test]
    fn normalize_leaves_zero_vector_alone() {
        let mut v = vec![0.0, 0.0, 0.0];
        l2_normalize(&mut v);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn sports_text_lights_up_sports_slot() {
        let vectorizer = Vectorizer::new().unwrap();
        let sports = &vectorizer.vectorize(&["The football team won the league match."])[0];
        let cooking = &vectorizer.vectorize(&["Bake the dish with every ingredient."])[0];
        // "sports" is the third registered topic.
        let slot = STATS_SLOTS + 2;
        assert!(sports[slot] > 0.0);
        assert_eq!(cooking[slot], 0.0);
    }

    #[test]
    fn topic_score_caps_at_one() {
        let topic = CompiledTopic::compile(&TopicCategory::new("t", &["goal"])).unwrap();
        assert_relative_eq!(topic.score("goal goal"), 0.4, epsilon = 1e-6);
        assert_relative_eq!(topic.score("goal goal goal goal goal goal"), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn concept_seed_counts_double() {
        let concept = CompiledConcept::compile(&Concept::new("data", &["dataset"])).unwrap();
        assert_relative_eq!(concept.score("data"), 0.4, epsilon = 1e-6);
        assert_relative_eq!(concept.score("dataset"), 0.2, epsilon = 1e-6);
        assert_relative_eq!(concept.score("data data dataset"), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn keyword_matches_whole_words_only() {
        let concept = CompiledConcept::compile(&Concept::new("data", &[])).unwrap();
        assert_eq!(concept.score("database databases"), 0.0);
    }

    #[test]
    fn keyword_matching_ignores_case() {
        let topic = CompiledTopic::compile(&TopicCategory::new("t", &["football"])).unwrap();
        assert_relative_eq!(topic.score("Football FOOTBALL football"), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn oversized_catalogue_is_rejected() {
        let too_many: Vec<TopicCategory> = (0..TOPIC_SLOTS + 1)
            .map(|i| TopicCategory::new(format!("t{i}"), &["word"]))
            .collect();
        assert!(Vectorizer::with_catalogs(too_many, vec![]).is_err());
    }

    #[test]
    fn similar_topics_embed_closer_than_different_ones() {
        let vectorizer = Vectorizer::new().unwrap();
        let docs = [
            "The football team scored late to win the league match.",
            "A championship season for the soccer team and its players.",
            "Bake the dish slowly and balance every flavor in the recipe.",
        ];
        let vectors = vectorizer.vectorize(&docs);
        let same = cosine_similarity(&vectors[0], &vectors[1]);
        let different = cosine_similarity(&vectors[0], &vectors[2]);
        assert!(same > different);
    }

    #[test]
    fn stats_guard_empty_text() {
        let stats = stats_features("");
        assert!(stats.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn stats_count_surface_features() {
        let stats = stats_features("Testing numbers 12345. Another sentence!");
        assert!(stats[0] > 0.0); // log length
        assert!(stats[2] > 0.0); // two sentences
        assert!(stats[4] > 0.0); // digits
        assert!(stats[5] > 0.0); // capitalized words
        assert!(stats[9] > 0.0); // "Testing" carries a common suffix
        assert!(stats.iter().all(|x| (0.0..=1.0).contains(x)));
    }
}
