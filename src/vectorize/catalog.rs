//! Built-in topic and concept catalogues.
//!
//! Catalogues are data, not control flow: the vectorizer walks whatever
//! tables it was built with, so swapping domains means swapping tables,
//! not editing match arms. Both built-ins stay under their 20-slot budget;
//! unused trailing slots vectorize as zero.

/// One topic category: a name and the keywords whose presence scores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl TopicCategory {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// One concept: a seed term (weighted double when matched) and its
/// related terms (weighted single).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub seed: String,
    pub related: Vec<String>,
}

impl Concept {
    pub fn new(seed: impl Into<String>, related: &[&str]) -> Self {
        Self {
            seed: seed.into(),
            related: related.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

const TOPIC_TABLE: &[(&str, &[&str])] = &[
    (
        "technology",
        &["software", "computer", "program", "code", "algorithm", "digital", "app", "device"],
    ),
    (
        "science",
        &["research", "experiment", "theory", "hypothesis", "laboratory", "physics", "chemistry", "biology"],
    ),
    (
        "sports",
        &["football", "soccer", "basketball", "league", "team", "player", "match", "score", "season", "championship"],
    ),
    (
        "business",
        &["market", "company", "revenue", "profit", "customer", "startup", "investment", "strategy"],
    ),
    (
        "health",
        &["health", "medical", "doctor", "patient", "disease", "treatment", "symptom", "hospital"],
    ),
    (
        "politics",
        &["government", "election", "policy", "senate", "vote", "campaign", "legislation", "parliament"],
    ),
    (
        "entertainment",
        &["movie", "film", "music", "album", "concert", "actor", "celebrity", "show"],
    ),
    (
        "food",
        &["recipe", "cooking", "ingredient", "bake", "flavor", "cuisine", "restaurant", "dish"],
    ),
    (
        "travel",
        &["travel", "flight", "hotel", "destination", "tourist", "journey", "vacation", "airport"],
    ),
    (
        "education",
        &["school", "student", "teacher", "course", "university", "curriculum", "exam", "classroom"],
    ),
    (
        "finance",
        &["bank", "loan", "currency", "stock", "trading", "portfolio", "inflation", "budget"],
    ),
    (
        "environment",
        &["climate", "carbon", "renewable", "wildlife", "forest", "ocean", "pollution", "sustainability"],
    ),
];

const CONCEPT_TABLE: &[(&str, &[&str])] = &[
    ("learning", &["training", "model", "neural", "intelligence"]),
    ("data", &["dataset", "database", "analytics", "statistics"]),
    ("network", &["server", "protocol", "internet", "bandwidth"]),
    ("security", &["encryption", "password", "vulnerability", "firewall"]),
    ("design", &["interface", "layout", "prototype", "usability"]),
    ("energy", &["solar", "power", "battery", "electricity"]),
    ("medicine", &["therapy", "clinical", "vaccine", "diagnosis"]),
    ("language", &["translation", "grammar", "vocabulary", "linguistics"]),
    ("economy", &["trade", "growth", "employment", "fiscal"]),
    ("space", &["satellite", "orbit", "planet", "astronomy"]),
    ("engine", &["performance", "optimization", "compiler", "runtime"]),
    ("game", &["level", "graphics", "multiplayer", "arcade"]),
];

/// The built-in topic catalogue, in registration order.
pub fn builtin_topics() -> Vec<TopicCategory> {
    TOPIC_TABLE
        .iter()
        .map(|(name, keywords)| TopicCategory::new(*name, keywords))
        .collect()
}

/// The built-in concept catalogue, in registration order.
pub fn builtin_concepts() -> Vec<Concept> {
    CONCEPT_TABLE
        .iter()
        .map(|(seed, related)| Concept::new(*seed, related))
        .collect()
}
