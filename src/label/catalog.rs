//! Built-in label category catalogue.
//!
//! Registration order matters: when two categories score the same, the
//! earlier entry wins, so the table is a slice rather than a map. All
//! keywords are lowercase; scoring lowercases the text it matches
//! against.

/// Label categories in registration order: `(display name, keywords)`.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Sports",
        &[
            "football", "soccer", "basketball", "league", "score", "team", "player", "match",
            "game", "season", "championship", "tournament",
        ],
    ),
    (
        "Machine Learning & AI",
        &[
            "learning", "neural", "model", "training", "intelligence", "algorithm", "prediction",
            "classifier",
        ],
    ),
    (
        "Web Development",
        &[
            "web", "html", "css", "javascript", "frontend", "backend", "server", "browser", "api",
        ],
    ),
    (
        "Database & Storage",
        &[
            "database", "sql", "query", "storage", "index", "table", "schema", "cache",
        ],
    ),
    (
        "Data Science",
        &[
            "data", "statistics", "analysis", "visualization", "dataset", "regression",
            "correlation",
        ],
    ),
    (
        "Cooking & Food",
        &[
            "recipe", "cooking", "ingredient", "bake", "flavor", "cuisine", "dish", "kitchen",
            "meal",
        ],
    ),
    (
        "Business & Finance",
        &[
            "market", "company", "revenue", "profit", "investment", "stock", "trading", "startup",
            "bank",
        ],
    ),
    (
        "Health & Medicine",
        &[
            "health", "medical", "doctor", "patient", "treatment", "disease", "therapy",
            "clinical",
        ],
    ),
    (
        "Science & Research",
        &[
            "research", "experiment", "theory", "physics", "chemistry", "biology", "laboratory",
            "hypothesis",
        ],
    ),
    (
        "Travel & Leisure",
        &[
            "travel", "flight", "hotel", "destination", "vacation", "tourist", "journey",
        ],
    ),
    (
        "Music & Entertainment",
        &[
            "music", "album", "concert", "movie", "film", "artist", "band", "show",
        ],
    ),
    (
        "Politics & Law",
        &[
            "government", "election", "policy", "vote", "law", "court", "legislation", "campaign",
        ],
    ),
    (
        "Education & Learning",
        &[
            "school", "student", "teacher", "course", "university", "exam", "curriculum",
        ],
    ),
    (
        "Environment & Climate",
        &[
            "climate", "carbon", "renewable", "forest", "ocean", "wildlife", "pollution",
        ],
    ),
];
