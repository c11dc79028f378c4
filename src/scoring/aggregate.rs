use super::relevance::RelevanceScorer;
use super::Score;

/// Minimum acceptable average relevance before the caller should warn the
/// user that results may be off-topic.
pub const ACCURACY_THRESHOLD: Score = 80;

/// A candidate document to score a query against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub brief: String,
}

impl Document {
    pub const fn new(title: String, brief: String) -> Self {
        Self { title, brief }
    }
}

/// Rounded arithmetic mean of a set of scores. Empty input yields 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn mean(scores: &[Score]) -> Score {
    if scores.is_empty() {
        return 0;
    }

    let total: u32 = scores.iter().map(|&score| u32::from(score)).sum();
    (f64::from(total) / scores.len() as f64).round() as Score
}

/// Average relevance of `query` across `documents`. Returns 0 for an empty
/// document set; callers must not read that as an error.
pub fn average_relevance(scorer: &RelevanceScorer, query: &str, documents: &[Document]) -> Score {
    let scores: Vec<Score> = documents
        .iter()
        .map(|doc| scorer.score(query, &doc.title, &doc.brief))
        .collect();

    mean(&scores)
}

pub const fn meets_accuracy_threshold(score: Score) -> bool {
    score >= ACCURACY_THRESHOLD
}
