use serde::Serialize;

use crate::provider::Topic;
use crate::scoring::Score;

/// A topic with its transient relevance score attached for display/sorting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    #[serde(flatten)]
    pub topic: Topic,
    pub relevance: Score,
}

impl RankedResult {
    pub const fn new(topic: Topic, relevance: Score) -> Self {
        Self { topic, relevance }
    }
}

/// Ranked output for one query, with the aggregate relevance the
/// low-confidence warning is driven by.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResults {
    pub query: String,
    pub results: Vec<RankedResult>,
    pub average_relevance: Score,
    pub meets_threshold: bool,
}
