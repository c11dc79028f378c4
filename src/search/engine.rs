use crate::error::Result;
use crate::provider::Topic;
use crate::scoring::aggregate;
use crate::scoring::relevance::RelevanceScorer;
use crate::scoring::Score;

use super::search_result::{RankedResult, RankedResults};

/// Sort key for ranked output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    Ascending,
    #[default]
    Descending,
}

pub struct SearchEngine {
    scorer: RelevanceScorer,
}

impl SearchEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scorer: RelevanceScorer::new()?,
        })
    }

    /// Scores every topic against `query`, sorts by the chosen key, and
    /// computes the aggregate relevance for the low-confidence warning.
    ///
    /// The sort is stable, so equal scores keep their insertion order.
    pub fn rank(
        &self,
        query: &str,
        topics: Vec<Topic>,
        sort_key: SortKey,
        order: Order,
    ) -> RankedResults {
        let mut results: Vec<RankedResult> = topics
            .into_iter()
            .map(|topic| {
                let relevance = self.scorer.score(query, &topic.title, &topic.brief);
                RankedResult::new(topic, relevance)
            })
            .collect();

        let scores: Vec<Score> = results.iter().map(|result| result.relevance).collect();
        let average_relevance = aggregate::mean(&scores);

        results.sort_by(|a, b| {
            let ordering = match sort_key {
                SortKey::Relevance => a.relevance.cmp(&b.relevance),
                SortKey::Impact => a.topic.impact_score.cmp(&b.topic.impact_score),
            };
            match order {
                Order::Ascending => ordering,
                Order::Descending => ordering.reverse(),
            }
        });

        RankedResults {
            query: query.to_string(),
            results,
            average_relevance,
            meets_threshold: aggregate::meets_accuracy_threshold(average_relevance),
        }
    }
}
