use crate::error::Result;
use crate::tokenizer::Tokenizer;

use super::{Score, MAX_SCORE};

/// Weight of exact title matches. Title hits are the strongest signal.
pub const TITLE_WEIGHT: f64 = 0.5;

/// Weight of exact abstract matches.
pub const ABSTRACT_WEIGHT: f64 = 0.3;

/// Weight of partial (substring) matches.
pub const PARTIAL_WEIGHT: f64 = 0.2;

/// Points for covering the query vocabulary, regardless of where the
/// matches land. Keeps scoring from being all-or-nothing.
pub const COVERAGE_POINTS: f64 = 50.0;

/// Credit a partial title match adds to the partial-match counter.
pub const PARTIAL_TITLE_CREDIT: f64 = 1.0;

/// Credit a partial abstract match adds to the partial-match counter.
pub const PARTIAL_ABSTRACT_CREDIT: f64 = 0.5;

/// How a single query token matched a document. A token falls into at most
/// one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    ExactTitle,
    ExactAbstract,
    PartialTitle,
    PartialAbstract,
}

/// Classifies a query token against the tokenized title and abstract. The
/// checks run in priority order and the first hit wins, so a token is never
/// double-counted.
fn classify(token: &str, title_tokens: &[String], abstract_tokens: &[String]) -> Option<MatchKind> {
    if title_tokens.iter().any(|t| t == token) {
        return Some(MatchKind::ExactTitle);
    }
    if abstract_tokens.iter().any(|t| t == token) {
        return Some(MatchKind::ExactAbstract);
    }
    if title_tokens
        .iter()
        .any(|t| t.contains(token) || token.contains(t.as_str()))
    {
        return Some(MatchKind::PartialTitle);
    }
    if abstract_tokens
        .iter()
        .any(|t| t.contains(token) || token.contains(t.as_str()))
    {
        return Some(MatchKind::PartialAbstract);
    }
    None
}

pub struct RelevanceScorer {
    tokenizer: Tokenizer,
}

impl RelevanceScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Computes a 0-100 lexical match score between `query` and a document's
    /// title and abstract. Queries whose tokens are all stop words or too
    /// short score 0, same as empty queries.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn score(&self, query: &str, title: &str, abstract_text: &str) -> Score {
        let query_tokens = self.tokenizer.tokenize(query);

        if query_tokens.is_empty() {
            return 0;
        }

        let title_tokens = self.tokenizer.tokenize(title);
        let abstract_tokens = self.tokenizer.tokenize(abstract_text);

        let mut matched_tokens = 0_usize;
        let mut title_matches = 0_usize;
        let mut abstract_matches = 0_usize;
        let mut partial_matches = 0.0_f64;

        for token in &query_tokens {
            match classify(token, &title_tokens, &abstract_tokens) {
                Some(MatchKind::ExactTitle) => title_matches += 1,
                Some(MatchKind::ExactAbstract) => abstract_matches += 1,
                Some(MatchKind::PartialTitle) => partial_matches += PARTIAL_TITLE_CREDIT,
                Some(MatchKind::PartialAbstract) => partial_matches += PARTIAL_ABSTRACT_CREDIT,
                None => continue,
            }
            matched_tokens += 1;
        }

        let query_len = query_tokens.len() as f64;
        let match_ratio = matched_tokens as f64 / query_len;

        let raw_score = match_ratio * COVERAGE_POINTS
            + (title_matches as f64 / query_len) * TITLE_WEIGHT * MAX_SCORE
            + (abstract_matches as f64 / query_len) * ABSTRACT_WEIGHT * MAX_SCORE
            + (partial_matches / query_len) * PARTIAL_WEIGHT * MAX_SCORE;

        raw_score.min(MAX_SCORE).round() as Score
    }
}
