use chrono::Datelike;

use super::{Score, MAX_SCORE};

/// Assumed age for papers that carry no publication year.
pub const DEFAULT_AGE_YEARS: i32 = 5;

/// Citations-per-adjusted-year rate that saturates the scale.
pub const CITATIONS_PER_YEAR_CEILING: f64 = 100.0;

/// Normalizes raw citation/year metadata into a bounded 0-100 impact score,
/// independent of text relevance.
pub struct ImpactScorer {
    current_year: i32,
}

impl ImpactScorer {
    pub fn new() -> Self {
        Self {
            current_year: chrono::Utc::now().year(),
        }
    }

    /// Fixed reference year, for deterministic scoring in tests.
    pub const fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Citation-velocity score. The age factor is damped so papers up to two
    /// years old are not divided down, giving newer work a relative boost.
    /// Rates of [`CITATIONS_PER_YEAR_CEILING`] and above score 100.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score(&self, citation_count: u32, publication_year: Option<i32>) -> Score {
        let age = publication_year.map_or(DEFAULT_AGE_YEARS, |year| self.current_year - year + 1);

        let age_factor = (f64::from(age) / 2.0).max(1.0);
        let raw_score = f64::from(citation_count) / age_factor;

        let normalized = (raw_score / CITATIONS_PER_YEAR_CEILING * MAX_SCORE).min(MAX_SCORE);
        normalized.round() as Score
    }
}

impl Default for ImpactScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    #[test]
    fn zero_citations_score_zero() {
        let scorer = ImpactScorer::with_current_year(YEAR);
        assert_eq!(scorer.score(0, Some(2020)), 0);
        assert_eq!(scorer.score(0, None), 0);
    }

    #[test]
    fn current_year_paper_keeps_full_citation_rate() {
        // age = 1, age factor clamps to 1, 200 citations saturate the scale
        let scorer = ImpactScorer::with_current_year(YEAR);
        assert_eq!(scorer.score(200, Some(YEAR)), 100);
    }

    #[test]
    fn missing_year_uses_default_age() {
        // age 5 -> factor 2.5 -> 50 / 2.5 = 20
        let scorer = ImpactScorer::with_current_year(YEAR);
        assert_eq!(scorer.score(50, None), 20);
    }

    #[test]
    fn older_papers_are_divided_by_their_age() {
        // age 10 -> factor 5 -> 30 / 5 = 6
        let scorer = ImpactScorer::with_current_year(YEAR);
        assert_eq!(scorer.score(30, Some(YEAR - 9)), 6);
    }

    #[test]
    fn two_year_old_paper_is_not_damped() {
        // age 2 -> factor max(1, 1) = 1
        let scorer = ImpactScorer::with_current_year(YEAR);
        assert_eq!(scorer.score(40, Some(YEAR - 1)), 40);
    }

    #[test]
    fn score_is_bounded() {
        let scorer = ImpactScorer::with_current_year(YEAR);
        assert_eq!(scorer.score(u32::MAX, Some(YEAR)), 100);
        assert_eq!(scorer.score(1_000_000, None), 100);
    }

    #[test]
    fn future_year_scores_like_a_new_paper() {
        // non-positive age still clamps the factor to 1
        let scorer = ImpactScorer::with_current_year(YEAR);
        assert_eq!(scorer.score(10, Some(YEAR + 4)), 10);
    }
}
