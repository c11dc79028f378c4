use std::{fs::File, io::BufReader, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::impact::ImpactScorer;
use crate::scoring::Score;

/// Title substituted when the provider returns none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Abstract substituted when the provider returns none.
pub const DEFAULT_BRIEF: &str = "No abstract available";

/// Raw paper-search response as the external provider serves it. Every field
/// is optional; the transform into [`Topic`] applies the defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResponse {
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Vec<RawPaper>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaper {
    pub paper_id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub authors: Vec<RawAuthor>,
    pub year: Option<i32>,
    pub citation_count: Option<i64>,
    pub url: Option<String>,
    pub external_ids: Option<ExternalIds>,
}

impl RawPaper {
    /// Citation count normalized at the boundary: absent or negative values
    /// are clamped to 0 so the scoring formulas stay total.
    pub fn citations(&self) -> u32 {
        u32::try_from(self.citation_count.unwrap_or(0).max(0)).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAuthor {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "ArXiv")]
    pub arxiv: Option<String>,
}

/// A ranked candidate topic, normalized from a raw provider paper.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub brief: String,
    pub impact_score: Score,
    pub url: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub citation_count: u32,
}

impl Topic {
    /// Normalizes a raw paper. `position` seeds the deterministic id
    /// fallback for papers with no identifier of their own.
    pub fn from_raw(raw: RawPaper, position: usize, impact: &ImpactScorer) -> Self {
        let citation_count = raw.citations();
        let impact_score = impact.score(citation_count, raw.year);

        let id = raw
            .paper_id
            .or_else(|| raw.external_ids.and_then(|ids| ids.arxiv))
            .unwrap_or_else(|| format!("result-{position}"));

        let url = raw
            .url
            .unwrap_or_else(|| format!("https://www.semanticscholar.org/paper/{id}"));

        Self {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            brief: raw
                .abstract_text
                .unwrap_or_else(|| DEFAULT_BRIEF.to_string()),
            impact_score,
            url,
            authors: raw
                .authors
                .into_iter()
                .filter_map(|author| author.name)
                .collect(),
            year: raw.year,
            citation_count,
            id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSearchResponse {
    pub topics: Vec<Topic>,
    pub total_count: u64,
    pub query: String,
}

/// Transforms a raw provider response into normalized, impact-scored topics.
pub fn transform_response(
    raw: RawSearchResponse,
    query: &str,
    impact: &ImpactScorer,
) -> TopicSearchResponse {
    let topics: Vec<Topic> = raw
        .data
        .into_iter()
        .enumerate()
        .map(|(position, paper)| Topic::from_raw(paper, position, impact))
        .collect();

    let total_count = raw.total.unwrap_or(topics.len() as u64);

    TopicSearchResponse {
        topics,
        total_count,
        query: query.to_string(),
    }
}

/// Source of raw search results. The live HTTP backend is out of scope; the
/// crate ships an offline implementation reading a captured response.
pub trait SearchProvider {
    fn search(&self, query: &str, limit: usize) -> Result<RawSearchResponse>;
}

pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SearchProvider for JsonFileProvider {
    fn search(&self, _query: &str, limit: usize) -> Result<RawSearchResponse> {
        let mut response: RawSearchResponse =
            serde_json::from_reader(BufReader::new(File::open(&self.path)?))?;
        response.data.truncate(limit);
        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 120,
        "data": [
            {
                "paperId": "abc123",
                "title": "Machine Learning Applications",
                "abstract": "This paper discusses various applications",
                "authors": [{"name": "A. Researcher"}, {"name": "B. Scholar"}],
                "year": 2024,
                "citationCount": 40,
                "url": "https://example.org/abc123"
            },
            {
                "externalIds": {"ArXiv": "2401.00001"},
                "citationCount": -3
            },
            {}
        ]
    }"#;

    #[test]
    fn deserializes_and_transforms_a_response() {
        let raw: RawSearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let impact = ImpactScorer::with_current_year(2026);
        let response = transform_response(raw, "machine learning", &impact);

        assert_eq!(response.total_count, 120);
        assert_eq!(response.query, "machine learning");
        assert_eq!(response.topics.len(), 3);

        let first = &response.topics[0];
        assert_eq!(first.id, "abc123");
        assert_eq!(first.title, "Machine Learning Applications");
        assert_eq!(first.authors, vec!["A. Researcher", "B. Scholar"]);
        assert_eq!(first.citation_count, 40);
        // age 3 -> factor 1.5 -> 40 / 1.5 = 26.67
        assert_eq!(first.impact_score, 27);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let raw: RawSearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let impact = ImpactScorer::with_current_year(2026);
        let response = transform_response(raw, "q", &impact);

        let second = &response.topics[1];
        assert_eq!(second.id, "2401.00001");
        assert_eq!(second.title, DEFAULT_TITLE);
        assert_eq!(second.brief, DEFAULT_BRIEF);
        assert_eq!(second.citation_count, 0, "negative counts clamp to 0");
        assert_eq!(second.impact_score, 0);

        let third = &response.topics[2];
        assert_eq!(third.id, "result-2");
        assert_eq!(third.url, "https://www.semanticscholar.org/paper/result-2");
        assert!(third.authors.is_empty());
        assert_eq!(third.year, None);
    }

    #[test]
    fn total_count_defaults_to_result_count() {
        let raw: RawSearchResponse = serde_json::from_str(r#"{"data": [{}]}"#).unwrap();
        let impact = ImpactScorer::with_current_year(2026);
        assert_eq!(transform_response(raw, "q", &impact).total_count, 1);
    }
}
