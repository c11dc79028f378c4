use serde_json::Value;

use crate::error::Result;

/// English strings bundled with the binary.
const EN_LOCALE: &str = include_str!("../locales/en.json");

/// An explicitly constructed translation handle over a nested locale file.
/// No module-level cache: callers own the instance, so scoring and any
/// server-side use stay testable without a global registry.
pub struct Localizer {
    strings: Value,
}

impl Localizer {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            strings: serde_json::from_str(json)?,
        })
    }

    pub fn english() -> Result<Self> {
        Self::from_json(EN_LOCALE)
    }

    /// Resolves a dot-separated key ("topics.lowRelevanceWarning") and
    /// substitutes `{name}` parameters. Missing keys resolve to the key
    /// itself so untranslated output stays readable.
    pub fn lookup(&self, key: &str, params: &[(&str, String)]) -> String {
        let mut value = &self.strings;
        for part in key.split('.') {
            match value.get(part) {
                Some(next) => value = next,
                None => return key.to_string(),
            }
        }

        let Some(text) = value.as_str() else {
            return key.to_string();
        };

        let mut text = text.to_string();
        for (name, replacement) in params {
            text = text.replace(&format!("{{{name}}}"), replacement);
        }
        text
    }

    pub fn pluralize(&self, count: u64, key: &str) -> String {
        if count == 1 {
            self.lookup(&format!("{key}.singular"), &[])
        } else {
            self.lookup(&format!("{key}.plural"), &[])
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const LOCALE: &str = r#"{
        "nav": {"dashboard": "Dashboard"},
        "topics": {
            "relevanceScore": "Average relevance: {score}% (threshold: {threshold}%)",
            "result": {"singular": "result", "plural": "results"}
        }
    }"#;

    #[test]
    fn resolves_nested_keys() {
        let localizer = Localizer::from_json(LOCALE).unwrap();
        assert_eq!(localizer.lookup("nav.dashboard", &[]), "Dashboard");
    }

    #[test]
    fn substitutes_parameters() {
        let localizer = Localizer::from_json(LOCALE).unwrap();
        let text = localizer.lookup(
            "topics.relevanceScore",
            &[("score", "65".to_string()), ("threshold", "80".to_string())],
        );
        assert_eq!(text, "Average relevance: 65% (threshold: 80%)");
    }

    #[test]
    fn substitutes_every_occurrence_of_a_parameter() {
        let localizer = Localizer::from_json(
            r#"{"echo": "{word} and {word} again"}"#,
        )
        .unwrap();
        let text = localizer.lookup("echo", &[("word", "score".to_string())]);
        assert_eq!(text, "score and score again");
    }

    #[test]
    fn missing_key_returns_the_key() {
        let localizer = Localizer::from_json(LOCALE).unwrap();
        assert_eq!(localizer.lookup("nav.missing", &[]), "nav.missing");
        assert_eq!(localizer.lookup("missing", &[]), "missing");
    }

    #[test]
    fn non_leaf_key_returns_the_key() {
        let localizer = Localizer::from_json(LOCALE).unwrap();
        assert_eq!(localizer.lookup("topics", &[]), "topics");
    }

    #[test]
    fn pluralizes_on_count() {
        let localizer = Localizer::from_json(LOCALE).unwrap();
        assert_eq!(localizer.pluralize(1, "topics.result"), "result");
        assert_eq!(localizer.pluralize(0, "topics.result"), "results");
        assert_eq!(localizer.pluralize(5, "topics.result"), "results");
    }

    #[test]
    fn bundled_english_locale_parses() {
        let localizer = Localizer::english().unwrap();
        assert_ne!(
            localizer.lookup("topics.lowRelevanceWarning", &[]),
            "topics.lowRelevanceWarning"
        );
    }
}
