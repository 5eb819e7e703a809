use serde::{Deserialize, Serialize};

/// One source/translated text pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// The exact input that was translated.
    pub src: String,
    /// The translated text.
    pub dst: String,
}

/// The outcome of one translation call, as returned by the provider and
/// stored in the local cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Detected source language.
    pub from: String,
    /// Target language.
    pub to: String,
    #[serde(rename = "trans_result")]
    pub entries: Vec<TranslationEntry>,
}

impl TranslationRecord {
    /// Returns `true` if any entry was translated from exactly `source_text`.
    pub fn contains_source(&self, source_text: &str) -> bool {
        self.entries.iter().any(|entry| entry.src == source_text)
    }

    /// Joins the translated text of every entry, in order, with `,`.
    pub fn display_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.dst.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(src: &str, dst: &str) -> TranslationEntry {
        TranslationEntry {
            src: src.to_string(),
            dst: dst.to_string(),
        }
    }

    #[test]
    fn test_display_text_joins_with_comma() {
        let record = TranslationRecord {
            from: "en".to_string(),
            to: "zh".to_string(),
            entries: vec![entry("x", "a"), entry("y", "b")],
        };
        assert_eq!(record.display_text(), "a,b");
    }

    #[test]
    fn test_display_text_empty_record() {
        assert_eq!(TranslationRecord::default().display_text(), "");
    }

    #[test]
    fn test_contains_source_exact_match_only() {
        let record = TranslationRecord {
            entries: vec![entry("hello", "你好")],
            ..Default::default()
        };
        assert!(record.contains_source("hello"));
        assert!(!record.contains_source("Hello"));
        assert!(!record.contains_source("hello "));
    }

    #[test]
    fn test_deserialize_provider_body() {
        let body = r#"{"from":"en","to":"zh","trans_result":[{"src":"apple","dst":"苹果"}]}"#;
        let record: TranslationRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.from, "en");
        assert_eq!(record.to, "zh");
        assert_eq!(record.entries, vec![entry("apple", "苹果")]);
    }

    #[test]
    fn test_serialize_uses_wire_field_names() {
        let record = TranslationRecord {
            from: "en".to_string(),
            to: "zh".to_string(),
            entries: vec![entry("apple", "苹果")],
        };
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["trans_result"][0]["src"], "apple");
        assert_eq!(json["trans_result"][0]["dst"], "苹果");
    }
}
