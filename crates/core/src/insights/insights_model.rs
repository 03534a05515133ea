//! Insight domain models.

use serde::{Deserialize, Serialize};

/// Sentiment classification for a derived insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightType {
    Info,
    Success,
    Warning,
    Error,
}

impl InsightType {
    /// Returns the string representation of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Info => "INFO",
            InsightType::Success => "SUCCESS",
            InsightType::Warning => "WARNING",
            InsightType::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for InsightType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A derived observation about a user's transaction history.
///
/// Insights are ephemeral: recomputed on every request, never persisted,
/// and carry no identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
}

impl Insight {
    pub fn new(
        insight_type: InsightType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            insight_type,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_type_serialization() {
        assert_eq!(
            serde_json::to_string(&InsightType::Success).unwrap(),
            "\"SUCCESS\""
        );
        assert_eq!(
            serde_json::from_str::<InsightType>("\"WARNING\"").unwrap(),
            InsightType::Warning
        );
    }

    #[test]
    fn test_insight_serializes_type_under_legacy_key() {
        let insight = Insight::new(InsightType::Info, "Welcome to Insights", "Hello");
        let json = serde_json::to_value(&insight).unwrap();

        assert_eq!(json["type"], "INFO");
        assert_eq!(json["title"], "Welcome to Insights");
        assert_eq!(json["description"], "Hello");
    }
}
