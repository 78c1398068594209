//! Wire contract with the manuscript review service.
//!
//! Every type here mirrors a JSON payload exchanged with the external
//! analysis API. The client never constructs a `ReviewResult` itself —
//! it is received once per submission and treated as immutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Review report
// ============================================================================

/// One titled slice of a review report.
///
/// Newer service versions split the report into sections so the UI can
/// collapse them independently; older versions send a flat document only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSection {
    pub id: String,
    pub title: String,
    /// Markdown body of this section.
    pub content: String,
    pub issues_found: u32,
}

/// The service's response to a manuscript submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewResult {
    pub status: String,
    /// Echo of the requested review dimensions.
    pub review_type: String,
    pub manuscript_name: String,
    pub word_count: u64,
    pub issues_found: u32,
    /// Full report as one markdown document. Always present, even when
    /// `sections` is too — it is the canonical export payload.
    pub review_markdown: String,
    pub generated_at: DateTime<Utc>,
    /// Sectioned form of the report. Absent or empty on responses from
    /// service versions that predate sectioning.
    #[serde(default)]
    pub sections: Option<Vec<ReviewSection>>,
}

/// How a result should be displayed, decided once per result.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody<'a> {
    /// Independently collapsible titled panels.
    Sectioned(&'a [ReviewSection]),
    /// One markdown document with a raw/rendered toggle.
    Flat(&'a str),
}

impl ReviewResult {
    /// Pick the display mode. Sectioned wins only when the service actually
    /// sent sections; an empty list means the split produced nothing useful
    /// and the flat document is shown instead.
    pub fn body(&self) -> ReportBody<'_> {
        match self.sections.as_deref() {
            Some(sections) if !sections.is_empty() => ReportBody::Sectioned(sections),
            _ => ReportBody::Flat(&self.review_markdown),
        }
    }
}

// ============================================================================
// Service metadata
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Public listing of feedback tones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToneInfo {
    pub available: Vec<String>,
    pub current: String,
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

// ============================================================================
// Admin API
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSettings {
    pub tone: String,
    /// Opaque per-tone configuration, owned by the server.
    #[serde(default)]
    pub tone_config: serde_json::Value,
    pub available_tones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveResponse {
    pub success: bool,
}

/// One completed review as it appears in the usage log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageReviewSummary {
    pub manuscript_name: String,
    pub word_count: u64,
    pub issues_found: u32,
    pub reviewed_at: DateTime<Utc>,
}

/// Month-to-date usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageStats {
    /// Calendar month the totals cover, e.g. "2025-11".
    pub month: String,
    pub total_reviews: u64,
    pub total_words: u64,
    #[serde(default)]
    pub recent_reviews: Vec<UsageReviewSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_result() -> ReviewResult {
        serde_json::from_value(serde_json::json!({
            "status": "complete",
            "review_type": "grammar,typo",
            "manuscript_name": "report.docx",
            "word_count": 5000,
            "issues_found": 3,
            "review_markdown": "# Review\n\nLooks good.",
            "generated_at": "2025-11-02T09:30:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn result_without_sections_deserializes() {
        let result = flat_result();
        assert_eq!(result.word_count, 5000);
        assert_eq!(result.sections, None);
    }

    #[test]
    fn flat_result_uses_flat_body() {
        let result = flat_result();
        assert_eq!(result.body(), ReportBody::Flat("# Review\n\nLooks good."));
    }

    #[test]
    fn empty_sections_fall_back_to_flat() {
        let mut result = flat_result();
        result.sections = Some(Vec::new());
        assert!(matches!(result.body(), ReportBody::Flat(_)));
    }

    #[test]
    fn sectioned_result_uses_sectioned_body() {
        let mut result = flat_result();
        result.sections = Some(vec![ReviewSection {
            id: "grammar".to_string(),
            title: "Grammar".to_string(),
            content: "No issues.".to_string(),
            issues_found: 0,
        }]);
        match result.body() {
            ReportBody::Sectioned(sections) => {
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].title, "Grammar");
            }
            other => panic!("expected sectioned body, got {other:?}"),
        }
    }

    #[test]
    fn sections_round_trip() {
        let mut result = flat_result();
        result.sections = Some(vec![ReviewSection {
            id: "pacing".to_string(),
            title: "Pacing & Tension".to_string(),
            content: "Middle sags.".to_string(),
            issues_found: 2,
        }]);
        let json = serde_json::to_string(&result).unwrap();
        let back: ReviewResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn usage_stats_deserialize_with_defaults() {
        let stats: UsageStats = serde_json::from_value(serde_json::json!({
            "month": "2025-11",
            "total_reviews": 12,
            "total_words": 480000
        }))
        .unwrap();
        assert!(stats.recent_reviews.is_empty());
    }

    #[test]
    fn admin_settings_tolerate_missing_tone_config() {
        let settings: AdminSettings = serde_json::from_value(serde_json::json!({
            "tone": "gentle",
            "available_tones": ["gentlest", "gentle", "direct", "harsh"]
        }))
        .unwrap();
        assert_eq!(settings.tone, "gentle");
        assert!(settings.tone_config.is_null());
    }
}
