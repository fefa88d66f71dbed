//! Search Result Types

use serde::{Deserialize, Serialize};

use super::{PersonId, Profile};

/// A profile annotated with ranking metadata for one query execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Join key into the ranking output. Duplicates the person's id.
    pub user_id: PersonId,
    /// Present only when the service echoes the full person record.
    #[serde(default)]
    pub id: Option<PersonId>,
    #[serde(flatten)]
    pub profile: Profile,
    /// Raw similarity in `[0, 1]`.
    pub similarity_score: f64,
    /// Percentage as sent by the service, usually rounded to one decimal.
    #[serde(default)]
    pub similarity_percentage: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
    /// 1-based rank.
    #[serde(default)]
    pub rank: Option<u32>,
}

impl SearchResult {
    /// Display percentage on a 0-100 integer scale.
    ///
    /// Falls back to the raw score when the service omitted the percentage.
    pub fn similarity_percent(&self) -> u8 {
        let raw = self
            .similarity_percentage
            .unwrap_or(self.similarity_score * 100.0);
        if raw.is_nan() {
            return 0;
        }
        raw.round().clamp(0.0, 100.0) as u8
    }

    /// At most `limit` expertise tags, in delivered order.
    pub fn top_expertise(&self, limit: usize) -> &[String] {
        let tags = &self.profile.domain_expertise;
        &tags[..limit.min(tags.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(score: f64, percentage: Option<f64>) -> SearchResult {
        let mut json = serde_json::json!({
            "user_id": 1,
            "name": "Ada Lovelace",
            "similarity_score": score,
        });
        if let Some(pct) = percentage {
            json["similarity_percentage"] = serde_json::json!(pct);
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_search_result_from_wire() {
        let json = r#"{
            "user_id": 1,
            "name": "Ada Lovelace",
            "bio": "Analytical engines",
            "location": "London",
            "similarity_score": 0.923,
            "similarity_percentage": 92.3,
            "rank": 1,
            "domain_expertise": ["ai", "fintech", "blockchain", "climate"],
            "current_role": "technical_founder",
            "experience_level": "expert",
            "networking_intent": "seeking_cofounder",
            "activity_status": "recent",
            "conversation_count": 1,
            "conversations": [{"text": "Building a ledger", "timestamp": "2024-04-02"}],
            "explanation": "Ada Lovelace is an excellent 92.3% match"
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.user_id, 1);
        assert!(result.id.is_none());
        assert_eq!(result.rank, Some(1));
        assert_eq!(result.similarity_percent(), 92);
        assert_eq!(result.top_expertise(3), ["ai", "fintech", "blockchain"]);
        assert_eq!(result.profile.conversations.len(), 1);
    }

    #[test]
    fn test_percent_rounds_half_away_from_zero() {
        assert_eq!(result_with(0.925, Some(92.5)).similarity_percent(), 93);
        assert_eq!(result_with(0.924, Some(92.4)).similarity_percent(), 92);
    }

    #[test]
    fn test_percent_falls_back_to_score() {
        assert_eq!(result_with(0.92, None).similarity_percent(), 92);
        assert_eq!(result_with(0.0, None).similarity_percent(), 0);
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(result_with(1.2, Some(120.0)).similarity_percent(), 100);
        assert_eq!(result_with(-0.1, Some(-10.0)).similarity_percent(), 0);
    }

    #[test]
    fn test_top_expertise_shorter_than_limit() {
        let result = result_with(0.5, None);
        assert!(result.top_expertise(3).is_empty());
    }
}
