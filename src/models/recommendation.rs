use crate::models::LearningResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recommendation entry proposed by the LLM
///
/// Confidence and reason are optional because the model output cannot be
/// trusted to include them; the validator fills defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AiRecommendation {
    pub resource_id: String,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A final ranked recommendation handed to the persistence sink
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub resource: LearningResource,
    /// Normalized strength of the recommendation, always in [0, 1]
    pub confidence_score: f64,
    pub reason: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_recommendation_deserialization() {
        let json = r#"{
            "resource_id": "RES001",
            "confidence_score": 0.8,
            "reason": "Matches current level"
        }"#;

        let rec: AiRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.resource_id, "RES001");
        assert_eq!(rec.confidence_score, Some(0.8));
        assert_eq!(rec.reason, Some("Matches current level".to_string()));
    }

    #[test]
    fn test_ai_recommendation_tolerates_missing_fields() {
        let rec: AiRecommendation = serde_json::from_str(r#"{"resource_id": "RES002"}"#).unwrap();
        assert_eq!(rec.resource_id, "RES002");
        assert_eq!(rec.confidence_score, None);
        assert_eq!(rec.reason, None);
    }

}
