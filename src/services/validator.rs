use crate::models::{AiRecommendation, LearningResource, Recommendation};
use chrono::Utc;
use std::collections::HashMap;

// The prompt asks for a confidence per entry; when the model omits it the
// entry is still usable, just middling
const DEFAULT_AI_CONFIDENCE: f64 = 0.5;
const DEFAULT_AI_REASON: &str = "AI recommended based on performance analysis";

/// Validates LLM-proposed recommendations against the real catalog
///
/// Entries referencing unknown resources are dropped without failing the
/// batch; confidence values are clamped into [0, 1]; missing reasons get a
/// generic default. Returned entries preserve the order the model proposed
/// them in.
pub fn validate_ai_recommendations(
    ai_recs: Vec<AiRecommendation>,
    catalog: &[LearningResource],
) -> Vec<Recommendation> {
    let by_id: HashMap<&str, &LearningResource> = catalog
        .iter()
        .map(|resource| (resource.resource_id.as_str(), resource))
        .collect();

    let generated_at = Utc::now();
    let mut validated = Vec::new();

    for rec in ai_recs {
        let Some(resource) = by_id.get(rec.resource_id.as_str()) else {
            tracing::warn!(
                resource_id = %rec.resource_id,
                "Dropping AI recommendation for unknown resource"
            );
            continue;
        };

        let confidence = rec
            .confidence_score
            .unwrap_or(DEFAULT_AI_CONFIDENCE)
            .clamp(0.0, 1.0);

        validated.push(Recommendation {
            resource: (*resource).clone(),
            confidence_score: confidence,
            reason: rec.reason.unwrap_or_else(|| DEFAULT_AI_REASON.to_string()),
            generated_at,
        });
    }

    validated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DifficultyLevel, ResourceKind};

    fn catalog() -> Vec<LearningResource> {
        vec![
            LearningResource::new(
                "RES001",
                "Intro Tutorial",
                ResourceKind::Tutorial,
                DifficultyLevel::Beginner,
                "C101",
                8,
                "",
                "",
                30,
            )
            .unwrap(),
            LearningResource::new(
                "RES002",
                "Advanced Quiz",
                ResourceKind::Quiz,
                DifficultyLevel::Advanced,
                "C102",
                9,
                "",
                "",
                20,
            )
            .unwrap(),
        ]
    }

    fn ai_rec(id: &str, confidence: Option<f64>, reason: Option<&str>) -> AiRecommendation {
        AiRecommendation {
            resource_id: id.to_string(),
            confidence_score: confidence,
            reason: reason.map(|r| r.to_string()),
        }
    }

    #[test]
    fn test_drops_unknown_resource_ids() {
        let recs = validate_ai_recommendations(
            vec![
                ai_rec("RES001", Some(0.8), Some("Good fit")),
                ai_rec("GHOST", Some(0.9), Some("Hallucinated")),
            ],
            &catalog(),
        );

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].resource.resource_id, "RES001");
        assert_eq!(recs[0].reason, "Good fit");
    }

    #[test]
    fn test_clamps_out_of_range_confidence() {
        let recs = validate_ai_recommendations(
            vec![
                ai_rec("RES001", Some(1.7), None),
                ai_rec("RES002", Some(-0.3), None),
            ],
            &catalog(),
        );

        assert_eq!(recs[0].confidence_score, 1.0);
        assert_eq!(recs[1].confidence_score, 0.0);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let recs = validate_ai_recommendations(vec![ai_rec("RES001", None, None)], &catalog());

        assert_eq!(recs[0].confidence_score, DEFAULT_AI_CONFIDENCE);
        assert_eq!(recs[0].reason, DEFAULT_AI_REASON);
    }

    #[test]
    fn test_preserves_proposed_order() {
        let recs = validate_ai_recommendations(
            vec![
                ai_rec("RES002", Some(0.3), None),
                ai_rec("RES001", Some(0.9), None),
            ],
            &catalog(),
        );

        assert_eq!(recs[0].resource.resource_id, "RES002");
        assert_eq!(recs[1].resource.resource_id, "RES001");
    }

    #[test]
    fn test_empty_batch() {
        assert!(validate_ai_recommendations(Vec::new(), &catalog()).is_empty());
    }
}
