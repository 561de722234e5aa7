use crate::models::{DifficultyLevel, LearningResource, Recommendation, ResourceKind};
use chrono::Utc;
use std::cmp::Ordering;
use std::collections::HashSet;

const DIFFICULTY_MATCH_BONUS: f64 = 3.0;
const KIND_MATCH_BONUS: f64 = 2.0;
const PERFORMANCE_ADJUSTMENT_BONUS: f64 = 2.0;
// Raw scores are normalized into [0, 1] against this ceiling; anything above
// saturates at confidence 1.0
const CONFIDENCE_CEILING: f64 = 10.0;

const DEFAULT_REASON: &str = "Selected based on performance analysis";

/// Difficulty band and preferred resource kinds for a performance score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetProfile {
    pub difficulty: DifficultyLevel,
    pub kinds: &'static [ResourceKind],
}

/// Maps a performance score to its target difficulty and preferred kinds
///
/// Bands differ from the classifier's: < 50 beginner, < 75 intermediate,
/// >= 75 advanced.
pub fn target_profile(score: f64) -> TargetProfile {
    if score < 50.0 {
        TargetProfile {
            difficulty: DifficultyLevel::Beginner,
            kinds: &[ResourceKind::Tutorial, ResourceKind::Article],
        }
    } else if score < 75.0 {
        TargetProfile {
            difficulty: DifficultyLevel::Intermediate,
            kinds: &[ResourceKind::Tutorial, ResourceKind::Video, ResourceKind::Quiz],
        }
    } else {
        TargetProfile {
            difficulty: DifficultyLevel::Advanced,
            kinds: &[ResourceKind::Video, ResourceKind::Quiz, ResourceKind::Assignment],
        }
    }
}

/// A scored catalog entry, consumed immediately to build the final ranking
struct ScoredCandidate<'a> {
    resource: &'a LearningResource,
    score: f64,
    confidence: f64,
    reason: String,
}

/// Rule-based resource scoring
///
/// Scores every catalog entry not in the exclusion set against the student's
/// target profile and returns the top `max_recommendations`, ranked by raw
/// score descending. Equal raw scores are ordered by ascending resource_id so
/// the ranking is deterministic regardless of catalog iteration order.
pub fn score_resources(
    performance_score: f64,
    catalog: &[LearningResource],
    excluded: &HashSet<String>,
    max_recommendations: usize,
) -> Vec<Recommendation> {
    let target = target_profile(performance_score);

    tracing::info!(
        difficulty = %target.difficulty,
        kinds = ?target.kinds,
        excluded = excluded.len(),
        catalog = catalog.len(),
        "Scoring resources against target profile"
    );

    let mut candidates: Vec<ScoredCandidate> = Vec::new();

    for resource in catalog {
        if excluded.contains(&resource.resource_id) {
            tracing::debug!(
                resource_id = %resource.resource_id,
                "Skipping resource - already recommended"
            );
            continue;
        }

        let mut score = 0.0;
        let mut reason_parts: Vec<String> = Vec::new();

        if resource.difficulty == target.difficulty {
            score += DIFFICULTY_MATCH_BONUS;
            reason_parts.push(format!("Matches {} level", target.difficulty));
        }

        if target.kinds.contains(&resource.kind) {
            score += KIND_MATCH_BONUS;
            reason_parts.push(format!("Recommended {} format", resource.kind));
        }

        score += f64::from(resource.priority) / 10.0;

        if performance_score < 50.0 && resource.kind == ResourceKind::Tutorial {
            score += PERFORMANCE_ADJUSTMENT_BONUS;
            reason_parts.push("Tutorial for concept reinforcement".to_string());
        } else if performance_score >= 75.0 && resource.kind == ResourceKind::Assignment {
            score += PERFORMANCE_ADJUSTMENT_BONUS;
            reason_parts.push("Challenge assignment for skill development".to_string());
        }

        let confidence = (score / CONFIDENCE_CEILING).min(1.0);
        let reason = if reason_parts.is_empty() {
            DEFAULT_REASON.to_string()
        } else {
            reason_parts.join("; ")
        };

        tracing::debug!(
            resource_id = %resource.resource_id,
            score = score,
            confidence = confidence,
            "Scored resource"
        );

        candidates.push(ScoredCandidate {
            resource,
            score,
            confidence,
            reason,
        });
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.resource.resource_id.cmp(&b.resource.resource_id))
    });
    candidates.truncate(max_recommendations);

    tracing::info!(
        returned = candidates.len(),
        "Rule-based scoring completed"
    );

    let generated_at = Utc::now();
    candidates
        .into_iter()
        .map(|candidate| Recommendation {
            resource: candidate.resource.clone(),
            confidence_score: candidate.confidence,
            reason: candidate.reason,
            generated_at,
        })
        .collect()
}
