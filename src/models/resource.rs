use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Kind of learning resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Tutorial,
    Article,
    Video,
    Quiz,
    Assignment,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Tutorial => "tutorial",
            ResourceKind::Article => "article",
            ResourceKind::Video => "video",
            ResourceKind::Quiz => "quiz",
            ResourceKind::Assignment => "assignment",
        };
        write!(f, "{}", name)
    }
}

/// Difficulty level of a learning resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        };
        write!(f, "{}", name)
    }
}

/// A catalog entry supplied wholesale per request by the catalog provider
///
/// Immutable from the engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningResource {
    /// External resource identifier (e.g., "RES001")
    pub resource_id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub difficulty: DifficultyLevel,
    /// Identifier of the owning course
    pub course_id: String,
    /// Recommendation priority weight in [1, 10]
    pub priority: u8,
    pub description: String,
    pub url: String,
    /// Estimated time to complete, in minutes
    pub estimated_minutes: u32,
}

impl LearningResource {
    /// Creates a catalog entry, rejecting out-of-range priority weights
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resource_id: impl Into<String>,
        title: impl Into<String>,
        kind: ResourceKind,
        difficulty: DifficultyLevel,
        course_id: impl Into<String>,
        priority: u8,
        description: impl Into<String>,
        url: impl Into<String>,
        estimated_minutes: u32,
    ) -> AppResult<Self> {
        if !(1..=10).contains(&priority) {
            return Err(AppError::InvalidInput(format!(
                "Priority must be within [1, 10], got {}",
                priority
            )));
        }

        Ok(Self {
            resource_id: resource_id.into(),
            title: title.into(),
            kind,
            difficulty,
            course_id: course_id.into(),
            priority,
            description: description.into(),
            url: url.into(),
            estimated_minutes,
        })
    }
}
