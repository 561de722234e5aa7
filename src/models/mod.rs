mod analysis;
mod recommendation;
mod resource;
mod student;

pub use analysis::{AiAnalysis, LearningStyle, PerformanceAnalysis, PerformanceCategory};
pub use recommendation::{AiRecommendation, Recommendation};
pub use resource::{DifficultyLevel, LearningResource, ResourceKind};
pub use student::Student;
