use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A student profile as supplied by the enrollment/grading collaborator
///
/// The engine only reads student data; enrollment and grading live outside
/// this crate. Course lists are ordered and carry course names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// External student identifier (e.g., "STU001")
    pub student_id: String,
    pub name: String,
    pub email: String,
    /// Proficiency measure in [0, 100]
    pub performance_score: f64,
    pub completed_courses: Vec<String>,
    pub pending_courses: Vec<String>,
}

impl Student {
    /// Creates a student profile, rejecting out-of-range performance scores
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        performance_score: f64,
        completed_courses: Vec<String>,
        pending_courses: Vec<String>,
    ) -> AppResult<Self> {
        if !(0.0..=100.0).contains(&performance_score) {
            return Err(AppError::InvalidInput(format!(
                "Performance score must be within [0, 100], got {}",
                performance_score
            )));
        }

        Ok(Self {
            student_id: student_id.into(),
            name: name.into(),
            email: email.into(),
            performance_score,
            completed_courses,
            pending_courses,
        })
    }
}
