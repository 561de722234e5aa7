use serde::{Deserialize, Serialize};

/// Performance category derived from the numeric score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceCategory {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

/// Learning style inferred for a student
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    Kinesthetic,
    Reading,
}

/// Per-request performance analysis
///
/// Built fresh for every analysis call and never mutated afterwards; the
/// engine replaces the whole value when the AI overlay or fallback applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceAnalysis {
    pub performance_category: PerformanceCategory,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub learning_style: LearningStyle,
    pub recommended_focus_areas: Vec<String>,
}

impl PerformanceAnalysis {
    /// Base analysis before any AI overlay or fallback rules apply
    pub fn base(category: PerformanceCategory) -> Self {
        Self {
            performance_category: category,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            learning_style: LearningStyle::default(),
            recommended_focus_areas: Vec::new(),
        }
    }
}

/// Analysis fields recovered from free-form LLM output
///
/// Every field is optional: the model may omit, mistype, or misspell any of
/// them, and only the subset that decoded cleanly overlays the base
/// analysis. The parser fills each field independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiAnalysis {
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub learning_style: Option<LearningStyle>,
    pub recommended_focus_areas: Option<Vec<String>>,
}

impl AiAnalysis {
    /// Overlays present AI fields onto a base analysis
    ///
    /// Present and valid field wins; absent field keeps the base value.
    pub fn merge_into(self, mut base: PerformanceAnalysis) -> PerformanceAnalysis {
        if let Some(strengths) = self.strengths {
            base.strengths = strengths;
        }
        if let Some(weaknesses) = self.weaknesses {
            base.weaknesses = weaknesses;
        }
        if let Some(learning_style) = self.learning_style {
            base.learning_style = learning_style;
        }
        if let Some(focus_areas) = self.recommended_focus_areas {
            base.recommended_focus_areas = focus_areas;
        }
        base
    }
}
