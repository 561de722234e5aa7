use crate::models::PerformanceAnalysis;

/// Rule-based analysis used when no LLM channel is configured or its output
/// is unusable
///
/// Uses the same score bands as the classifier (>= 85, >= 70, below) with
/// fixed text per band. Students with fewer than two completed courses get
/// an extra "Course completion" focus area regardless of band. This path
/// never fails and touches no external service.
pub fn fallback_analysis(
    score: f64,
    completed_count: usize,
    mut base: PerformanceAnalysis,
) -> PerformanceAnalysis {
    tracing::info!(
        score = score,
        completed = completed_count,
        "Using fallback analysis"
    );

    if score >= 85.0 {
        base.strengths = string_vec(&["High performance", "Good understanding", "Consistent progress"]);
        base.recommended_focus_areas = string_vec(&["Advanced topics", "Specialized skills"]);
    } else if score >= 70.0 {
        base.strengths = string_vec(&["Solid foundation", "Regular participation"]);
        base.weaknesses = string_vec(&["Some concept gaps"]);
        base.recommended_focus_areas = string_vec(&["Reinforcement", "Practice problems"]);
    } else {
        base.strengths = string_vec(&["Willingness to learn"]);
        base.weaknesses = string_vec(&["Fundamental concepts", "Study habits"]);
        base.recommended_focus_areas = string_vec(&["Basic concepts", "Study techniques"]);
    }

    if completed_count < 2 {
        base.recommended_focus_areas
            .push("Course completion".to_string());
    }

    base
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PerformanceAnalysis, PerformanceCategory};

    fn base() -> PerformanceAnalysis {
        PerformanceAnalysis::base(PerformanceCategory::Average)
    }

    #[test]
    fn test_high_band() {
        let analysis = fallback_analysis(92.0, 3, base());
        assert_eq!(
            analysis.strengths,
            vec![
                "High performance".to_string(),
                "Good understanding".to_string(),
                "Consistent progress".to_string(),
            ]
        );
        assert!(analysis.weaknesses.is_empty());
        assert_eq!(
            analysis.recommended_focus_areas,
            vec!["Advanced topics".to_string(), "Specialized skills".to_string()]
        );
    }

    #[test]
    fn test_middle_band() {
        let analysis = fallback_analysis(72.0, 2, base());
        assert_eq!(
            analysis.strengths,
            vec!["Solid foundation".to_string(), "Regular participation".to_string()]
        );
        assert_eq!(analysis.weaknesses, vec!["Some concept gaps".to_string()]);
        assert_eq!(
            analysis.recommended_focus_areas,
            vec!["Reinforcement".to_string(), "Practice problems".to_string()]
        );
    }

    #[test]
    fn test_low_band() {
        let analysis = fallback_analysis(45.0, 2, base());
        assert_eq!(analysis.strengths, vec!["Willingness to learn".to_string()]);
        assert_eq!(
            analysis.weaknesses,
            vec!["Fundamental concepts".to_string(), "Study habits".to_string()]
        );
        assert_eq!(
            analysis.recommended_focus_areas,
            vec!["Basic concepts".to_string(), "Study techniques".to_string()]
        );
    }

    #[test]
    fn test_course_completion_appended_when_few_completed() {
        let analysis = fallback_analysis(92.0, 1, base());
        assert_eq!(
            analysis.recommended_focus_areas.last(),
            Some(&"Course completion".to_string())
        );

        let analysis = fallback_analysis(45.0, 0, base());
        assert_eq!(
            analysis.recommended_focus_areas,
            vec![
                "Basic concepts".to_string(),
                "Study techniques".to_string(),
                "Course completion".to_string(),
            ]
        );
    }

    #[test]
    fn test_course_completion_not_appended_at_two_completed() {
        let analysis = fallback_analysis(92.0, 3, base());
        assert!(!analysis
            .recommended_focus_areas
            .contains(&"Course completion".to_string()));

        let analysis = fallback_analysis(92.0, 2, base());
        assert!(!analysis
            .recommended_focus_areas
            .contains(&"Course completion".to_string()));
    }

    #[test]
    fn test_category_untouched() {
        let analysis = fallback_analysis(45.0, 5, base());
        assert_eq!(analysis.performance_category, PerformanceCategory::Average);
    }
}
