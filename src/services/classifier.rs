use crate::models::PerformanceCategory;

/// Maps a performance score to its category
///
/// Fixed thresholds, first match wins: >= 85 excellent, >= 70 good,
/// >= 50 average, everything below needs improvement. Scores are validated
/// into [0, 100] at the model boundary before reaching here.
pub fn classify(score: f64) -> PerformanceCategory {
    if score >= 85.0 {
        PerformanceCategory::Excellent
    } else if score >= 70.0 {
        PerformanceCategory::Good
    } else if score >= 50.0 {
        PerformanceCategory::Average
    } else {
        PerformanceCategory::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        assert_eq!(classify(92.0), PerformanceCategory::Excellent);
        assert_eq!(classify(75.5), PerformanceCategory::Good);
        assert_eq!(classify(60.0), PerformanceCategory::Average);
        assert_eq!(classify(45.0), PerformanceCategory::NeedsImprovement);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(85.0), PerformanceCategory::Excellent);
        assert_eq!(classify(84.9), PerformanceCategory::Good);
        assert_eq!(classify(70.0), PerformanceCategory::Good);
        assert_eq!(classify(69.9), PerformanceCategory::Average);
        assert_eq!(classify(50.0), PerformanceCategory::Average);
        assert_eq!(classify(49.9), PerformanceCategory::NeedsImprovement);
        assert_eq!(classify(0.0), PerformanceCategory::NeedsImprovement);
        assert_eq!(classify(100.0), PerformanceCategory::Excellent);
    }

    #[test]
    fn test_classify_monotonic_in_category_rank() {
        fn rank(category: PerformanceCategory) -> u8 {
            match category {
                PerformanceCategory::NeedsImprovement => 0,
                PerformanceCategory::Average => 1,
                PerformanceCategory::Good => 2,
                PerformanceCategory::Excellent => 3,
            }
        }

        let mut previous = rank(classify(0.0));
        for step in 1..=1000 {
            let score = step as f64 / 10.0;
            let current = rank(classify(score));
            assert!(current >= previous, "category rank regressed at {}", score);
            previous = current;
        }
    }
}
