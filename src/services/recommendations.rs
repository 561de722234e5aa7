use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{LearningResource, PerformanceAnalysis, Recommendation, Student},
    services::{
        ai_response, classifier, fallback,
        providers::{groq::GroqChannel, LlmChannel},
        scorer, validator,
    },
};
use std::collections::HashSet;
use std::sync::Arc;

// The recommendation prompt includes at most this many catalog entries to
// keep it inside the completion budget
const PROMPT_CATALOG_CAP: usize = 20;

const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

/// Recommendation engine
///
/// Orchestrates performance analysis and resource recommendation over an
/// optional LLM channel. Every AI-path failure (absent channel, transport
/// error, unparseable reply, nothing surviving validation) selects the
/// deterministic rule-based path; callers never see an AI error.
pub struct RecommendationEngine {
    llm: Option<Arc<dyn LlmChannel>>,
    max_recommendations: usize,
}

impl RecommendationEngine {
    /// Creates an engine over an injected channel, or none for rule-based only
    pub fn new(llm: Option<Arc<dyn LlmChannel>>) -> Self {
        Self {
            llm,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }

    /// Builds the engine from configuration
    ///
    /// A missing API key is not an error; it selects the fallback path for
    /// every request. The configured `max_recommendations` becomes the cap
    /// for requests that don't specify one.
    pub fn from_config(config: &Config) -> Self {
        let llm: Option<Arc<dyn LlmChannel>> = match &config.groq_api_key {
            Some(api_key) => {
                tracing::info!(model = %config.groq_model, "LLM channel initialized");
                Some(Arc::new(GroqChannel::new(
                    api_key.clone(),
                    config.groq_api_url.clone(),
                    config.groq_model.clone(),
                )))
            }
            None => {
                tracing::warn!("No LLM API key configured. Using rule-based logic only.");
                None
            }
        };

        Self {
            llm,
            max_recommendations: config.max_recommendations,
        }
    }

    /// Analyzes a student's performance
    ///
    /// Starts from the classified category with empty insight lists, then
    /// either overlays whatever valid fields the LLM returned or runs the
    /// rule-based fallback analyzer.
    pub async fn analyze_performance(&self, student: &Student) -> PerformanceAnalysis {
        tracing::info!(
            student_id = %student.student_id,
            score = student.performance_score,
            "Analyzing student performance"
        );

        let base = PerformanceAnalysis::base(classifier::classify(student.performance_score));
        let completed = student.completed_courses.len();

        let Some(channel) = &self.llm else {
            return fallback::fallback_analysis(student.performance_score, completed, base);
        };

        match channel.complete(&analysis_prompt(student)).await {
            Ok(reply) => {
                tracing::info!(
                    channel = channel.name(),
                    reply = %preview(&reply),
                    "Received analysis reply"
                );
                match ai_response::parse_analysis(&reply) {
                    Some(overlay) => overlay.merge_into(base),
                    None => {
                        fallback::fallback_analysis(student.performance_score, completed, base)
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, channel = channel.name(), "AI analysis failed");
                fallback::fallback_analysis(student.performance_score, completed, base)
            }
        }
    }

    /// Generates ranked recommendations for a student
    ///
    /// Resources already in the exclusion set are never returned, on either
    /// path. The result is bounded by `max_recommendations`, or by the
    /// engine's configured cap when the caller passes `None`, and is ready
    /// for the persistence sink.
    pub async fn recommend(
        &self,
        student: &Student,
        catalog: &[LearningResource],
        excluded: &HashSet<String>,
        max_recommendations: Option<usize>,
    ) -> Vec<Recommendation> {
        let max_recommendations = max_recommendations.unwrap_or(self.max_recommendations);

        tracing::info!(
            student_id = %student.student_id,
            catalog = catalog.len(),
            max = max_recommendations,
            "Generating recommendations"
        );

        let analysis = self.analyze_performance(student).await;

        if let Some(channel) = &self.llm {
            match self
                .ai_recommendations(channel, &analysis, catalog, excluded, max_recommendations)
                .await
            {
                Ok(recommendations) if !recommendations.is_empty() => {
                    tracing::info!(
                        count = recommendations.len(),
                        channel = channel.name(),
                        "AI recommendations generated"
                    );
                    return recommendations;
                }
                Ok(_) => {
                    tracing::info!(
                        channel = channel.name(),
                        "AI produced no usable recommendations, using fallback"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        channel = channel.name(),
                        "AI recommendation generation failed, using fallback"
                    );
                }
            }
        }

        scorer::score_resources(
            student.performance_score,
            catalog,
            excluded,
            max_recommendations,
        )
    }

    /// AI recommendation path: prompt, parse, validate, dedupe, truncate
    async fn ai_recommendations(
        &self,
        channel: &Arc<dyn LlmChannel>,
        analysis: &PerformanceAnalysis,
        catalog: &[LearningResource],
        excluded: &HashSet<String>,
        max_recommendations: usize,
    ) -> AppResult<Vec<Recommendation>> {
        let prompt = recommendation_prompt(analysis, catalog, max_recommendations)?;
        let reply = channel.complete(&prompt).await?;

        tracing::info!(
            channel = channel.name(),
            reply = %preview(&reply),
            "Received recommendation reply"
        );

        let proposed = ai_response::parse_recommendations(&reply);
        let mut validated = validator::validate_ai_recommendations(proposed, catalog);
        validated.retain(|rec| !excluded.contains(&rec.resource.resource_id));
        validated.truncate(max_recommendations);
        Ok(validated)
    }
}

/// Builds the performance-analysis prompt
fn analysis_prompt(student: &Student) -> String {
    format!(
        "Analyze this student's learning performance and provide insights:\n\
         \n\
         Student Performance Data:\n\
         - Performance Score: {}/100\n\
         - Completed Courses: {:?}\n\
         - Pending Courses: {:?}\n\
         - Total Completed: {}\n\
         - Total Pending: {}\n\
         \n\
         Please provide analysis in the following JSON format:\n\
         {{\n\
             \"strengths\": [\"strength1\", \"strength2\"],\n\
             \"weaknesses\": [\"weakness1\", \"weakness2\"],\n\
             \"learning_style\": \"visual|auditory|kinesthetic|reading\",\n\
             \"recommended_focus_areas\": [\"area1\", \"area2\"]\n\
         }}\n\
         \n\
         Return only a valid JSON object without explanations, Markdown, or comments.",
        student.performance_score,
        student.completed_courses,
        student.pending_courses,
        student.completed_courses.len(),
        student.pending_courses.len(),
    )
}

/// Builds the recommendation prompt from the analysis and a capped catalog
fn recommendation_prompt(
    analysis: &PerformanceAnalysis,
    catalog: &[LearningResource],
    max_recommendations: usize,
) -> AppResult<String> {
    let analysis_json = serde_json::to_string_pretty(analysis)
        .map_err(|e| AppError::Internal(format!("Failed to serialize analysis: {}", e)))?;

    let catalog_entries: Vec<serde_json::Value> = catalog
        .iter()
        .take(PROMPT_CATALOG_CAP)
        .map(|resource| {
            serde_json::json!({
                "id": resource.resource_id,
                "title": resource.title,
                "type": resource.kind,
                "difficulty": resource.difficulty,
                "priority": resource.priority,
                "course_id": resource.course_id,
            })
        })
        .collect();
    let catalog_json = serde_json::to_string_pretty(&catalog_entries)
        .map_err(|e| AppError::Internal(format!("Failed to serialize catalog: {}", e)))?;

    Ok(format!(
        "Generate personalized learning recommendations for this student:\n\
         \n\
         Student Analysis:\n\
         {}\n\
         \n\
         Available Resources:\n\
         {}\n\
         \n\
         Generate {} recommendations in JSON format:\n\
         {{\n\
             \"recommendations\": [\n\
                 {{\n\
                     \"resource_id\": \"resource_id\",\n\
                     \"confidence_score\": 0.8,\n\
                     \"reason\": \"Why this resource is recommended\"\n\
                 }}\n\
             ]\n\
         }}",
        analysis_json, catalog_json, max_recommendations,
    ))
}

/// First 200 characters of a reply, for logging
fn preview(text: &str) -> String {
    text.chars().take(200).collect()
}
