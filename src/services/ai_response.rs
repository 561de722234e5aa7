use crate::models::{AiAnalysis, AiRecommendation};

/// Parsing of free-form LLM output into structured data
///
/// LLM replies are asked to be bare JSON but routinely arrive wrapped in
/// Markdown code fences or sprinkled with `//` comments. Everything here
/// degrades to an empty result on malformed input; parse failures are logged
/// with the raw text and never propagate past this module.

/// Strips code-fence markers and `//` line-tail comments, then trims
fn clean_response(text: &str) -> String {
    let without_fences = strip_fences(text);
    let cleaned: Vec<&str> = without_fences
        .lines()
        .map(|line| line.split("//").next().unwrap_or(line))
        .collect();
    cleaned.join("\n").trim().to_string()
}

/// Removes triple-backtick delimiters along with any glued language tag
fn strip_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        let tag_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        rest = &rest[tag_len..];
    }
    out.push_str(rest);
    out
}

/// Slice from the first `{` to the last `}`, or `None` when no such span exists
fn extract_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extracts analysis fields from a raw LLM reply
///
/// Returns `None` when no JSON object can be recovered; the caller treats
/// that as "no AI data" and selects the fallback analyzer. Fields are
/// recovered individually, so a present-but-invalid value costs only that
/// field while the rest of the overlay survives.
pub fn parse_analysis(raw: &str) -> Option<AiAnalysis> {
    let cleaned = clean_response(raw);
    let span = extract_object_span(&cleaned)?;

    let value: serde_json::Value = match serde_json::from_str(span) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, response = %raw, "Failed to parse AI analysis");
            return None;
        }
    };

    Some(AiAnalysis {
        strengths: field(&value, "strengths"),
        weaknesses: field(&value, "weaknesses"),
        learning_style: field(&value, "learning_style"),
        recommended_focus_areas: field(&value, "recommended_focus_areas"),
    })
}

/// Decodes one field of the analysis object, ignoring absent or invalid values
fn field<T: serde::de::DeserializeOwned>(value: &serde_json::Value, key: &str) -> Option<T> {
    let raw = value.get(key)?;
    match serde_json::from_value(raw.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!(field = key, error = %e, "Ignoring invalid AI analysis field");
            None
        }
    }
}

/// Extracts proposed recommendations from a raw LLM reply
///
/// Entries that fail to decode individually are skipped; a reply with no
/// recoverable object yields an empty list, never an error.
pub fn parse_recommendations(raw: &str) -> Vec<AiRecommendation> {
    let cleaned = clean_response(raw);
    let Some(span) = extract_object_span(&cleaned) else {
        return Vec::new();
    };

    let value: serde_json::Value = match serde_json::from_str(span) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, response = %raw, "Failed to parse AI recommendations");
            return Vec::new();
        }
    };

    value["recommendations"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value::<AiRecommendation>(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
