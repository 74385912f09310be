//! Turns free-form model text into validated alt text.
//!
//! Models rarely honour "JSON only", so the candidate is located in order:
//! a fenced code block, then the widest `{ ... }` span, then the whole text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AltTextError;
use crate::models::AltTextResult;

static FENCED_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:[A-Za-z0-9_+-]+)?\s*([\s\S]*?)\s*```").unwrap());

static OBJECT_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Schema the model is asked to produce. Every field must be a JSON string.
#[derive(Debug, Deserialize)]
struct ModelVariants {
    accessible: String,
    short: String,
    seo: String,
}

pub fn resolve(raw: &str) -> Result<AltTextResult, AltTextError> {
    let candidate = extract_candidate(raw);
    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| AltTextError::MalformedResponse(e.to_string()))?;
    validate(value)
}

/// Picks the slice of `raw` most likely to hold the JSON object.
pub fn extract_candidate(raw: &str) -> &str {
    if let Some(inner) = FENCED_BLOCK_RE.captures(raw).and_then(|c| c.get(1)) {
        return inner.as_str();
    }
    if let Some(span) = OBJECT_SPAN_RE.find(raw) {
        return span.as_str();
    }
    raw.trim()
}

fn validate(value: Value) -> Result<AltTextResult, AltTextError> {
    if !value.is_object() {
        return Err(AltTextError::InvalidShape("expected a JSON object".into()));
    }
    let variants: ModelVariants =
        serde_json::from_value(value).map_err(|e| AltTextError::InvalidShape(e.to_string()))?;

    let result = AltTextResult {
        accessible: variants.accessible.trim().to_string(),
        short: variants.short.trim().to_string(),
        seo: variants.seo.trim().to_string(),
    };

    for (field, text) in [
        ("accessible", &result.accessible),
        ("short", &result.short),
        ("seo", &result.seo),
    ] {
        if text.is_empty() {
            return Err(AltTextError::InvalidShape(format!("`{field}` is empty")));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_json_with_preamble() {
        let raw = "Sure! ```json\n{\"accessible\":\"A cat.\",\"short\":\"cat\",\"seo\":\"cat photo.\"}\n```";
        let result = resolve(raw).unwrap();
        assert_eq!(
            result,
            AltTextResult {
                accessible: "A cat.".into(),
                short: "cat".into(),
                seo: "cat photo.".into(),
            }
        );
    }

    #[test]
    fn fence_without_language_tag() {
        let raw = "```\n{\"accessible\":\"x\",\"short\":\"y\",\"seo\":\"z\"}\n```";
        assert_eq!(
            extract_candidate(raw),
            "{\"accessible\":\"x\",\"short\":\"y\",\"seo\":\"z\"}"
        );
    }

    #[test]
    fn fence_wins_over_surrounding_braces() {
        let raw = "{note} ```json {\"a\":1} ``` {tail}";
        assert_eq!(extract_candidate(raw), "{\"a\":1}");
    }

    #[test]
    fn brace_span_is_greedy() {
        let raw = "Here you go: {\"accessible\":\"A dog {running}.\",\"short\":\"dog\",\"seo\":\"dog park.\"} Hope it helps";
        let result = resolve(raw).unwrap();
        assert_eq!(result.accessible, "A dog {running}.");
        assert_eq!(result.seo, "dog park.");
    }

    #[test]
    fn whole_text_when_nothing_matches() {
        assert_eq!(extract_candidate("  \"just a string\"  "), "\"just a string\"");
    }

    #[test]
    fn fields_are_trimmed() {
        let raw = r#"{"accessible":"  A red bicycle against a wall. ","short":" red bicycle ","seo":"\nred bicycle brick wall.\t"}"#;
        let result = resolve(raw).unwrap();
        assert_eq!(result.accessible, "A red bicycle against a wall.");
        assert_eq!(result.short, "red bicycle");
        assert_eq!(result.seo, "red bicycle brick wall.");
    }

    #[test]
    fn prose_is_malformed() {
        let err = resolve("I cannot see any image here.").unwrap_err();
        assert!(matches!(err, AltTextError::MalformedResponse(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn missing_field_is_invalid_shape() {
        let err = resolve(r#"{"accessible":"A cat.","short":"cat"}"#).unwrap_err();
        assert!(matches!(err, AltTextError::InvalidShape(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn non_string_field_is_invalid_shape() {
        let err = resolve(r#"{"accessible":"A cat.","short":["cat"],"seo":"cat."}"#).unwrap_err();
        assert!(matches!(err, AltTextError::InvalidShape(_)));
    }

    #[test]
    fn non_object_is_invalid_shape() {
        let err = resolve(r#"["A cat.", "cat", "cat."]"#).unwrap_err();
        assert!(matches!(err, AltTextError::InvalidShape(_)));
    }

    #[test]
    fn blank_field_is_invalid_shape() {
        let err = resolve(r#"{"accessible":"A cat.","short":"   ","seo":"cat."}"#).unwrap_err();
        assert!(matches!(err, AltTextError::InvalidShape(_)));
    }
}
