use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AltTextError;

/// Body of `POST /api/alttext`.
///
/// Fields are read loosely: falsy JSON values (`null`, `false`, `0`) are absent and
/// other non-string scalars keep their JSON text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltTextRequest {
    #[serde(default, deserialize_with = "loose_string")]
    pub base64: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub filename: Option<String>,
}

/// The three alt-text variants handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltTextResult {
    pub accessible: String,
    pub short: String,
    pub seo: String,
}

/// An encoded image ready to be sent to the vision model.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub base64: String,
    pub mime_type: String,
}

impl AltTextRequest {
    /// Parses a request body regardless of its declared content type.
    /// Only bytes that are not JSON at all are an error; a JSON value that is
    /// not an object carries no fields.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// Splits the request into the image payload and the optional filename.
    /// Empty strings count as absent.
    pub fn into_parts(self) -> Result<(ImagePayload, Option<String>), AltTextError> {
        let base64 = non_blank(self.base64).ok_or(AltTextError::MissingInput)?;
        let mime_type = non_blank(self.mime_type).ok_or(AltTextError::MissingInput)?;
        Ok((ImagePayload { base64, mime_type }, non_blank(self.filename)))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let req: AltTextRequest = serde_json::from_str(
            r#"{"base64":"aGVsbG8=","mimeType":"image/png","filename":"cat.png"}"#,
        )
        .unwrap();
        let (payload, filename) = req.into_parts().unwrap();
        assert_eq!(payload.base64, "aGVsbG8=");
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(filename.as_deref(), Some("cat.png"));
    }

    #[test]
    fn empty_strings_are_missing_input() {
        let req = AltTextRequest {
            base64: Some(String::new()),
            mime_type: Some("image/png".into()),
            filename: None,
        };
        assert!(matches!(req.into_parts(), Err(AltTextError::MissingInput)));

        let req = AltTextRequest {
            base64: Some("aGVsbG8=".into()),
            mime_type: None,
            filename: None,
        };
        assert!(matches!(req.into_parts(), Err(AltTextError::MissingInput)));
    }

    #[test]
    fn parses_non_string_fields_loosely() {
        let req = AltTextRequest::from_json(
            br#"{"base64":123,"mimeType":"image/png","filename":null}"#,
        )
        .unwrap();
        assert_eq!(req.base64.as_deref(), Some("123"));
        assert_eq!(req.filename, None);

        let req = AltTextRequest::from_json(br#"{"base64":0,"mimeType":false}"#).unwrap();
        assert!(matches!(req.into_parts(), Err(AltTextError::MissingInput)));
    }

    #[test]
    fn non_object_json_has_no_fields() {
        let req = AltTextRequest::from_json(b"[1, 2]").unwrap();
        assert!(matches!(req.into_parts(), Err(AltTextError::MissingInput)));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(AltTextRequest::from_json(b"{not json").is_err());
    }
}
