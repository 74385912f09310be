use crate::error::AltTextError;
use crate::fallback::placeholder_alt_text;
use crate::models::{AltTextRequest, AltTextResult, ImagePayload};
use crate::resolve::resolve;
use crate::vision::VisionClient;

/// Request-and-resolve cycles allowed before giving up on the model.
pub const MAX_ATTEMPTS: usize = 2;

const DEFAULT_FILENAME: &str = "image";

/// Produces alt text for one request.
///
/// Only `MissingInput` escapes: every failure on the vision path ends in the
/// filename-derived placeholder.
pub async fn generate_alt_text(
    vision: &VisionClient,
    request: AltTextRequest,
) -> Result<AltTextResult, AltTextError> {
    let (image, filename) = request.into_parts()?;

    match describe_with_retry(vision, &image).await {
        Ok(result) => Ok(result),
        Err(err) => {
            let filename = filename.as_deref().unwrap_or(DEFAULT_FILENAME);
            tracing::info!(error = %err, filename, "using placeholder alt text");
            Ok(placeholder_alt_text(filename))
        }
    }
}

async fn describe_with_retry(
    vision: &VisionClient,
    image: &ImagePayload,
) -> Result<AltTextResult, AltTextError> {
    let mut attempt = 1;
    loop {
        tracing::debug!(attempt, model = vision.model(), "requesting alt text");
        let outcome = vision
            .describe(image)
            .await
            .and_then(|raw| resolve(&raw));

        match outcome {
            Ok(result) => return Ok(result),
            Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                tracing::warn!(attempt, error = %err, "model output unusable, retrying");
                attempt += 1;
            }
            Err(err) => {
                tracing::warn!(attempt, error = %err, "vision path failed");
                return Err(err);
            }
        }
    }
}
