use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AltTextError;
use crate::models::ImagePayload;

pub const ALT_TEXT_PROMPT: &str = "Analyze this image and return strict JSON with keys:
- accessible (<=1 sentence, helpful for screen readers)
- short (<=8 words)
- seo (<=1 sentence with relevant nouns)

Return ONLY valid JSON, no markdown, no extra text.";

const TEMPERATURE: f32 = 0.7;
const NUM_PREDICT: u32 = 200;
const LOG_PREVIEW_BYTES: usize = 500;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    images: [&'a str; 1],
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Client for Ollama's `/api/generate`. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl VisionClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            timeout: config.request_timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the image with the alt-text prompt and returns the model's raw text.
    pub async fn describe(&self, image: &ImagePayload) -> Result<String, AltTextError> {
        let url = format!("{}/api/generate", self.endpoint);
        let payload = GenerateRequest {
            model: &self.model,
            prompt: ALT_TEXT_PROMPT,
            images: [image.base64.as_str()],
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
                num_predict: NUM_PREDICT,
            },
        };

        tracing::debug!(
            model = %self.model,
            mime_type = %image.mime_type,
            bytes = image.base64.len(),
            "sending image to Ollama"
        );

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.unavailable(e))?;

        tracing::debug!(%status, body = preview(&body), "Ollama responded");

        if !status.is_success() {
            return Err(AltTextError::EndpointError(format!("{status}: {body}")));
        }

        let envelope: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            AltTextError::EndpointError(format!("unexpected response body ({e}): {}", preview(&body)))
        })?;

        match envelope.response.as_deref().map(str::trim) {
            Some(content) if !content.is_empty() => Ok(content.to_string()),
            _ => Err(AltTextError::EmptyResponse),
        }
    }

    fn unavailable(&self, e: reqwest::Error) -> AltTextError {
        if e.is_timeout() {
            AltTextError::EndpointUnavailable(format!("timed out after {:?}", self.timeout))
        } else {
            AltTextError::EndpointUnavailable(e.to_string())
        }
    }
}

fn preview(text: &str) -> &str {
    if text.len() <= LOG_PREVIEW_BYTES {
        return text;
    }
    let mut end = LOG_PREVIEW_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
