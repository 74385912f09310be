use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{multipart::Field, DefaultBodyLimit, Multipart, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::{internal_error, AltTextError};
use crate::models::{AltTextRequest, AltTextResult};
use crate::page::INDEX_HTML;
use crate::service::generate_alt_text;
use crate::vision::VisionClient;

pub struct AppState {
    pub config: Config,
    pub vision: VisionClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let vision = VisionClient::new(&config)?;
        Ok(Self { config, vision })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/alttext", post(alt_text))
        .route("/upload", post(upload_image))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "model": state.vision.model() }))
}

/// Accepts any content type; the body only has to be JSON.
async fn alt_text(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match AltTextRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "unreadable alt text request");
            return internal_error(e.to_string());
        }
    };

    respond(generate_alt_text(&state.vision, request).await)
}

async fn upload_image(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let request = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return AltTextError::MissingInput.into_response(),
            Err(e) => return e.into_response(),
        };
        if field.file_name().is_none() && field.name() != Some("image") {
            continue;
        }
        match read_image_field(field).await {
            Ok(request) => break request,
            Err(response) => return response,
        }
    };

    respond(generate_alt_text(&state.vision, request).await)
}

async fn read_image_field(field: Field<'_>) -> Result<AltTextRequest, Response> {
    let filename = field.file_name().map(str::to_string);
    let declared = field.content_type().map(str::to_string);
    let data = field.bytes().await.map_err(IntoResponse::into_response)?;

    if data.is_empty() {
        return Err(AltTextError::MissingInput.into_response());
    }
    let mime_type = media_type(declared.as_deref(), &data).map_err(IntoResponse::into_response)?;

    Ok(AltTextRequest {
        base64: Some(general_purpose::STANDARD.encode(&data)),
        mime_type: Some(mime_type),
        filename,
    })
}

/// Trusts an `image/*` content type, otherwise sniffs the magic bytes.
fn media_type(declared: Option<&str>, data: &[u8]) -> Result<String, AltTextError> {
    if let Some(declared) = declared.filter(|ct| ct.starts_with("image/")) {
        return Ok(declared.to_string());
    }
    let format = image::guess_format(data)
        .map_err(|_| AltTextError::UnsupportedImage("could not detect image format".into()))?;
    let mime = match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Ico => "image/x-icon",
        ImageFormat::Avif => "image/avif",
        other => {
            return Err(AltTextError::UnsupportedImage(format!(
                "{other:?} images are not supported"
            )))
        }
    };
    Ok(mime.to_string())
}

fn respond(result: Result<AltTextResult, AltTextError>) -> Response {
    match result {
        Ok(result) => Json(result).into_response(),
        Err(err) => err.into_response(),
    }
}
