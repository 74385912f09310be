//! QuickCaption: alt text for uploaded images from a local Ollama vision model,
//! with a filename-derived placeholder when the model is unavailable.

pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod page;
pub mod resolve;
pub mod routes;
pub mod service;
pub mod vision;

pub use config::Config;
pub use error::AltTextError;
pub use models::{AltTextRequest, AltTextResult, ImagePayload};
pub use routes::{router, AppState};
