//! Image Upload
//!
//! Accepts a single multipart `image` field, stores it under the upload
//! directory with a random filename, and returns the served path. The
//! stored files are exposed read-only at `/uploads/<file>`.

use auth::presentation::middleware::{AuthGateState, require_auth};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router, middleware};
use kernel::api::ApiResponse;
use kernel::error::app_error::{AppError, AppResult};
use platform::crypto::{random_bytes, to_base64url};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Maximum accepted image size
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted content types and their stored extensions
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/gif", ".gif"),
    ("image/webp", ".webp"),
];

#[derive(Clone)]
struct UploadState {
    dir: Arc<PathBuf>,
}

/// Stored-image payload
#[derive(Debug, Serialize)]
struct UploadDto {
    filename: String,
    #[serde(rename = "originalName")]
    original_name: String,
    size: usize,
    url: String,
}

/// /upload - store a single image (authenticated)
pub fn upload_router(dir: PathBuf, gate: AuthGateState) -> Router {
    let state = UploadState { dir: Arc::new(dir) };

    Router::new()
        .route("/", post(upload_image))
        // Body limit leaves headroom over the image cap for the
        // multipart framing
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// POST /upload
async fn upload_image(
    State(state): State<UploadState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        let extension = extension_for(&content_type).ok_or_else(|| {
            AppError::bad_request("Only JPEG, PNG, GIF, and WebP images are allowed")
        })?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(e.to_string()))?;

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::bad_request("Image must be 5MB or smaller"));
        }

        let filename = format!("{}{}", to_base64url(&random_bytes(12)), extension);
        let path = state.dir.join(&filename);

        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::internal("Failed to store image").with_source(e))?;

        tracing::info!(filename = %filename, size = data.len(), "Image uploaded");

        let url = format!("/uploads/{}", filename);

        return Ok(Json(ApiResponse::ok_with_message(
            "Image uploaded successfully",
            UploadDto {
                filename,
                original_name,
                size: data.len(),
                url,
            },
        )));
    }

    Err(AppError::bad_request("No image file provided"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for("image/jpeg"), Some(".jpg"));
        assert_eq!(extension_for("image/png"), Some(".png"));
        assert_eq!(extension_for("image/webp"), Some(".webp"));
        assert_eq!(extension_for("application/pdf"), None);
        assert_eq!(extension_for(""), None);
    }
}
