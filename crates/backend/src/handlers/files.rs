use anyhow::Context;
use axum::body::Body;
use axum::extract::{Multipart, Path, Query};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use contracts::category::CategoryKey;
use contracts::files::{FileAction, ListFilesResponse, UploadResponse};

use crate::domain::files::{browser, uploader};
use crate::shared::config;
use crate::shared::error::ApiError;

fn parse_category(key: &str) -> Result<CategoryKey, ApiError> {
    CategoryKey::from_key(key).ok_or_else(|| ApiError::UnknownCategory(key.to_string()))
}

/// GET /api/categories/:key/files
pub async fn list(Path(key): Path<String>) -> Result<Json<ListFilesResponse>, ApiError> {
    let category = parse_category(&key)?;
    browser::list_files(&config::data_root(), category).map(Json)
}

#[derive(Deserialize)]
pub struct FetchParams {
    /// `attachment` forces a download regardless of the file's action
    pub disposition: Option<String>,
}

/// GET /api/categories/:key/files/:name
///
/// Preview and playback are served inline, everything else as an attachment
/// carrying the original file name.
pub async fn fetch(
    Path((key, name)): Path<(String, String)>,
    Query(params): Query<FetchParams>,
) -> Result<Response, ApiError> {
    let category = parse_category(&key)?;
    let bytes = browser::read_file(&config::data_root(), category, &name)?;

    let action = FileAction::for_name(&name);
    let content_type = content_type_for(&name);
    let as_attachment =
        action == FileAction::Download || params.disposition.as_deref() == Some("attachment");
    let disposition = if as_attachment {
        format!("attachment; filename=\"{}\"", sanitize_for_header(&name))
    } else {
        format!("inline; filename=\"{}\"", sanitize_for_header(&name))
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition)
                .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
        )
        .body(Body::from(bytes))
        .context("Failed to build file response")
        .map_err(ApiError::Internal)
}

/// POST /api/categories/:key/files (multipart, admin only)
pub async fn upload(
    Path(key): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let category = parse_category(&key)?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .context("Failed to read multipart field")?
    {
        let Some(name) = field.file_name().map(str::to_string) else {
            // non-file fields are ignored
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .with_context(|| format!("Failed to receive '{}'", name))?
            .to_vec();
        files.push(uploader::IncomingFile { name, bytes });
    }

    uploader::upload(&config::data_root(), category, files).map(Json)
}

/// Content type derived from the file's classified action, so the extension
/// sets live in one place (`FileAction::for_name`)
fn content_type_for(name: &str) -> &'static str {
    match FileAction::for_name(name) {
        FileAction::Preview => "application/pdf",
        FileAction::Playback => {
            if name.to_lowercase().ends_with(".mov") {
                "video/quicktime"
            } else {
                "video/mp4"
            }
        }
        FileAction::Download => "application/octet-stream",
    }
}

fn sanitize_for_header(name: &str) -> String {
    name.replace(['"', '\r', '\n'], "_")
}
