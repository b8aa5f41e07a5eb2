use axum::{
    extract::{Multipart, Path, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;
use crate::uploads::{content_type_for, IncomingFile};

/// Multipart field that carries the image.
pub const FILE_FIELD: &str = "file";

/// POST /api/upload-image
pub async fn handle_upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // A plain text part under the file field is not a file.
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let bytes = field.bytes().await?;
        file = Some(IncomingFile { file_name, bytes });
        break;
    }

    let stored = state.uploads.accept(file).await?;
    Ok(Json(json!({
        "status": "success",
        "filename": stored.filename,
        "url": stored.url
    })))
}

/// GET /uploads/:filename
pub async fn handle_get_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state.uploads.read(&filename).await?;
    Ok(([(CONTENT_TYPE, content_type_for(&filename))], bytes))
}
