use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::pages;
use crate::resume::template::ResumeTemplate;
use crate::state::AppState;
use crate::store::{DocumentStore, ResourceKind, StoreError};

pub const TEMPLATES_PATH: &str = "/resume/templates";

/// GET /resume/templates
pub async fn handle_resume_templates() -> Html<String> {
    pages::resume_templates()
}

/// GET /resume/create/professional
pub async fn handle_create_professional(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    render_editor(state.store.as_ref(), ResumeTemplate::Professional).await
}

/// GET /resume/create/:template_type
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Path(template_type): Path<String>,
) -> Result<Response, AppError> {
    let template = match template_type.parse::<ResumeTemplate>() {
        Ok(template) => template,
        Err(e) => {
            debug!("{e}; redirecting to template gallery");
            return Ok(Redirect::to(TEMPLATES_PATH).into_response());
        }
    };
    Ok(render_editor(state.store.as_ref(), template)
        .await?
        .into_response())
}

/// Editors start from the stored resume, or an empty object if none exists.
async fn render_editor(
    store: &dyn DocumentStore,
    template: ResumeTemplate,
) -> Result<Html<String>, AppError> {
    let resume = match store.load(ResourceKind::Resume).await {
        Ok(resume) => resume,
        Err(StoreError::NotFound(_)) => Value::Object(Map::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(pages::resume_editor(template, &resume)?)
}

/// POST /api/save-resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(resume) = body?;
    debug!("Received resume data: {resume}");
    state.store.save(ResourceKind::Resume, &resume).await?;
    info!("Resume saved");
    Ok(Json(json!({
        "status": "success",
        "message": "Resume saved successfully"
    })))
}

/// GET /api/get-resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let data = match state.store.load(ResourceKind::Resume).await {
        Ok(resume) => resume,
        Err(StoreError::NotFound(_)) => serde_json::to_value(ResumeDocument::default())
            .map_err(|e| AppError::Internal(e.into()))?,
        Err(e) => return Err(e.into()),
    };
    Ok(Json(json!({
        "status": "success",
        "data": data
    })))
}

/// POST /api/generate-resume
///
/// Echoes the submitted resume back. Generation happens client-side for now.
pub async fn handle_generate_resume(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(resume) = body?;
    Ok(Json(json!({
        "status": "success",
        "message": "Resume generated successfully",
        "data": resume
    })))
}
