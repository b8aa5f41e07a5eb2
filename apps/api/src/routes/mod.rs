pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::pages;
use crate::portfolio::handlers as portfolio;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::uploads::handlers as uploads;

/// GET /
async fn handle_index() -> Html<&'static str> {
    pages::landing()
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_bytes;
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(health::health_handler))
        .route("/uploads/:filename", get(uploads::handle_get_upload))
        // Portfolio
        .route("/api/save-portfolio", post(portfolio::handle_save_portfolio))
        .route("/portfolio/editor", get(portfolio::handle_portfolio_editor))
        .route("/portfolio/view", get(portfolio::handle_portfolio_view))
        .route("/api/upload-image", post(uploads::handle_upload_image))
        // Resume
        .route("/resume/templates", get(resume::handle_resume_templates))
        .route(
            "/resume/create/professional",
            get(resume::handle_create_professional),
        )
        .route(
            "/resume/create/:template_type",
            get(resume::handle_create_resume),
        )
        .route("/api/save-resume", post(resume::handle_save_resume))
        .route("/api/get-resume", get(resume::handle_get_resume))
        .route("/api/generate-resume", post(resume::handle_generate_resume))
        .nest_service("/static", static_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
