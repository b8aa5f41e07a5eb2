use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::portfolio::PortfolioDocument;
use crate::pages;
use crate::portfolio::form::PortfolioSubmission;
use crate::state::AppState;
use crate::store::{load_as, save_as, ResourceKind};

/// POST /api/save-portfolio
pub async fn handle_save_portfolio(
    State(state): State<AppState>,
    PortfolioSubmission(portfolio): PortfolioSubmission,
) -> Result<Json<Value>, AppError> {
    info!(
        skills = portfolio.skills.len(),
        projects = portfolio.projects.len(),
        "Saving portfolio"
    );
    save_as(state.store.as_ref(), ResourceKind::Portfolio, &portfolio).await?;
    Ok(Json(json!({ "status": "success" })))
}

/// GET /portfolio/editor
pub async fn handle_portfolio_editor() -> Html<&'static str> {
    pages::portfolio_editor()
}

/// GET /portfolio/view
pub async fn handle_portfolio_view(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let portfolio: PortfolioDocument = load_as(state.store.as_ref(), ResourceKind::Portfolio).await?;
    Ok(pages::portfolio_view(&portfolio)?)
}
