use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use folio_core::portfolio::{Portfolio, PortfolioInput};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::MessageResponse;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/current", get(get_current))
        .route("/portfolio/history", get(get_history))
        .route("/portfolio", post(create_portfolio))
        .route("/portfolio/{id}", put(update_portfolio).delete(delete_portfolio))
}

async fn get_current(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Portfolio>> {
    let portfolio = state.portfolio_service.get_current(&auth.user_id)?;
    Ok(Json(portfolio))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Portfolio>>> {
    let portfolios = state.portfolio_service.get_history(&auth.user_id)?;
    Ok(Json(portfolios))
}

async fn create_portfolio(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(input): Json<PortfolioInput>,
) -> ApiResult<(StatusCode, Json<Portfolio>)> {
    let portfolio = state.portfolio_service.create(&auth.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

async fn update_portfolio(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(input): Json<PortfolioInput>,
) -> ApiResult<Json<Portfolio>> {
    let portfolio = state
        .portfolio_service
        .update(&auth.user_id, &id, input)
        .await?;
    Ok(Json(portfolio))
}

async fn delete_portfolio(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.portfolio_service.delete(&auth.user_id, &id).await?;
    Ok(Json(MessageResponse {
        message: "Portfolio deleted".to_string(),
    }))
}
