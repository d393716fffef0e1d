use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use folio_core::returns::{MonthlyReturn, NewMonthlyReturn, ReturnsSummary};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/returns", get(list_returns).post(create_return))
        .route("/returns/summary", get(get_summary))
        .route("/returns/{id}", put(update_return))
}

#[derive(Debug, Deserialize)]
struct ReturnsQuery {
    months: Option<i64>,
}

async fn list_returns(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<ReturnsQuery>,
) -> ApiResult<Json<Vec<MonthlyReturn>>> {
    let months = query.months.unwrap_or(12);
    let returns = state.returns_service.get_recent(&auth.user_id, months)?;
    Ok(Json(returns))
}

async fn create_return(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(input): Json<NewMonthlyReturn>,
) -> ApiResult<(StatusCode, Json<MonthlyReturn>)> {
    let record = state.returns_service.create(&auth.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_return(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(input): Json<NewMonthlyReturn>,
) -> ApiResult<Json<MonthlyReturn>> {
    let record = state
        .returns_service
        .update(&auth.user_id, &id, input)
        .await?;
    Ok(Json(record))
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<ReturnsSummary>> {
    let summary = state.returns_service.summary(&auth.user_id)?;
    Ok(Json(summary))
}
