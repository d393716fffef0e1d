use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::main_lib::AppState;

pub mod auth;
pub mod health;
pub mod portfolio;
pub mod returns;

/// Builds the application router. Everything under `/api` except the
/// health and credential endpoints requires a bearer token.
pub fn app_router(state: Arc<AppState>) -> Router {
    let protected = portfolio::router()
        .merge(returns::router())
        .merge(auth::protected_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = auth::router().merge(health::router());

    Router::new()
        .nest("/api", public.merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
