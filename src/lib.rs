pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod models;

use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::any;

// only configuration lives here, requests never share anything mutable
#[derive(Clone, Debug)]
pub struct AppState {
    pub delay: Duration
}

pub fn app(state: AppState) -> Router {

    Router::new()
        .route(handlers::JOB_PATH, any(handlers::test_job))
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(state.clone(), handlers::hold))
        .with_state(state)

}
