//! HTTP surface: routing and shared state.

pub mod health;
pub mod payments;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::payments::gateway::PaystackGateway;

/// Immutable per-process state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<PaystackGateway>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/payments/initiate", post(payments::initiate_payment))
        .route("/payments/verify", post(payments::verify_payment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
