use super::handlers::{self, SharedEngine};
use crate::application::pricing::PricingEngine;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub const ORDER_ROUTE: &str = "/procesar_pedido";

/// Builds the application router around a shared pricing engine.
pub fn create_router(engine: PricingEngine) -> Router {
    let state: SharedEngine = Arc::new(engine);

    Router::new()
        .route("/", get(handlers::home))
        .route(ORDER_ROUTE, post(handlers::process_order))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
