use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tascoscao::application::pricing::PricingEngine;
use tascoscao::config::PricingConfig;
use tascoscao::infrastructure::in_memory::InMemoryCatalog;
use tascoscao::interfaces::http::create_router;
use tower::ServiceExt;

pub fn app() -> Router {
    app_with(InMemoryCatalog::builtin(), PricingConfig::default())
}

pub fn app_with(catalog: InMemoryCatalog, config: PricingConfig) -> Router {
    create_router(PricingEngine::new(Box::new(catalog), config))
}

pub async fn post_order(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/procesar_pedido")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn post_json(app: Router, payload: Value) -> (StatusCode, Value) {
    post_order(app, payload.to_string()).await
}
