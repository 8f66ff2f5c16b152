//! axum handlers for the order pricing API.

use crate::application::pricing::PricingEngine;
use crate::domain::summary::OrderRejection;
use crate::error::PricingError;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::any::Any;
use std::sync::Arc;
use tracing::{error, info, warn};

pub type SharedEngine = Arc<PricingEngine>;

pub const HOME_MESSAGE: &str = "Tascoscao Backend Online";
pub const NO_DATA_MESSAGE: &str = "No se recibieron datos";
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// GET / health check.
pub async fn home() -> &'static str {
    HOME_MESSAGE
}

/// POST /procesar_pedido
///
/// Reads the raw body so that a missing or malformed payload gets the same
/// 400 answer regardless of content type.
pub async fn process_order(State(engine): State<SharedEngine>, body: Bytes) -> Response {
    let Some(payload) = parse_payload(&body) else {
        warn!(bytes = body.len(), "request without usable JSON body");
        return error_response(StatusCode::BAD_REQUEST, NO_DATA_MESSAGE);
    };

    match engine.price(&payload) {
        Ok(summary) => {
            info!(
                lines = summary.lines.len(),
                warnings = summary.warnings.len(),
                total = %summary.totals.total.value(),
                "order processed"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Converts a panic caught by `CatchPanicLayer` into a generic 500.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = detail, "request handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        match self {
            PricingError::InvalidOrder => {
                warn!("rejected order with no recognizable lines");
                let body = OrderRejection::new(PricingError::InvalidOrder.to_string());
                (StatusCode::OK, Json(body)).into_response()
            }
            // Internal detail goes to the log only.
            other => {
                error!(error = %other, "order pricing failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// An empty or falsy JSON document counts as "no data".
fn parse_payload(body: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .filter(|value| !is_falsy(value))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
