//! HTTP surface: `GET /` health check and `POST /procesar_pedido`.

pub mod handlers;
pub mod router;

pub use router::create_router;
