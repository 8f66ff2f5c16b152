use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Formato de pedido no válido: se esperaba 'producto' o una lista 'items'")]
    InvalidOrder,
    #[error("Amount out of range while computing {0}")]
    Overflow(&'static str),
    #[error("Catalog error: {0}")]
    CatalogError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PricingError>;
