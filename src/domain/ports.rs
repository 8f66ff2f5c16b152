use super::money::Money;

/// Read-only source of unit prices keyed by product and color.
///
/// Implementations receive already-normalized (trimmed, lowercase) keys.
pub trait PriceCatalog: Send + Sync {
    fn unit_price(&self, product: &str, color: &str) -> Option<Money>;
}

pub type PriceCatalogBox = Box<dyn PriceCatalog>;
