use crate::domain::money::Money;
use crate::domain::ports::PriceCatalog;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const BUILTIN_PRICES: &[(&str, &str, Decimal)] = &[
    ("camiseta", "blanco", dec!(12.00)),
    ("camiseta", "negro", dec!(12.00)),
    ("camiseta", "azul", dec!(12.00)),
    ("camiseta", "rojo", dec!(12.00)),
    ("taza", "blanco", dec!(5.00)),
    ("taza", "negro", dec!(6.00)),
    ("sudadera", "negro", dec!(25.00)),
    ("sudadera", "gris", dec!(25.00)),
    ("gorra", "negro", dec!(8.00)),
    ("gorra", "azul", dec!(8.00)),
];

/// An in-memory product/color price table.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across request handlers without locking.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    prices: HashMap<String, HashMap<String, Money>>,
}

impl InMemoryCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        BUILTIN_PRICES
            .iter()
            .fold(Self::new(), |catalog, (product, color, price)| {
                catalog.with_price(product, color, Money::new(*price))
            })
    }

    /// Adds or replaces a price. Keys are stored trimmed and lowercase.
    pub fn with_price(mut self, product: &str, color: &str, price: Money) -> Self {
        self.prices
            .entry(product.trim().to_lowercase())
            .or_default()
            .insert(color.trim().to_lowercase(), price);
        self
    }

    /// Loads a catalog from JSON shaped as `{"product": {"color": price}}`.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, Decimal>> = serde_json::from_reader(source)?;

        let mut catalog = Self::new();
        for (product, colors) in raw {
            for (color, price) in colors {
                if price < Decimal::ZERO {
                    return Err(PricingError::CatalogError(format!(
                        "negative price for {product} ({color}): {price}"
                    )));
                }
                catalog = catalog.with_price(&product, &color, Money::new(price));
            }
        }

        if catalog.is_empty() {
            return Err(PricingError::CatalogError(
                "catalog contains no prices".to_string(),
            ));
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of product/color combinations.
    pub fn len(&self) -> usize {
        self.prices.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PriceCatalog for InMemoryCatalog {
    fn unit_price(&self, product: &str, color: &str) -> Option<Money> {
        self.prices.get(product)?.get(color).copied()
    }
}
