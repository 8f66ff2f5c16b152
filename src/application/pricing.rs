use crate::config::PricingConfig;
use crate::domain::coupon::{apply_coupon, percent_of};
use crate::domain::money::Money;
use crate::domain::order::{OrderLine, ParsedOrder, QuantityField};
use crate::domain::ports::PriceCatalogBox;
use crate::domain::shipping::shipping_for;
use crate::domain::summary::{OrderStatus, OrderSummary, Parameters, PricedLine, Totals};
use crate::error::{PricingError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, warn};

const UNSPECIFIED_PRODUCT: &str = "sin especificar";

/// The pricing entry point.
///
/// `PricingEngine` owns a read-only catalog and the pricing parameters. It
/// keeps no state between calls, so one instance is shared by every request.
pub struct PricingEngine {
    catalog: PriceCatalogBox,
    config: PricingConfig,
}

impl PricingEngine {
    /// Creates a new `PricingEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The price table used for line lookups.
    /// * `config` - Tax, shipping and discount parameters.
    pub fn new(catalog: PriceCatalogBox, config: PricingConfig) -> Self {
        Self { catalog, config }
    }

    /// Prices an order payload, stamping the summary with the current time.
    pub fn price(&self, payload: &Value) -> Result<OrderSummary> {
        self.price_at(payload, Utc::now())
    }

    /// Prices an order payload as of `at`.
    ///
    /// Unknown product/color pairs become warnings in the summary. Unusable
    /// quantities count as one unit and are only logged. Only a payload with
    /// no recognizable lines is an error.
    pub fn price_at(&self, payload: &Value, at: DateTime<Utc>) -> Result<OrderSummary> {
        let order = match ParsedOrder::from_json(payload) {
            ParsedOrder::Valid(order) => order,
            ParsedOrder::Invalid => return Err(PricingError::InvalidOrder),
        };

        let mut warnings = Vec::new();
        let mut lines = Vec::with_capacity(order.lines.len());
        let mut subtotal = Money::ZERO;
        for line in &order.lines {
            let priced = self.price_line(line, &mut warnings)?;
            subtotal = subtotal.checked_add(priced.line_total)?.rounded();
            lines.push(priced);
        }

        let (discount, coupon) = apply_coupon(
            subtotal,
            order.coupon.as_deref(),
            self.config.welcome_discount_rate,
        )?;
        let (shipping, shipping_reason) = shipping_for(
            subtotal,
            coupon.as_ref(),
            self.config.base_shipping,
            self.config.free_shipping_threshold,
        );

        let taxable_base = subtotal.checked_sub(discount)?.max(Money::ZERO);
        let tax = taxable_base.checked_scale(self.config.tax_rate)?.rounded();
        let total = taxable_base
            .checked_add(tax)?
            .checked_add(shipping)?
            .rounded();

        debug!(
            subtotal = %subtotal.value(),
            discount = %discount.value(),
            tax = %tax.value(),
            shipping = %shipping.value(),
            total = %total.value(),
            "order totals computed"
        );

        Ok(OrderSummary {
            status: OrderStatus::Processed,
            message: confirmation_message(&order.customer_name, &lines),
            customer_name: order.customer_name,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            lines,
            totals: Totals {
                subtotal,
                discount,
                taxable_base,
                tax,
                shipping,
                shipping_reason,
                total,
            },
            parameters: self.parameters(),
            coupon,
            warnings,
        })
    }

    fn price_line(&self, line: &OrderLine, warnings: &mut Vec<String>) -> Result<PricedLine> {
        if line.quantity == QuantityField::Invalid {
            warn!(product = %line.product, color = %line.color, "invalid quantity, defaulting to 1");
        }
        let quantity = line.quantity.resolve();

        let Some(unit_price) = self.catalog.unit_price(&line.product, &line.color) else {
            warn!(product = %line.product, color = %line.color, "product/color not in catalog");
            warnings.push(format!(
                "Producto o color no encontrado: {} ({})",
                line.product, line.color
            ));
            return Ok(PricedLine {
                product: line.product.clone(),
                color: line.color.clone(),
                quantity,
                unit_price: None,
                line_total: Money::ZERO,
            });
        };

        Ok(PricedLine {
            product: line.product.clone(),
            color: line.color.clone(),
            quantity,
            unit_price: Some(unit_price),
            line_total: unit_price.times(quantity)?.rounded(),
        })
    }

    fn parameters(&self) -> Parameters {
        Parameters {
            tax_percent: percent_of(self.config.tax_rate),
            base_shipping: self.config.base_shipping,
            free_shipping_threshold: self.config.free_shipping_threshold,
        }
    }
}

/// Confirmation text naming the customer and the ordered products.
fn confirmation_message(customer_name: &str, lines: &[PricedLine]) -> String {
    let mut products: Vec<&str> = Vec::new();
    for line in lines.iter().filter(|l| !l.product.is_empty()) {
        if !products.contains(&line.product.as_str()) {
            products.push(&line.product);
        }
    }
    let products = if products.is_empty() {
        UNSPECIFIED_PRODUCT.to_string()
    } else {
        products.join(", ")
    };
    format!("Pedido de {customer_name} para producto: {products} recibido.")
}
