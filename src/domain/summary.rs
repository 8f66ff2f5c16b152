use super::coupon::CouponDetail;
use super::money::Money;
use super::shipping::ShippingReason;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    #[serde(rename = "procesado")]
    Processed,
    #[serde(rename = "error")]
    Error,
}

/// A priced order line. `unit_price` is `None` when the product/color pair
/// is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedLine {
    #[serde(rename = "producto")]
    pub product: String,
    pub color: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio_unitario")]
    pub unit_price: Option<Money>,
    #[serde(rename = "total_linea")]
    pub line_total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Money,
    #[serde(rename = "descuento")]
    pub discount: Money,
    #[serde(rename = "base_imponible")]
    pub taxable_base: Money,
    #[serde(rename = "impuestos")]
    pub tax: Money,
    #[serde(rename = "envio")]
    pub shipping: Money,
    #[serde(rename = "motivo_envio")]
    pub shipping_reason: ShippingReason,
    pub total: Money,
}

/// Pricing parameters in effect, echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameters {
    #[serde(rename = "iva_porcentaje")]
    pub tax_percent: u32,
    #[serde(rename = "envio_base")]
    pub base_shipping: Money,
    #[serde(rename = "umbral_envio_gratis")]
    pub free_shipping_threshold: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "nombre")]
    pub customer_name: String,
    #[serde(rename = "fecha")]
    pub timestamp: String,
    #[serde(rename = "lineas")]
    pub lines: Vec<PricedLine>,
    #[serde(rename = "totales")]
    pub totals: Totals,
    #[serde(rename = "parametros")]
    pub parameters: Parameters,
    #[serde(rename = "cupon", skip_serializing_if = "Option::is_none")]
    pub coupon: Option<CouponDetail>,
    #[serde(rename = "avisos", skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Body returned when an order cannot be priced at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRejection {
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "mensaje")]
    pub message: String,
}

impl OrderRejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: OrderStatus::Error,
            message: message.into(),
        }
    }
}
