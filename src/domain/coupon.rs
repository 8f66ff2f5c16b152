use super::money::Money;
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

pub const WELCOME_CODE: &str = "BIENVENIDA10";
pub const FREE_SHIPPING_CODE: &str = "ENVIOGRATIS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CouponKind {
    #[serde(rename = "descuento_porcentaje")]
    PercentDiscount,
    #[serde(rename = "envio_gratis")]
    FreeShipping,
    #[serde(rename = "desconocido")]
    Unknown,
}

impl CouponKind {
    /// Expects a code already trimmed and uppercased.
    pub fn from_code(code: &str) -> Self {
        match code {
            WELCOME_CODE => Self::PercentDiscount,
            FREE_SHIPPING_CODE => Self::FreeShipping,
            _ => Self::Unknown,
        }
    }
}

/// Coupon information echoed back in the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouponDetail {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "tipo")]
    pub kind: CouponKind,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "porcentaje", skip_serializing_if = "Option::is_none")]
    pub percent: Option<u32>,
}

impl CouponDetail {
    pub fn grants_free_shipping(&self) -> bool {
        self.kind == CouponKind::FreeShipping
    }
}

/// Trims and uppercases a raw code. Blank codes count as no coupon.
pub fn normalize_code(raw: Option<&str>) -> Option<String> {
    raw.map(|c| c.trim().to_uppercase()).filter(|c| !c.is_empty())
}

/// Computes the coupon discount on `subtotal`.
///
/// Only the percentage coupon yields money back; the free shipping coupon is
/// reported through the detail and consumed by the shipping step.
pub fn apply_coupon(
    subtotal: Money,
    raw_code: Option<&str>,
    discount_rate: Decimal,
) -> Result<(Money, Option<CouponDetail>)> {
    let Some(code) = normalize_code(raw_code) else {
        return Ok((Money::ZERO, None));
    };

    let kind = CouponKind::from_code(&code);
    let (discount, description, percent) = match kind {
        CouponKind::PercentDiscount => {
            let percent = percent_of(discount_rate);
            (
                subtotal.checked_scale(discount_rate)?.rounded(),
                format!("{percent}% de descuento sobre el subtotal"),
                Some(percent),
            )
        }
        CouponKind::FreeShipping => (Money::ZERO, "Envío gratuito".to_string(), None),
        CouponKind::Unknown => (Money::ZERO, "Cupón no reconocido".to_string(), None),
    };

    Ok((
        discount,
        Some(CouponDetail {
            code,
            kind,
            description,
            percent,
        }),
    ))
}

/// Converts a fractional rate (0.21) into a whole percentage (21).
pub fn percent_of(rate: Decimal) -> u32 {
    (rate * Decimal::ONE_HUNDRED)
        .round()
        .to_u32()
        .unwrap_or_default()
}
