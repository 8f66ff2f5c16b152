use super::coupon::CouponDetail;
use super::money::Money;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShippingReason {
    #[serde(rename = "cupon")]
    Coupon,
    #[serde(rename = "umbral")]
    ThresholdMet,
    #[serde(rename = "tarifa_base")]
    BaseRate,
}

/// Shipping fee for an order. The threshold is compared against the
/// subtotal before any discount.
pub fn shipping_for(
    subtotal: Money,
    coupon: Option<&CouponDetail>,
    base_fee: Money,
    free_threshold: Money,
) -> (Money, ShippingReason) {
    if coupon.is_some_and(CouponDetail::grants_free_shipping) {
        (Money::ZERO, ShippingReason::Coupon)
    } else if subtotal >= free_threshold {
        (Money::ZERO, ShippingReason::ThresholdMet)
    } else {
        (base_fee, ShippingReason::BaseRate)
    }
}
