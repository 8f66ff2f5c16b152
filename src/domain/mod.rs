//! Domain types for order pricing: money, order lines, coupons, shipping
//! rules and the summary returned to clients.

pub mod coupon;
pub mod money;
pub mod order;
pub mod ports;
pub mod shipping;
pub mod summary;
