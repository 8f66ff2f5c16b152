//! Application layer containing the pricing orchestration.
//!
//! This module defines the `PricingEngine`, which turns an incoming order
//! payload into an `OrderSummary` using an injected catalog and parameters.

pub mod pricing;
