//! Order summary math for the simulated checkout.
//!
//! The cart store only reports a subtotal; shipping and tax are computed
//! here by the checkout flow. No payment processing happens anywhere.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat tax rate applied to the subtotal: 0.10.
const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
/// Express shipping flat rate: 15.99. Standard shipping is free.
const EXPRESS_SHIPPING: Decimal = Decimal::from_parts(1599, 0, 0, false, 2);

/// Shipping options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Free standard shipping.
    #[default]
    Standard,
    /// Flat-rate express shipping.
    Express,
}

impl ShippingMethod {
    /// Shipping cost for this method.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Self::Standard => Decimal::ZERO,
            Self::Express => EXPRESS_SHIPPING,
        }
    }
}

/// The cost breakdown presented at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Cart subtotal (sum of line totals).
    pub subtotal: Decimal,
    /// Shipping cost for the chosen method.
    pub shipping: Decimal,
    /// Tax on the subtotal.
    pub tax: Decimal,
    /// Amount due.
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the summary for a cart subtotal and shipping method.
    ///
    /// Tax is a flat rate on the subtotal only; shipping is untaxed.
    #[must_use]
    pub fn compute(subtotal: Decimal, method: ShippingMethod) -> Self {
        let shipping = method.rate();
        let tax = (subtotal * TAX_RATE).round_dp(2);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}
