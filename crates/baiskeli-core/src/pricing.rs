//! # Pricing Module
//!
//! Pure derivation of cart totals from a line-item snapshot.
//!
//! ## Derivation Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pricing Derivation                                   │
//! │                                                                         │
//! │  [LineItem]                                                             │
//! │      │  Σ (unit_price × quantity)                                      │
//! │      ▼                                                                  │
//! │  subtotal ────────────────────────────┐                                 │
//! │      │                                │                                 │
//! │      │  > threshold?                  │                                 │
//! │      ▼                                │                                 │
//! │  shipping_fee (0 or flat_fee)         │                                 │
//! │      │                                │                                 │
//! │      └────────────► total ◄───────────┘                                 │
//! │                                                                         │
//! │  RECOMPUTED ON EVERY READ - never cached, never stored.                 │
//! │  Same input always produces the same output.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Threshold Is Strict
//! `shipping_fee = 0` only when `subtotal > threshold`. A cart at exactly
//! KSh 5,000 still pays the KSh 300 flat fee. Tests below lock this in.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{LineItem, ShippingPolicy};

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// The three derived monetary fields for a cart snapshot.
///
/// ## Empty-Cart Caveat
/// An empty snapshot yields `{0, flat_fee, flat_fee}` - the raw step
/// function does not special-case emptiness. The drawer's view layer
/// suppresses the summary footer entirely for empty carts, so this raw
/// output is never shown; callers must not assume it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    /// Σ (unit_price × quantity) over all line items.
    pub subtotal: Money,

    /// 0 above the free-shipping threshold, flat fee otherwise.
    pub shipping_fee: Money,

    /// subtotal + shipping_fee.
    pub total: Money,
}

impl PricingBreakdown {
    /// Amount still needed to qualify for free shipping.
    ///
    /// Returns `Some(threshold − subtotal)` while the subtotal is strictly
    /// below the threshold, `None` once at or past it. The drawer renders
    /// this as the "add KSh X more for free shipping" nudge, so it must
    /// track the same threshold the fee derivation used - hence a method
    /// here rather than a second comparison in the view layer.
    pub fn remaining_for_free_shipping(&self, policy: &ShippingPolicy) -> Option<Money> {
        if self.subtotal < policy.free_shipping_threshold {
            Some(policy.free_shipping_threshold.saturating_sub(self.subtotal))
        } else {
            None
        }
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Derives `{subtotal, shipping_fee, total}` from a snapshot.
///
/// Pure function: no side effects, deterministic, callable any number of
/// times per render.
///
/// ## Example
/// ```rust
/// use baiskeli_core::money::Money;
/// use baiskeli_core::pricing::price_cart;
/// use baiskeli_core::types::{LineItem, ShippingPolicy};
///
/// let items = vec![
///     LineItem::new("h-1", "Helmet", "Accessories", Money::new(1_800), 1, None).unwrap(),
/// ];
/// let breakdown = price_cart(&items, &ShippingPolicy::default());
///
/// assert_eq!(breakdown.subtotal, Money::new(1_800));
/// assert_eq!(breakdown.shipping_fee, Money::new(300));
/// assert_eq!(breakdown.total, Money::new(2_100));
/// ```
pub fn price_cart(items: &[LineItem], policy: &ShippingPolicy) -> PricingBreakdown {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();

    // Strict comparison: exactly at the threshold still pays the fee
    let shipping_fee = if subtotal > policy.free_shipping_threshold {
        Money::zero()
    } else {
        policy.flat_fee
    };

    PricingBreakdown {
        subtotal,
        shipping_fee,
        total: subtotal + shipping_fee,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, unit_price: i64, quantity: i64) -> LineItem {
        LineItem::new(
            id,
            format!("Product {}", id),
            "Test",
            Money::new(unit_price),
            quantity,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_subtotal_over_threshold_ships_free() {
        // Gravel bike + two tubes
        let items = vec![item("1", 45_000, 1), item("2", 2_500, 2)];
        let breakdown = price_cart(&items, &ShippingPolicy::default());

        assert_eq!(breakdown.subtotal, Money::new(50_000));
        assert_eq!(breakdown.shipping_fee, Money::zero());
        assert_eq!(breakdown.total, Money::new(50_000));
    }

    #[test]
    fn test_subtotal_under_threshold_pays_flat_fee() {
        let items = vec![item("1", 1_800, 1)];
        let breakdown = price_cart(&items, &ShippingPolicy::default());

        assert_eq!(breakdown.subtotal, Money::new(1_800));
        assert_eq!(breakdown.shipping_fee, Money::new(300));
        assert_eq!(breakdown.total, Money::new(2_100));
    }

    /// Locks in the strict `>` comparison: exactly at the threshold is
    /// NOT free shipping. Do not change without product-owner sign-off.
    #[test]
    fn test_threshold_boundary_is_strict() {
        let policy = ShippingPolicy::default();

        let at_threshold = vec![item("1", 5_000, 1)];
        let breakdown = price_cart(&at_threshold, &policy);
        assert_eq!(breakdown.shipping_fee, Money::new(300));
        assert_eq!(breakdown.total, Money::new(5_300));

        let just_over = vec![item("1", 5_001, 1)];
        let breakdown = price_cart(&just_over, &policy);
        assert_eq!(breakdown.shipping_fee, Money::zero());
    }

    #[test]
    fn test_empty_cart_raw_output() {
        let breakdown = price_cart(&[], &ShippingPolicy::default());

        assert_eq!(breakdown.subtotal, Money::zero());
        // Raw step function still charges the fee; the view layer is
        // responsible for never showing this
        assert_eq!(breakdown.shipping_fee, Money::new(300));
        assert_eq!(breakdown.total, Money::new(300));
    }

    #[test]
    fn test_pricing_is_pure() {
        let items = vec![item("1", 1_800, 1), item("2", 450, 3)];
        let policy = ShippingPolicy::default();

        let first = price_cart(&items, &policy);
        let second = price_cart(&items, &policy);
        assert_eq!(first, second);
    }

    #[test]
    fn test_remaining_for_free_shipping() {
        let policy = ShippingPolicy::default();

        let under = price_cart(&[item("1", 1_800, 1)], &policy);
        assert_eq!(
            under.remaining_for_free_shipping(&policy),
            Some(Money::new(3_200))
        );

        let over = price_cart(&[item("1", 45_000, 1)], &policy);
        assert_eq!(over.remaining_for_free_shipping(&policy), None);

        // Exactly at the threshold: fee still applies, but the nudge is
        // gone (nothing "more" to add under the < comparison)
        let exact = price_cart(&[item("1", 5_000, 1)], &policy);
        assert_eq!(exact.remaining_for_free_shipping(&policy), None);
        assert_eq!(exact.shipping_fee, Money::new(300));
    }
}
