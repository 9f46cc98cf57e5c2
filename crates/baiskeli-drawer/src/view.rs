//! # Render Models
//!
//! Serializable view structs the frontend renders verbatim.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DrawerView                                                             │
//! │  ├── open: bool                                                         │
//! │  ├── total_quantity        (header badge: "3 items")                   │
//! │  ├── items: [ItemRow]      (one row per line item)                     │
//! │  │     id, name, category, image, quantity,                            │
//! │  │     unit_price_display, line_total_display                          │
//! │  └── summary: Option<SummaryView>                                      │
//! │        │                                                                │
//! │        ├── None  ⇔ cart is empty  (footer fully suppressed -           │
//! │        │          the raw pricing output for an empty cart would       │
//! │        │          show a misleading KSh 300 shipping fee)              │
//! │        └── Some:                                                        │
//! │              subtotal_display, shipping_fee_display, total_display,    │
//! │              free_shipping_nudge: Option<String>                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All money fields are pre-formatted strings: the frontend never does
//! arithmetic or locale work.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use baiskeli_core::pricing::price_cart;
use baiskeli_core::types::{LineItem, ShippingPolicy};

use crate::format::MoneyFormatter;

// =============================================================================
// Item Row
// =============================================================================

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    /// Join key for the row's stepper and remove controls.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Always a usable asset reference (placeholder substituted upstream).
    pub image: String,
    pub quantity: i64,
    pub unit_price_display: String,
    pub line_total_display: String,
}

impl ItemRow {
    fn from_item(item: &LineItem, formatter: &dyn MoneyFormatter) -> Self {
        ItemRow {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            image: item.image().to_string(),
            quantity: item.quantity,
            unit_price_display: formatter.format(item.unit_price),
            line_total_display: formatter.format(item.line_total()),
        }
    }
}

// =============================================================================
// Summary View
// =============================================================================

/// The pricing footer. Only present for non-empty carts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub subtotal_display: String,
    pub shipping_fee_display: String,
    pub total_display: String,
    /// "Add KSh X more for free shipping", while below the threshold.
    pub free_shipping_nudge: Option<String>,
}

// =============================================================================
// Drawer View
// =============================================================================

/// Everything the frontend needs to paint the drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DrawerView {
    /// Whether the drawer is visible.
    pub open: bool,
    /// Sum of quantities across rows (header badge).
    pub total_quantity: i64,
    pub items: Vec<ItemRow>,
    /// `None` for an empty cart: the footer must not render at all.
    pub summary: Option<SummaryView>,
}

impl DrawerView {
    /// Assembles the render model for one snapshot.
    ///
    /// Pricing is derived fresh on every call; nothing here is cached.
    pub fn build(
        items: &[LineItem],
        policy: &ShippingPolicy,
        formatter: &dyn MoneyFormatter,
        open: bool,
    ) -> Self {
        let rows = items
            .iter()
            .map(|item| ItemRow::from_item(item, formatter))
            .collect();

        // Empty cart: suppress the footer entirely rather than show the
        // raw flat fee against a zero subtotal
        let summary = if items.is_empty() {
            None
        } else {
            let breakdown = price_cart(items, policy);
            let free_shipping_nudge = breakdown
                .remaining_for_free_shipping(policy)
                .map(|remaining| {
                    format!(
                        "Add {} more for free shipping",
                        formatter.format(remaining)
                    )
                });

            Some(SummaryView {
                subtotal_display: formatter.format(breakdown.subtotal),
                shipping_fee_display: formatter.format(breakdown.shipping_fee),
                total_display: formatter.format(breakdown.total),
                free_shipping_nudge,
            })
        };

        DrawerView {
            open,
            total_quantity: items.iter().map(|i| i.quantity).sum(),
            items: rows,
            summary,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
