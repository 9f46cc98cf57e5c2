//! # Mutation Contract
//!
//! The dependency-injected seam between the drawer and the host's store.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Owns What                                        │
//! │                                                                         │
//! │  Host store (in-memory, persisted, networked - drawer doesn't care)    │
//! │  ├── owns the canonical Vec<LineItem>                                  │
//! │  ├── applies update_quantity / remove_item idempotently                │
//! │  └── decides what checkout and close actually do                       │
//! │                                                                         │
//! │  CartDrawer                                                             │
//! │  ├── computes WHAT to request (clamped quantities, which id)           │
//! │  └── never sees whether the request "worked" - fire and forget         │
//! │                                                                         │
//! │  Swapping the store implementation never touches the engine.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract Guarantees
//! - The drawer never requests a quantity below 1
//! - Unknown ids are the host's problem to ignore (and the drawer already
//!   skips callbacks for ids absent from its snapshot)
//! - No method returns a result: failures are silent by design

// =============================================================================
// Cart Actions
// =============================================================================

/// Mutation callbacks implemented by the host's cart store.
///
/// All methods are fire-and-forget: the engine surfaces no errors and
/// expects none back. The host applies each request to its canonical
/// state idempotently; a request against an id it no longer holds is a
/// silent no-op (another tab or a stock sweep may have removed it first).
pub trait CartActions {
    /// Sets the quantity of the item with `item_id`.
    ///
    /// The engine guarantees `new_quantity >= 1`.
    fn update_quantity(&mut self, item_id: &str, new_quantity: i64);

    /// Deletes the line item with `item_id`. No-op if already absent.
    fn remove_item(&mut self, item_id: &str);

    /// Signals intent to proceed to checkout.
    ///
    /// The engine performs no validation first - an empty-cart checkout
    /// is the host's (or the backend's) call to block.
    fn checkout(&mut self);

    /// Signals that the drawer should become hidden. Pure visibility,
    /// no state mutation implied.
    fn close_requested(&mut self);
}

// =============================================================================
// Recording Test Double
// =============================================================================

/// A `CartActions` implementation that records every invocation.
///
/// Used throughout the engine tests to assert exactly which callbacks
/// fired and with what arguments.
#[derive(Debug, Default)]
pub struct RecordingActions {
    /// `(item_id, new_quantity)` per update_quantity call, in order.
    pub quantity_updates: Vec<(String, i64)>,
    /// item_id per remove_item call, in order.
    pub removals: Vec<String>,
    pub checkouts: usize,
    pub close_requests: usize,
}

impl CartActions for RecordingActions {
    fn update_quantity(&mut self, item_id: &str, new_quantity: i64) {
        self.quantity_updates
            .push((item_id.to_string(), new_quantity));
    }

    fn remove_item(&mut self, item_id: &str) {
        self.removals.push(item_id.to_string());
    }

    fn checkout(&mut self) {
        self.checkouts += 1;
    }

    fn close_requested(&mut self) {
        self.close_requests += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_actions_records_in_order() {
        let mut actions = RecordingActions::default();

        actions.update_quantity("a", 2);
        actions.remove_item("b");
        actions.update_quantity("a", 3);
        actions.checkout();
        actions.close_requested();

        assert_eq!(
            actions.quantity_updates,
            vec![("a".to_string(), 2), ("a".to_string(), 3)]
        );
        assert_eq!(actions.removals, vec!["b".to_string()]);
        assert_eq!(actions.checkouts, 1);
        assert_eq!(actions.close_requests, 1);
    }
}
