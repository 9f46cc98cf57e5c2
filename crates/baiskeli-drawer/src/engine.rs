//! # Cart Drawer Engine
//!
//! Visibility state machine plus interaction handlers.
//!
//! ## Interaction Handlers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Drawer Interactions                                     │
//! │                                                                         │
//! │  UI Event                 Handler                Host Callback          │
//! │  ────────────             ─────────              ─────────────          │
//! │  "view cart" click ─────► open() ──────────────► (scroll lock only)    │
//! │  [+] on a row ──────────► increment() ─────────► update_quantity(n+1)  │
//! │  [−] on a row ──────────► decrement() ─────────► update_quantity(≥1)   │
//! │  qty field edit ────────► set_quantity() ──────► update_quantity(≥1)   │
//! │  trash icon ────────────► remove() ────────────► remove_item(id)       │
//! │  checkout button ───────► checkout() ──────────► checkout() + close    │
//! │  backdrop / X ──────────► close() ─────────────► close_requested()     │
//! │                                                                         │
//! │  Every quantity is clamped BEFORE the callback fires: the host is      │
//! │  never asked to apply a quantity below 1.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Visibility State Machine
//! ```text
//! ┌──────────┐   open()    ┌──────────┐
//! │  Closed  │────────────►│   Open   │   scroll lock held exactly
//! │ (initial)│◄────────────│          │   while in Open
//! └──────────┘   close()   └──────────┘
//!                checkout()
//! ```
//! Transitions into the current state are no-ops. Animation is a purely
//! visual concern layered on top by the frontend; the engine models only
//! the two states.

use tracing::debug;

use baiskeli_core::types::{LineItem, ShippingPolicy};
use baiskeli_core::validation::{clamp_decrement, clamp_increment, clamp_quantity};

use crate::actions::CartActions;
use crate::format::{KenyanShillingFormatter, MoneyFormatter};
use crate::scroll_lock::{ScrollHost, ScrollLock};
use crate::view::DrawerView;

// =============================================================================
// Visibility
// =============================================================================

/// The drawer's two-state visibility machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Hidden. Initial state; background scrolls freely.
    Closed,
    /// Visible; background scrolling suppressed.
    Open,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Closed
    }
}

// =============================================================================
// Cart Drawer
// =============================================================================

/// The cart drawer engine.
///
/// ## What It Holds
/// - visibility state and the scroll lock bound to it
/// - shipping policy and money formatter (display configuration)
///
/// ## What It Never Holds
/// - the line items. The host passes a fresh snapshot into every handler
///   and every render; the engine keeps no copy between calls.
pub struct CartDrawer<H: ScrollHost> {
    visibility: Visibility,
    scroll_lock: ScrollLock<H>,
    policy: ShippingPolicy,
    formatter: Box<dyn MoneyFormatter>,
}

impl<H: ScrollHost> CartDrawer<H> {
    /// Creates a closed drawer with the default policy and the
    /// Kenyan-shilling formatter.
    pub fn new(host: H) -> Self {
        Self::with_config(
            host,
            ShippingPolicy::default(),
            Box::new(KenyanShillingFormatter),
        )
    }

    /// Creates a closed drawer with explicit display configuration.
    pub fn with_config(
        host: H,
        policy: ShippingPolicy,
        formatter: Box<dyn MoneyFormatter>,
    ) -> Self {
        CartDrawer {
            visibility: Visibility::Closed,
            scroll_lock: ScrollLock::new(host),
            policy,
            formatter,
        }
    }

    /// Current visibility state.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    // -------------------------------------------------------------------------
    // Visibility Transitions
    // -------------------------------------------------------------------------

    /// Opens the drawer, acquiring the scroll lock. No-op if already open.
    pub fn open(&mut self) {
        if self.visibility == Visibility::Open {
            return;
        }
        debug!("drawer open");
        self.scroll_lock.acquire();
        self.visibility = Visibility::Open;
    }

    /// Closes the drawer, releasing the scroll lock and notifying the
    /// host. No-op if already closed.
    ///
    /// Triggered by the backdrop, the close control, or checkout
    /// completion.
    pub fn close(&mut self, actions: &mut dyn CartActions) {
        if self.visibility == Visibility::Closed {
            return;
        }
        debug!("drawer close");
        self.scroll_lock.release();
        self.visibility = Visibility::Closed;
        actions.close_requested();
    }

    // -------------------------------------------------------------------------
    // Quantity Handlers
    // -------------------------------------------------------------------------

    /// Handles a [+] click: requests `current + 1`, capped.
    ///
    /// Unknown `item_id`: no callback fires at all (the host may have
    /// removed the row since this snapshot was taken).
    pub fn increment(&self, items: &[LineItem], item_id: &str, actions: &mut dyn CartActions) {
        let Some(item) = find(items, item_id) else {
            debug!(item_id = %item_id, "increment on unknown item, ignoring");
            return;
        };

        let new_quantity = clamp_increment(item.quantity);
        debug!(item_id = %item_id, quantity = %new_quantity, "increment");
        actions.update_quantity(item_id, new_quantity);
    }

    /// Handles a [−] click: requests `current − 1`, floored at 1.
    ///
    /// A decrement can never remove the row; at quantity 1 the host is
    /// asked for 1 again (an idempotent no-op on its side).
    pub fn decrement(&self, items: &[LineItem], item_id: &str, actions: &mut dyn CartActions) {
        let Some(item) = find(items, item_id) else {
            debug!(item_id = %item_id, "decrement on unknown item, ignoring");
            return;
        };

        let new_quantity = clamp_decrement(item.quantity);
        debug!(item_id = %item_id, quantity = %new_quantity, "decrement");
        actions.update_quantity(item_id, new_quantity);
    }

    /// Handles a direct quantity edit: clamps the requested value into
    /// range before asking the host. Zero and below clamp to 1 - they do
    /// NOT remove the item.
    pub fn set_quantity(
        &self,
        items: &[LineItem],
        item_id: &str,
        requested: i64,
        actions: &mut dyn CartActions,
    ) {
        if find(items, item_id).is_none() {
            debug!(item_id = %item_id, "set_quantity on unknown item, ignoring");
            return;
        }

        let new_quantity = clamp_quantity(requested);
        debug!(item_id = %item_id, requested = %requested, quantity = %new_quantity, "set_quantity");
        actions.update_quantity(item_id, new_quantity);
    }

    /// Handles the trash icon: the only path that eliminates a row.
    pub fn remove(&self, items: &[LineItem], item_id: &str, actions: &mut dyn CartActions) {
        if find(items, item_id).is_none() {
            debug!(item_id = %item_id, "remove on unknown item, ignoring");
            return;
        }

        debug!(item_id = %item_id, "remove");
        actions.remove_item(item_id);
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Handles the checkout button: signals intent, then closes.
    ///
    /// No client-side validation happens here - blocking an empty-cart
    /// checkout is the host's (or the backend's) decision.
    pub fn checkout(&mut self, actions: &mut dyn CartActions) {
        debug!("checkout");
        actions.checkout();
        self.close(actions);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Builds the render model for the current snapshot.
    ///
    /// Pricing and formatting are re-derived on every call.
    pub fn render(&self, items: &[LineItem]) -> DrawerView {
        DrawerView::build(items, &self.policy, self.formatter.as_ref(), self.is_open())
    }
}

/// Snapshot lookup by the host's join key.
fn find<'a>(items: &'a [LineItem], item_id: &str) -> Option<&'a LineItem> {
    items.iter().find(|i| i.id == item_id)
}

// =============================================================================
// Unit Tests
// =============================================================================
