//! Quantity reconciler
//!
//! Compares what was approved on each request line with what has already
//! been registered as assets, and reports what is left to register.
//!
//! When an item has no approval record yet, the requested quantity is
//! treated as approved. This keeps the registration form usable before the
//! approver acts, but it also means an unapproved line looks fully approved
//! here; callers that care must check `RequestItem::approval` themselves.

use std::collections::HashMap;

use netasset_common::round4;
use netasset_domain::{Asset, ItemReconciliation, Request, RequestFulfillment, RequestItem};

/// Quantity already registered per request item id
pub type RegistrationTally = HashMap<String, f64>;

/// Reconcile a single line item against the registration tally.
///
/// `remaining_quantity = max(0, round4(approved - registered))`, so
/// over-registration reads as complete rather than negative.
#[must_use]
pub fn reconcile_item(item: &RequestItem, tally: &RegistrationTally) -> ItemReconciliation {
    let approved_quantity = item.approval.map_or(item.quantity, |a| a.approved_quantity);
    let registered_quantity = tally.get(&item.id).copied().unwrap_or(0.0);
    let remaining_quantity = round4(approved_quantity - registered_quantity).max(0.0);

    ItemReconciliation {
        item_id: item.id.clone(),
        approved_quantity,
        registered_quantity,
        remaining_quantity,
        is_complete: remaining_quantity == 0.0,
    }
}

/// Reconcile every non-rejected line of a request.
#[must_use]
pub fn reconcile_request(request: &Request, tally: &RegistrationTally) -> RequestFulfillment {
    let items: Vec<ItemReconciliation> = request
        .items
        .iter()
        .filter(|item| !item.is_rejected())
        .map(|item| reconcile_item(item, tally))
        .collect();

    let total_remaining = round4(items.iter().map(|i| i.remaining_quantity).sum());
    let is_fully_registered = items.iter().all(|i| i.is_complete);

    tracing::debug!(
        request_id = %request.id,
        items = items.len(),
        total_remaining,
        is_fully_registered,
        "Request reconciled"
    );

    RequestFulfillment { request_id: request.id.clone(), items, total_remaining, is_fully_registered }
}

/// Build the tally from assets registered against request items.
///
/// Individual assets count one unit each; bulk records count their initial
/// balance. Assets without an origin are ignored.
#[must_use]
pub fn registration_tally(assets: &[Asset]) -> RegistrationTally {
    let mut tally = RegistrationTally::new();
    for asset in assets {
        if let Some(origin) = &asset.origin {
            *tally.entry(origin.request_item_id.clone()).or_insert(0.0) +=
                asset.tracking.registered_units();
        }
    }
    for quantity in tally.values_mut() {
        *quantity = round4(*quantity);
    }
    tally
}
