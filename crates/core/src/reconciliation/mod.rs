//! Partial-fulfillment tracking for purchase and loan requests

pub mod reconciler;

pub use reconciler::{
    reconcile_item, reconcile_request, registration_tally, RegistrationTally,
};
