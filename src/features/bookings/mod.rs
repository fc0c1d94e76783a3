//! Bookings: resource types, date and price rules, and the REST client.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod pricing;
pub(crate) mod types;
