//! User accounts: the profile resource, the "My Pages" form rules and the
//! REST client.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod profile;
pub(crate) mod types;
