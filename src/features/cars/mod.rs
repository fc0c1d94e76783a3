//! Car catalogue: the resource types, list filtering and the REST client.

pub(crate) mod catalog;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
