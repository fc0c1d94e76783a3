//! Auth feature module: login, registration, logout, the start-up session
//! check and the route guards. It keeps authentication logic out of the UI.
//! Passwords pass through here and must never be logged.
//!
//! Flow Overview: login posts credentials and the backend sets the session
//! cookie; the client mirrors non-sensitive flags in storage and then picks
//! the next page. Registration creates the account and signs in with the same
//! credentials. Logout clears flags and cookies and reloads the app.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{GuestOnly, RequireAdmin, RequireAuth};
