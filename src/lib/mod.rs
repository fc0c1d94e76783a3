//! Shared frontend utilities: API access, configuration, errors, browser
//! storage, formatting and build metadata.
//!
//! ## Session model
//!
//! The backend owns the session through an `HttpOnly` cookie set by
//! `POST /auth/login`. The client mirrors a few non-sensitive flags
//! (`isLoggedIn`, `username`, `isAdmin`, `userId`) in `localStorage` so the UI
//! can render before any request completes. Those flags are hints only:
//!
//! 1. **Start-up:** when the flags say logged in, `GET /users/current` checks the
//!    cookie. Anything but a 2xx or 403, network failures included, clears
//!    the flags.
//! 2. **Any session call:** a 401 clears the flags and sends the browser to
//!    `/login`.
//! 3. **Logout:** flags and readable cookies are cleared and the page reloads.
//!
//! Nothing in this module stores passwords, and callers must not log them.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod cookies;
pub(crate) mod debounce;
pub(crate) mod errors;
pub(crate) mod format;
pub(crate) mod logging;
pub(crate) mod storage;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{AuthMode, delete, get_json, get_optional_json, post_json, post_text, put_json};
pub(crate) use errors::AppError;
