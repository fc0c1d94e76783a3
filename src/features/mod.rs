//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused, while auth rules, pricing and API paths
//! stay in dedicated feature areas.

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod bookings;
pub(crate) mod cars;
pub(crate) mod navigation;
pub(crate) mod sidebar;
pub(crate) mod users;
