//! Browser storage keys and the session flags kept in them. Auth flags live in
//! `localStorage` so they survive reloads; navigation bookkeeping lives in
//! `sessionStorage` and dies with the tab. The real session is the backend
//! cookie: these flags only drive the UI and must never hold secrets.

pub const IS_LOGGED_IN: &str = "isLoggedIn";
pub const USERNAME: &str = "username";
pub const IS_ADMIN: &str = "isAdmin";
pub const USER_ID: &str = "userId";
pub const CURRENT_PAGE: &str = "currentPage";
pub const REDIRECT_AFTER_LOGIN: &str = "redirectAfterLogin";
pub const SIDEBAR_COLLAPSED: &str = "sidebar-collapsed";

/// Keys removed on logout or when the backend rejects the session.
const AUTH_KEYS: [&str; 4] = [IS_LOGGED_IN, USERNAME, IS_ADMIN, USER_ID];

/// Display name used when no user is stored.
pub const GUEST_NAME: &str = "Guest";

/// String key/value storage, implemented by the browser's `Storage` objects.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn flag(&self, key: &str) -> bool {
        self.get(key).as_deref() == Some("true")
    }

    fn set_flag(&self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }
}

/// The stored view of the session used to render auth-dependent UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_logged_in: bool,
    pub is_admin: bool,
    pub username: String,
    pub user_id: Option<i64>,
}

impl AuthSnapshot {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            is_logged_in: store.flag(IS_LOGGED_IN),
            is_admin: store.flag(IS_ADMIN),
            username: store
                .get(USERNAME)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| GUEST_NAME.to_string()),
            user_id: store.get(USER_ID).and_then(|id| id.trim().parse().ok()),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            is_logged_in: false,
            is_admin: false,
            username: GUEST_NAME.to_string(),
            user_id: None,
        }
    }

    /// Admin links and pages need both flags; a stale admin flag alone is ignored.
    pub fn is_admin_session(&self) -> bool {
        self.is_logged_in && self.is_admin
    }
}

pub fn record_login(store: &impl KeyValueStore, username: &str, is_admin: bool) {
    store.set_flag(IS_LOGGED_IN, true);
    store.set(USERNAME, username);
    store.set_flag(IS_ADMIN, is_admin);
}

pub fn record_user_id(store: &impl KeyValueStore, user_id: i64) {
    store.set(USER_ID, &user_id.to_string());
}

pub fn clear_auth(store: &impl KeyValueStore) {
    for key in AUTH_KEYS {
        store.remove(key);
    }
}

pub fn remember_redirect(store: &impl KeyValueStore, path: &str) {
    store.set(REDIRECT_AFTER_LOGIN, path);
}

/// Reads and consumes the page remembered before a login detour.
pub fn take_redirect(store: &impl KeyValueStore) -> Option<String> {
    let target = store.get(REDIRECT_AFTER_LOGIN).filter(|path| !path.is_empty());
    store.remove(REDIRECT_AFTER_LOGIN);
    target
}

pub fn record_current_page(store: &impl KeyValueStore, path: &str) {
    store.set(CURRENT_PAGE, path);
}

pub fn current_page(store: &impl KeyValueStore) -> Option<String> {
    store.get(CURRENT_PAGE)
}

#[cfg(target_arch = "wasm32")]
pub use browser::{local, session};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;

    /// Wraps a browser `Storage`; a missing or blocked storage reads as empty.
    pub struct BrowserStore(Option<web_sys::Storage>);

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.as_ref()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if let Some(storage) = &self.0 {
                let _ = storage.set_item(key, value);
            }
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = &self.0 {
                let _ = storage.remove_item(key);
            }
        }
    }

    /// `window.localStorage`.
    pub fn local() -> BrowserStore {
        BrowserStore(
            web_sys::window()
                .and_then(|window| window.local_storage().ok())
                .flatten(),
        )
    }

    /// `window.sessionStorage`.
    pub fn session() -> BrowserStore {
        BrowserStore(
            web_sys::window()
                .and_then(|window| window.session_storage().ok())
                .flatten(),
        )
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::{cell::RefCell, collections::HashMap};

    #[derive(Default)]
    pub struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn empty_store_is_an_anonymous_guest() {
        let store = MemoryStore::default();
        assert_eq!(AuthSnapshot::load(&store), AuthSnapshot::anonymous());
    }

    #[test]
    fn record_login_sets_string_flags() {
        let store = MemoryStore::default();
        record_login(&store, "anna", true);
        record_user_id(&store, 42);

        assert_eq!(store.get(IS_LOGGED_IN).as_deref(), Some("true"));
        assert_eq!(store.get(IS_ADMIN).as_deref(), Some("true"));
        let snapshot = AuthSnapshot::load(&store);
        assert_eq!(snapshot.username, "anna");
        assert_eq!(snapshot.user_id, Some(42));
        assert!(snapshot.is_admin_session());
    }

    #[test]
    fn clear_auth_keeps_unrelated_keys() {
        let store = MemoryStore::default();
        record_login(&store, "anna", false);
        record_user_id(&store, 7);
        store.set_flag(SIDEBAR_COLLAPSED, true);

        clear_auth(&store);

        assert_eq!(AuthSnapshot::load(&store), AuthSnapshot::anonymous());
        assert!(store.flag(SIDEBAR_COLLAPSED));
    }

    #[test]
    fn stale_admin_flag_without_login_is_not_admin() {
        let store = MemoryStore::default();
        store.set_flag(IS_ADMIN, true);
        let snapshot = AuthSnapshot::load(&store);
        assert!(snapshot.is_admin);
        assert!(!snapshot.is_admin_session());
    }

    #[test]
    fn take_redirect_consumes_the_value() {
        let store = MemoryStore::default();
        remember_redirect(&store, "/admin");
        assert_eq!(take_redirect(&store).as_deref(), Some("/admin"));
        assert_eq!(take_redirect(&store), None);
    }

    #[test]
    fn current_page_is_recorded() {
        let store = MemoryStore::default();
        assert_eq!(current_page(&store), None);
        record_current_page(&store, "/rental");
        assert_eq!(current_page(&store).as_deref(), Some("/rental"));
    }

    #[test]
    fn unparsable_user_id_is_ignored() {
        let store = MemoryStore::default();
        store.set(USER_ID, "abc");
        assert_eq!(AuthSnapshot::load(&store).user_id, None);
    }
}
