//! Collapse state of the side navigation. Desktop widths honour the stored
//! preference; narrow screens always start collapsed and show an overlay
//! while the menu is open.

use crate::app_lib::storage::{KeyValueStore, SIDEBAR_COLLAPSED};

/// Viewport width (CSS pixels) below which the sidebar behaves as a drawer.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub mobile: bool,
}

impl SidebarState {
    /// State for the current width on load or resize.
    pub fn for_width(width: f64, store: &impl KeyValueStore) -> Self {
        let mobile = is_mobile(width);
        Self {
            collapsed: mobile || store.flag(SIDEBAR_COLLAPSED),
            mobile,
        }
    }

    /// Flips the state and remembers the choice.
    pub fn toggled(self, store: &impl KeyValueStore) -> Self {
        let collapsed = !self.collapsed;
        store.set_flag(SIDEBAR_COLLAPSED, collapsed);
        Self { collapsed, ..self }
    }

    /// Drawer closes after navigating on mobile; desktop stays as it is.
    pub fn after_navigation(self) -> Self {
        if self.mobile {
            Self {
                collapsed: true,
                ..self
            }
        } else {
            self
        }
    }

    /// Overlay click.
    pub fn dismissed(self) -> Self {
        Self {
            collapsed: true,
            ..self
        }
    }

    pub fn shows_overlay(self) -> bool {
        self.mobile && !self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::storage::memory::MemoryStore;

    #[test]
    fn desktop_uses_stored_preference() {
        let store = MemoryStore::default();
        assert!(!SidebarState::for_width(1280.0, &store).collapsed);
        store.set_flag(SIDEBAR_COLLAPSED, true);
        assert!(SidebarState::for_width(1280.0, &store).collapsed);
    }

    #[test]
    fn mobile_always_starts_collapsed() {
        let store = MemoryStore::default();
        let state = SidebarState::for_width(767.0, &store);
        assert!(state.mobile);
        assert!(state.collapsed);
        assert!(!state.shows_overlay());
        assert!(!SidebarState::for_width(768.0, &store).mobile);
    }

    #[test]
    fn toggle_persists_and_overlay_follows() {
        let store = MemoryStore::default();
        let open = SidebarState::for_width(500.0, &store).toggled(&store);
        assert!(!open.collapsed);
        assert!(open.shows_overlay());
        assert_eq!(store.get(SIDEBAR_COLLAPSED).as_deref(), Some("false"));

        assert!(open.dismissed().collapsed);
        assert!(open.after_navigation().collapsed);
    }

    #[test]
    fn navigation_keeps_desktop_state() {
        let store = MemoryStore::default();
        let desktop = SidebarState::for_width(1024.0, &store);
        assert_eq!(desktop.after_navigation(), desktop);
    }
}
