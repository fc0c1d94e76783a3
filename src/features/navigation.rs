//! Page catalogue and per-page access policy. Routes and guards decide where a
//! visitor may go from the stored [`AuthSnapshot`]; the backend still rejects
//! anything the session is not allowed to do.

use crate::app_lib::storage::AuthSnapshot;

pub const TITLE_PREFIX: &str = "Wigell Car Rentals";
pub const NO_ADMIN_PRIVILEGES: &str = "You do not have administrator privileges.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Rental,
    /// Booking form, optionally for a selected car.
    Booking(Option<i64>),
    User,
    Admin,
    NotFound,
}

/// Who may open a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    GuestOnly,
    Authenticated,
    Admin,
}

/// Result of checking a page against the stored session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// Send to login and come back to `return_to` afterwards.
    Login { return_to: String },
    /// Send home, optionally explaining why.
    Home { notice: Option<&'static str> },
}

impl Page {
    /// Resolves router paths and the legacy `*.html` page names.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_start_matches('/');
        let trimmed = trimmed.trim_end_matches('/');
        let (name, rest) = match trimmed.split_once('/') {
            Some((name, rest)) => (name, Some(rest)),
            None => (trimmed, None),
        };
        let name = name.strip_suffix(".html").unwrap_or(name);

        match (name, rest) {
            ("" | "home" | "index", None) => Page::Home,
            ("login", None) => Page::Login,
            ("register", None) => Page::Register,
            ("rental", None) => Page::Rental,
            ("booking", None) => Page::Booking(None),
            ("booking", Some(id)) => match id.parse() {
                Ok(id) => Page::Booking(Some(id)),
                Err(_) => Page::NotFound,
            },
            ("user", None) => Page::User,
            ("admin", None) => Page::Admin,
            _ => Page::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Login => "/login".to_string(),
            Page::Register => "/register".to_string(),
            Page::Rental => "/rental".to_string(),
            Page::Booking(Some(car_id)) => format!("/booking/{car_id}"),
            Page::Booking(None) => "/booking".to_string(),
            Page::User => "/user".to_string(),
            Page::Admin => "/admin".to_string(),
            Page::NotFound => "/404".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Rental => "Rental",
            Page::Booking(_) => "Booking",
            Page::User => "User",
            Page::Admin => "Admin",
            Page::NotFound => "Not Found",
        }
    }

    /// Document title, e.g. `Wigell Car Rentals - Rental`.
    pub fn title(&self) -> String {
        format!("{TITLE_PREFIX} - {}", self.label())
    }

    pub fn access(&self) -> Access {
        match self {
            Page::Login | Page::Register => Access::GuestOnly,
            Page::Booking(_) | Page::User => Access::Authenticated,
            Page::Admin => Access::Admin,
            Page::Home | Page::Rental | Page::NotFound => Access::Public,
        }
    }

    /// Pages that send a signed-out visitor to login.
    pub fn is_protected(&self) -> bool {
        matches!(self.access(), Access::Authenticated | Access::Admin)
    }
}

/// Applies an access level to the stored session. `return_to` is the page to
/// come back to after a login detour.
pub fn decide(access: Access, return_to: String, session: &AuthSnapshot) -> AccessDecision {
    match access {
        Access::Public => AccessDecision::Allow,
        Access::GuestOnly if session.is_logged_in => AccessDecision::Home { notice: None },
        Access::GuestOnly => AccessDecision::Allow,
        Access::Authenticated | Access::Admin if !session.is_logged_in => {
            AccessDecision::Login { return_to }
        }
        Access::Admin if !session.is_admin => AccessDecision::Home {
            notice: Some(NO_ADMIN_PRIVILEGES),
        },
        Access::Authenticated | Access::Admin => AccessDecision::Allow,
    }
}

/// Where to go after a successful login: a remembered page wins, otherwise
/// admins land on the dashboard and everyone else on the car list.
pub fn login_destination(remembered: Option<&str>, is_admin: bool) -> String {
    if let Some(path) = remembered {
        let page = Page::from_path(path);
        if page != Page::NotFound && page.access() != Access::GuestOnly {
            return page.path();
        }
    }
    if is_admin {
        Page::Admin.path()
    } else {
        Page::Rental.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access_decision(page: &Page, session: &AuthSnapshot) -> AccessDecision {
        decide(page.access(), page.path(), session)
    }

    fn session(is_logged_in: bool, is_admin: bool) -> AuthSnapshot {
        AuthSnapshot {
            is_logged_in,
            is_admin,
            username: "anna".to_string(),
            user_id: Some(1),
        }
    }

    #[test]
    fn legacy_page_names_resolve() {
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("index.html"), Page::Home);
        assert_eq!(Page::from_path("home.html"), Page::Home);
        assert_eq!(Page::from_path("rental.html"), Page::Rental);
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("booking.html"), Page::Booking(None));
        assert_eq!(Page::from_path("/booking/12"), Page::Booking(Some(12)));
        assert_eq!(Page::from_path("/booking/abc"), Page::NotFound);
        assert_eq!(Page::from_path("/garage"), Page::NotFound);
    }

    #[test]
    fn titles_use_the_page_label() {
        assert_eq!(Page::Home.title(), "Wigell Car Rentals - Home");
        assert_eq!(Page::Booking(Some(3)).title(), "Wigell Car Rentals - Booking");
    }

    #[test]
    fn guests_are_sent_to_login_for_protected_pages() {
        let guest = AuthSnapshot::anonymous();
        assert_eq!(
            access_decision(&Page::Booking(Some(4)), &guest),
            AccessDecision::Login {
                return_to: "/booking/4".to_string()
            }
        );
        assert_eq!(
            access_decision(&Page::Admin, &guest),
            AccessDecision::Login {
                return_to: "/admin".to_string()
            }
        );
        assert_eq!(access_decision(&Page::Rental, &guest), AccessDecision::Allow);
        assert_eq!(access_decision(&Page::Login, &guest), AccessDecision::Allow);
    }

    #[test]
    fn signed_in_users_skip_guest_pages() {
        assert_eq!(
            access_decision(&Page::Register, &session(true, false)),
            AccessDecision::Home { notice: None }
        );
    }

    #[test]
    fn admin_page_needs_admin_flag() {
        assert_eq!(
            access_decision(&Page::Admin, &session(true, false)),
            AccessDecision::Home {
                notice: Some(NO_ADMIN_PRIVILEGES)
            }
        );
        assert_eq!(
            access_decision(&Page::Admin, &session(true, true)),
            AccessDecision::Allow
        );
    }

    #[test]
    fn login_destination_prefers_remembered_page() {
        assert_eq!(login_destination(Some("booking.html"), true), "/booking");
        assert_eq!(login_destination(Some("/booking/7"), false), "/booking/7");
        assert_eq!(login_destination(None, true), "/admin");
        assert_eq!(login_destination(None, false), "/rental");
        assert_eq!(login_destination(Some("/login"), false), "/rental");
    }

    #[test]
    fn protected_pages_match_policy() {
        assert!(Page::User.is_protected());
        assert!(Page::Admin.is_protected());
        assert!(!Page::Rental.is_protected());
    }
}
