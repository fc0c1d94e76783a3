//! Auth session state and context for the frontend. The provider loads the
//! stored flags, checks them against the backend once on mount and exposes
//! derived signals for guards, the sidebar and routes. Flags are mirrored in
//! `localStorage`; the session cookie stays `HttpOnly`.

use crate::{
    app_lib::{AppError, AuthMode, cookies, storage, storage::AuthSnapshot},
    features::{
        auth::{
            client,
            session::{VerifyOutcome, verify_outcome},
            types::{LoginRequest, LoginResponse},
        },
        navigation::{Page, login_destination},
        users,
    },
};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<AuthSnapshot>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
    pub username: Signal<String>,
}

impl AuthContext {
    fn new(session: RwSignal<AuthSnapshot>) -> Self {
        Self {
            session,
            is_authenticated: Signal::derive(move || session.with(|s| s.is_logged_in)),
            is_admin: Signal::derive(move || session.with(AuthSnapshot::is_admin_session)),
            username: Signal::derive(move || session.with(|s| s.username.clone())),
        }
    }

    /// Re-reads the stored flags into the reactive snapshot.
    pub fn reload(&self) {
        self.session.set(AuthSnapshot::load(&storage::local()));
    }

    /// Stores the flags of a successful login.
    pub fn record_login(&self, username: &str, response: &LoginResponse) {
        let store = storage::local();
        storage::record_login(&store, username, response.grants_admin());
        if let Some(id) = response.id {
            storage::record_user_id(&store, id);
        }
        self.reload();
    }

    pub fn record_user_id(&self, user_id: i64) {
        storage::record_user_id(&storage::local(), user_id);
        self.reload();
    }

    /// Drops admin rights after the backend refused an admin call.
    pub fn revoke_admin(&self) {
        storage::local().set_flag(storage::IS_ADMIN, false);
        self.reload();
    }

    /// Clears the stored flags without leaving the page.
    pub fn clear(&self) {
        storage::clear_auth(&storage::local());
        self.reload();
    }
}

/// Posts credentials, stores the session flags and returns the page to open
/// next. The user id is fetched best effort when the login answer lacks it.
pub async fn sign_in(
    auth: AuthContext,
    username: String,
    password: String,
) -> Result<String, AppError> {
    let response = client::login(&LoginRequest {
        username: username.clone(),
        password,
    })
    .await?;
    tracing::info!(%username, admin = response.grants_admin(), "signed in");
    auth.record_login(&username, &response);

    if response.id.is_none() {
        match users::client::current_user(AuthMode::Anonymous).await {
            Ok(Some(user)) => auth.record_user_id(user.id),
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "could not load the current user id"),
        }
    }

    let remembered = storage::take_redirect(&storage::session());
    Ok(login_destination(
        remembered.as_deref(),
        auth.session.with_untracked(|s| s.is_admin),
    ))
}

/// Clears the stored flags and readable cookies, then reloads at the home page
/// so every component starts from a clean state.
pub fn sign_out() {
    tracing::info!("signing out");
    storage::clear_auth(&storage::local());
    cookies::clear_all();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

/// Checks the stored session against `GET /users/current`. Runs only when the
/// flags claim a login. Rejected sessions on protected pages go to login.
async fn verify(auth: AuthContext) {
    if !auth.session.with_untracked(|s| s.is_logged_in) {
        return;
    }

    let result = users::client::current_user(AuthMode::Anonymous).await;
    match verify_outcome(&result) {
        VerifyOutcome::Valid => {
            if let Ok(Some(user)) = result {
                auth.record_user_id(user.id);
            }
        }
        VerifyOutcome::Invalid => {
            if let Err(err) = &result {
                tracing::info!(error = %err, "stored session could not be confirmed");
            }
            auth.clear();
            let navigation = storage::session();
            let current = storage::current_page(&navigation).unwrap_or_default();
            if Page::from_path(&current).is_protected() {
                storage::remember_redirect(&navigation, &current);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&Page::Login.path());
                }
            }
        }
    }
}

/// Provides auth context and verifies the stored session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(AuthSnapshot::load(&storage::local()));
    let auth = AuthContext::new(session);
    provide_context(auth);

    spawn_local(verify(auth));

    view! { {children()} }
}

/// Returns the current auth context or a fallback anonymous context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(AuthSnapshot::anonymous())))
}
