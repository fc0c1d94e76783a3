use crate::{
    app_lib::storage,
    components::use_notifications,
    features::{
        auth::state::use_auth,
        navigation::{Access, AccessDecision, decide},
    },
};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Renders `children` only when the stored session satisfies `access`. The
/// session is read untracked so a login on a guest page does not race the
/// page's own redirect. UX-only; real access control lives on the API.
#[component]
fn AccessGate(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let return_to = location.pathname.get();
        auth.session.with_untracked(|session| decide(access, return_to, session))
    });

    Effect::new(move |_| match decision.get() {
        AccessDecision::Allow => {}
        AccessDecision::Login { return_to } => {
            storage::remember_redirect(&storage::session(), &return_to);
            navigate("/login", Default::default());
        }
        AccessDecision::Home { notice } => {
            if let Some(notice) = notice {
                notifications.error(notice);
            }
            navigate("/", Default::default());
        }
    });

    view! {
        <Show when=move || decision.get() == AccessDecision::Allow>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <AccessGate access=Access::Authenticated children=children /> }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! { <AccessGate access=Access::Admin children=children /> }
}

/// Login and registration forms are pointless for a signed-in visitor.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    view! { <AccessGate access=Access::GuestOnly children=children /> }
}
