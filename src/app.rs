use crate::{
    components::{AppShell, NotificationProvider},
    features::auth::state::AuthProvider,
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component: notifications wrap auth so guards can raise toasts, and the
/// shell sits inside the router so the sidebar can follow the location.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <NotificationProvider>
            <AuthProvider>
                <Router>
                    <AppShell>
                        <AppRoutes />
                    </AppShell>
                </Router>
            </AuthProvider>
        </NotificationProvider>
    }
}
