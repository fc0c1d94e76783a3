mod admin;
mod booking;
mod home;
mod login;
mod not_found;
mod register;
mod rental;
mod user;

pub(crate) use admin::AdminPage;
pub(crate) use booking::BookingPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use rental::RentalPage;
pub(crate) use user::UserPage;

use crate::{app_lib::storage, features::navigation::Page};
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    components::{Route, Routes},
    hooks::{use_location, use_navigate},
    path,
};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <PageTracker />
        <Routes fallback=|| view! { <LegacyPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/rental") view=RentalPage />
            <Route path=path!("/booking") view=BookingPage />
            <Route path=path!("/booking/:car_id") view=BookingPage />
            <Route path=path!("/user") view=UserPage />
            <Route path=path!("/admin") view=AdminPage />
        </Routes>
    }
}

/// Records the current page for session checks and keeps the document title
/// in sync with the route.
#[component]
fn PageTracker() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        storage::record_current_page(&storage::session(), &path);
        let page = Page::from_path(&path);
        tracing::debug!(%path, page = page.label(), "navigated");
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(&page.title());
        }
    });
}

/// Unmatched paths: old `*.html` page names are replaced by their route,
/// anything else renders the not-found page.
#[component]
fn LegacyPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let page = Page::from_path(&location.pathname.get_untracked());

    if page == Page::NotFound {
        return view! { <NotFoundPage /> }.into_any();
    }

    Effect::new(move |_| {
        navigate(
            &page.path(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
    ().into_any()
}
