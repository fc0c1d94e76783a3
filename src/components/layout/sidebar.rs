//! Side navigation. Links depend on the stored session:
//! 1. Everyone: Home, Cars
//! 2. Guests: Login
//! 3. Signed in: My Pages, Logout
//! 4. Admins: Admin

use crate::{
    app_lib::{build_info, storage},
    features::{
        auth::state::{sign_out, use_auth},
        sidebar::SidebarState,
    },
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar(state: RwSignal<SidebarState>) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let pathname = move || location.pathname.get();
    let collapsed = move || state.get().collapsed;

    view! {
        <Show when=move || state.get().shows_overlay()>
            <div
                class="fixed inset-0 z-20 bg-gray-900/50 md:hidden"
                on:click=move |_| state.update(|s| *s = s.dismissed())
            ></div>
        </Show>
        <aside
            class="fixed md:static inset-y-0 left-0 z-30 flex-shrink-0 flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto transition-all"
            class:w-64=move || !collapsed()
            class:w-0=move || collapsed() && state.get().mobile
            class:w-16=move || collapsed() && !state.get().mobile
        >
            <div class="px-4 py-5">
                <Show when=move || auth.is_authenticated.get() && !collapsed()>
                    <p class="text-sm text-gray-600 dark:text-gray-300 truncate">
                        {move || format!("Welcome, {}", auth.username.get())}
                    </p>
                </Show>
            </div>
            <nav class="flex-1 px-2 space-y-1">
                <SidebarLink target="/" icon="home" label="Home" active=move || pathname() == "/" state=state />
                <SidebarLink
                    target="/rental"
                    icon="directions_car"
                    label="Cars"
                    active=move || pathname() == "/rental" || pathname().starts_with("/booking")
                    state=state
                />
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=move || view! {
                        <SidebarLink target="/login" icon="login" label="Login" active=move || pathname() == "/login" state=state />
                    }
                >
                    <SidebarLink target="/user" icon="person" label="My Pages" active=move || pathname() == "/user" state=state />
                </Show>
                <Show when=move || auth.is_admin.get()>
                    <SidebarLink target="/admin" icon="admin_panel_settings" label="Admin" active=move || pathname() == "/admin" state=state />
                </Show>
                <Show when=move || auth.is_authenticated.get()>
                    <button
                        type="button"
                        class="w-full group flex items-center px-2 py-2 text-sm font-medium rounded-md text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800"
                        on:click=move |_| sign_out()
                    >
                        <span class="material-symbols-outlined mr-3 text-xl text-gray-400">"logout"</span>
                        <Show when=move || !collapsed()>"Logout"</Show>
                    </button>
                </Show>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <Show when=move || !collapsed()>
                    <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                        {format!("Wigell Car Rentals {} ({})", build_info::version(), build_info::git_commit_hash())}
                    </p>
                </Show>
            </div>
        </aside>
    }
}

/// Hamburger button that flips the sidebar and stores the choice.
#[component]
pub fn SidebarToggle(state: RwSignal<SidebarState>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700"
            aria-label="Toggle navigation"
            aria-expanded=move || (!state.get().collapsed).to_string()
            on:click=move |_| state.update(|s| *s = s.toggled(&storage::local()))
        >
            <span class="material-symbols-outlined">"menu"</span>
        </button>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
    state: RwSignal<SidebarState>,
) -> impl IntoView
where
    F: Fn() -> bool + Copy + Send + Sync + 'static,
{
    view! {
        <A
            href=target
            {..}
            class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class=("text-blue-600", move || active())
            class=("bg-blue-50", move || active())
            class=("dark:bg-blue-900", move || active())
            class=("text-gray-600", move || !active())
            class=("dark:text-gray-300", move || !active())
            class=("hover:bg-gray-50", move || !active())
            title=label
            on:click=move |_| state.update(|s| *s = s.after_navigation())
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class=("text-blue-600", move || active())
                class=("text-gray-400", move || !active())
            >
                {icon}
            </span>
            <Show when=move || !state.get().collapsed>{label}</Show>
        </A>
    }
}
