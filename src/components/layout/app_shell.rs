//! Shared layout wrapper with the sidebar, a top bar and the content
//! container. It owns the sidebar state and keeps it in step with the window
//! width. Navigation remains client-side; the backend enforces access control.

use crate::{
    app_lib::storage,
    components::layout::sidebar::{Sidebar, SidebarToggle},
    features::sidebar::SidebarState,
};
use leptos::{ev, prelude::*};
use leptos_router::components::A;

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}

/// Wraps routes with the sidebar, a header and the main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let state = RwSignal::new(SidebarState::for_width(window_width(), &storage::local()));

    let resize = window_event_listener(ev::resize, move |_| {
        state.set(SidebarState::for_width(window_width(), &storage::local()));
    });
    on_cleanup(move || resize.remove());

    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <Sidebar state=state />
            <div class="flex-1 flex flex-col min-w-0">
                <header class="flex items-center gap-3 border-b border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 px-4 py-3">
                    <SidebarToggle state=state />
                    <A href="/" {..} class="flex items-center space-x-3">
                        <img src="/images/logo.svg" class="h-8" alt="Wigell" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Wigell Car Rentals"
                        </span>
                    </A>
                </header>
                <main class="flex-1">
                    <div class="container mx-auto p-4 mt-6">{children()}</div>
                </main>
            </div>
        </div>
    }
}
