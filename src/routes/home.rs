use crate::{app_lib::theme::Theme, features::auth::state::use_auth, features::navigation::Page};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <section class="max-w-3xl mx-auto text-center space-y-6">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">"Wigell Car Rentals"</h1>
            <p class="text-lg text-gray-600 dark:text-gray-300">
                "Find the right car for your next trip and book it in a few clicks."
            </p>
            <div class="flex flex-col sm:flex-row justify-center gap-4">
                <A
                    href=Page::Rental.path()
                    {..}
                    class="inline-flex justify-center items-center px-5 py-3 text-base font-medium text-white rounded-lg bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:ring-blue-300 dark:focus:ring-blue-900"
                >
                    "Browse Cars"
                </A>
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=|| view! {
                        <A href=Page::Register.path() {..} class=Theme::BUTTON_SECONDARY>
                            "Create an Account"
                        </A>
                    }
                >
                    <A href=Page::User.path() {..} class=Theme::BUTTON_SECONDARY>
                        "My Pages"
                    </A>
                </Show>
            </div>
        </section>
    }
}
