use leptos::prelude::*;

/// Loading indicator with an optional caption under it.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label="Loading"
            ></div>
            {label.map(|label| view! { <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p> })}
        </div>
    }
}
