//! Modal dialogs for admin edits and destructive confirmations.

use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the close
/// button runs `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-40 flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-gray-900/50"
                on:click=move |_| on_close.run(())
            ></div>
            <div
                class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto bg-white dark:bg-gray-800 rounded-lg shadow-xl"
                role="dialog"
                aria-modal="true"
            >
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        {move || title.get()}
                    </h2>
                    <button
                        type="button"
                        class="text-gray-400 hover:text-gray-900 dark:hover:text-white"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <span class="material-symbols-outlined">"close"</span>
                    </button>
                </div>
                <div class="px-6 py-4">{children()}</div>
            </div>
        </div>
    }
}

/// A pending destructive action waiting for the user's answer.
#[derive(Clone)]
pub struct Confirmation {
    pub message: String,
    pub on_confirm: Callback<()>,
}

/// Renders the confirmation held in `pending`, if any, and clears it once
/// answered.
#[component]
pub fn ConfirmDialog(pending: RwSignal<Option<Confirmation>>) -> impl IntoView {
    let close = Callback::new(move |()| pending.set(None));

    move || {
        pending.get().map(|confirmation| {
            let on_confirm = confirmation.on_confirm;
            view! {
                <Modal title="Please confirm".to_string() on_close=close>
                    <p class="text-sm text-gray-700 dark:text-gray-300">{confirmation.message}</p>
                    <div class="mt-6 flex justify-end gap-3">
                        <button
                            type="button"
                            class=crate::app_lib::theme::Theme::BUTTON_SECONDARY
                            on:click=move |_| pending.set(None)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=crate::app_lib::theme::Theme::BUTTON_DANGER
                            on:click=move |_| {
                                pending.set(None);
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </Modal>
            }
        })
    }
}
