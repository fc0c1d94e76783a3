//! Transient notifications stacked in the corner of the screen. Each toast
//! removes itself after a few seconds.

use crate::components::AlertKind;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays visible unless the caller asks otherwise.
pub const DEFAULT_TOAST_MS: u32 = 3_000;

#[derive(Clone, Debug)]
struct Toast {
    id: u64,
    kind: AlertKind,
    message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(AlertKind::Success, message, DEFAULT_TOAST_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(AlertKind::Error, message, DEFAULT_TOAST_MS);
    }

    fn show(&self, kind: AlertKind, message: impl Into<String>, duration_ms: u32) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            });
        });

        let toasts = self.toasts;
        Timeout::new(duration_ms, move || {
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        })
        .forget();
    }
}

/// Provides the notification context and renders the toast stack.
#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let notifications = Notifications::new();
    provide_context(notifications);

    view! {
        {children()}
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=|toast| {
                    let class = match toast.kind {
                        AlertKind::Error => "rounded-lg shadow-lg px-4 py-3 text-sm text-white bg-red-600",
                        AlertKind::Success => "rounded-lg shadow-lg px-4 py-3 text-sm text-white bg-emerald-600",
                        AlertKind::Info => "rounded-lg shadow-lg px-4 py-3 text-sm text-white bg-blue-600",
                    };
                    view! { <div class=class role="status">{toast.message}</div> }
                }
            />
        </div>
    }
}

/// Returns the notification context, or a detached one outside the provider.
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(Notifications::new)
}
