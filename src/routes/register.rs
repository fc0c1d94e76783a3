use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        auth::{
            GuestOnly,
            session::{REGISTRATION_REDIRECT_MS, Registration, registration_error, validate_registration},
            state::{sign_in, use_auth},
            types::RegisterRequest,
        },
        navigation::Page,
        users,
    },
};
use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <GuestOnly>
            <RegisterForm />
        </GuestOnly>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (registered, set_registered) = signal(false);

    let register_action = Action::new_local(move |input: &Registration| {
        let input = input.clone();
        async move {
            users::client::register(&RegisterRequest {
                username: input.username.clone(),
                email: input.email,
                password: input.password.clone(),
            })
            .await?;
            tracing::info!(username = %input.username, "registered");
            // The account exists either way; a failed auto-login only means
            // the visitor signs in by hand.
            if let Err(err) = sign_in(auth, input.username, input.password).await {
                tracing::warn!(error = %err, "automatic login after registration failed");
            }
            Ok::<(), AppError>(())
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    set_registered.set(true);
                    let navigate = navigate.clone();
                    Timeout::new(REGISTRATION_REDIRECT_MS, move || {
                        navigate(&Page::Home.path(), Default::default());
                    })
                    .forget();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "registration failed");
                    set_error.set(Some(registration_error(&err)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match validate_registration(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(registration) => {
                register_action.dispatch(registration);
            }
            Err(message) => set_error.set(Some(message.to_string())),
        }
    };

    view! {
        <div class="max-w-sm mx-auto">
            <h1 class=format!("{} mb-6", Theme::PAGE_TITLE)>"Create an account"</h1>
            <Show
                when=move || registered.get()
                fallback=move || view! {
                    <form on:submit=on_submit>
                        <div class="mb-5">
                            <label class=Theme::LABEL for="username">"Username"</label>
                            <input
                                id="username"
                                type="text"
                                class=Theme::INPUT
                                autocomplete="username"
                                required
                                on:input=move |event| set_username.set(event_target_value(&event))
                            />
                        </div>
                        <div class="mb-5">
                            <label class=Theme::LABEL for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                class=Theme::INPUT
                                autocomplete="email"
                                required
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>
                        <div class="mb-5">
                            <label class=Theme::LABEL for="password">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                class=Theme::INPUT
                                autocomplete="new-password"
                                required
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                        </div>
                        <div class="mb-5">
                            <label class=Theme::LABEL for="confirm-password">"Confirm password"</label>
                            <input
                                id="confirm-password"
                                type="password"
                                class=Theme::INPUT
                                autocomplete="new-password"
                                required
                                on:input=move |event| set_confirm.set(event_target_value(&event))
                            />
                        </div>
                        <Button button_type="submit" disabled=register_action.pending()>
                            "Register"
                        </Button>
                        <p class=format!("{} mt-4", Theme::MUTED)>
                            "Already registered? "
                            <A href=Page::Login.path() {..} class=Theme::LINK_ACTION>
                                "Log in here"
                            </A>
                        </p>
                        {move || {
                            register_action
                                .pending()
                                .get()
                                .then_some(view! { <div class="mt-4"><Spinner /></div> })
                        }}
                        {move || {
                            error
                                .get()
                                .map(|message| {
                                    view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    }
                                })
                        }}
                    </form>
                }
            >
                <Alert
                    kind=AlertKind::Success
                    message="Registration successful! You are now logged in and will be redirected shortly."
                />
            </Show>
        </div>
    }
}
