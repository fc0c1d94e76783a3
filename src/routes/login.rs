use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        auth::{
            GuestOnly,
            session::login_error,
            state::{sign_in, use_auth},
        },
        navigation::Page,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <GuestOnly>
            <LoginForm />
        </GuestOnly>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        sign_in(auth, input.username, input.password)
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(destination) => navigate(&destination, Default::default()),
                Err(err) => set_error.set(Some(login_error(&err).to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Username and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class=format!("{} mb-6", Theme::PAGE_TITLE)>"Log in"</h1>
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
                <label class=Theme::LABEL for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    class=Theme::INPUT
                    autocomplete="current-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=login_action.pending()>
                "Log in"
            </Button>
            <p class=format!("{} mt-4", Theme::MUTED)>
                "No account yet? "
                <A href=Page::Register.path() {..} class=Theme::LINK_ACTION>
                    "Register here"
                </A>
            </p>
            {move || {
                login_action
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
}
