//! "My Pages": profile details, password change and the rental history of the
//! signed-in user.

use crate::{
    app_lib::{
        AppError, AuthMode,
        format::{format_date, format_date_for_input, format_days, format_price, parse_date},
        theme::Theme,
    },
    components::{
        Alert, AlertKind, Button, ConfirmDialog, Confirmation, Modal, Spinner, use_notifications,
    },
    features::{
        auth::{RequireAuth, client as auth_client, types::ChangePasswordRequest},
        bookings::{
            client as bookings,
            pricing::{
                BookingStatus, booking_days, booking_total, extension_request, next_day,
                sort_newest_first,
            },
            types::{Booking, BookingRequest},
        },
        navigation::Page,
        users::{
            client as users,
            profile::{
                PASSWORD_CHANGED, PROFILE_MESSAGE_MS, PROFILE_UPDATED, password_change,
                password_change_error, profile_error, profile_update,
            },
            types::{ProfileEdits, User},
        },
    },
};
use chrono::{Local, NaiveDate};
use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn UserPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <UserDashboard />
        </RequireAuth>
    }
}

#[component]
fn UserDashboard() -> impl IntoView {
    let user = LocalResource::new(move || async move { users::current_user(AuthMode::Session).await });

    view! {
        <div class="space-y-8">
            <h1 class=Theme::PAGE_TITLE>"My Pages"</h1>
            <Suspense fallback=|| view! { <Spinner label="Loading your profile..." /> }>
                {move || match user.get() {
                    None => view! { <Spinner label="Loading your profile..." /> }.into_any(),
                    Some(Ok(Some(user))) => {
                        let user_id = user.id;
                        view! {
                            <div class="grid gap-6 lg:grid-cols-2">
                                <ProfileSection user=user />
                                <PasswordSection />
                            </div>
                            <RentalHistory user_id=user_id />
                        }
                        .into_any()
                    }
                    Some(Ok(None)) => {
                        view! { <Alert kind=AlertKind::Error message="Failed to load your profile." /> }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "failed to load the current user");
                        view! { <Alert kind=AlertKind::Error message=format!("Failed to load your profile: {}", err.detail()) /> }
                            .into_any()
                    }
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProfileSection(user: User) -> impl IntoView {
    let initial = ProfileEdits::from_user(&user);
    let user = StoredValue::new(user);
    let email = RwSignal::new(initial.email);
    let full_name = RwSignal::new(initial.full_name);
    let phone = RwSignal::new(initial.phone);
    let address = RwSignal::new(initial.address);
    let (message, set_message) = signal::<Option<(AlertKind, String)>>(None);

    let save_action = Action::new_local(move |updated: &User| {
        let updated = updated.clone();
        async move { users::update_user(&updated).await.map(|saved| saved.unwrap_or(updated)) }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(saved) => {
                    user.set_value(saved);
                    set_message.set(Some((AlertKind::Success, PROFILE_UPDATED.to_string())));
                    Timeout::new(PROFILE_MESSAGE_MS, move || set_message.set(None)).forget();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "profile update failed");
                    set_message.set(Some((AlertKind::Error, profile_error(&err))));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_message.set(None);
        let edits = ProfileEdits {
            email: email.get_untracked(),
            full_name: full_name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
        };
        match user.with_value(|user| profile_update(user, &edits)) {
            Ok(updated) => {
                save_action.dispatch(updated);
            }
            Err(reason) => set_message.set(Some((AlertKind::Error, reason.to_string()))),
        }
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="mb-4">
                <label class=Theme::LABEL for=id>{label}</label>
                <input
                    id=id
                    type=kind
                    class=Theme::INPUT
                    prop:value=move || value.get()
                    on:input=move |event| value.set(event_target_value(&event))
                />
            </div>
        }
    };

    view! {
        <form class=Theme::CARD on:submit=on_submit>
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Profile"</h2>
            <div class="mb-4">
                <label class=Theme::LABEL for="profile-username">"Username"</label>
                <input
                    id="profile-username"
                    type="text"
                    class=Theme::INPUT_READONLY
                    readonly
                    value=user.with_value(|user| user.username.clone())
                />
            </div>
            {field("profile-email", "Email", "email", email)}
            {field("profile-full-name", "Full name", "text", full_name)}
            {field("profile-phone", "Phone", "tel", phone)}
            {field("profile-address", "Address", "text", address)}
            <Button button_type="submit" disabled=save_action.pending()>
                "Save Profile"
            </Button>
            {move || {
                message
                    .get()
                    .map(|(kind, text)| view! { <div class="mt-4"><Alert kind=kind message=text /></div> })
            }}
        </form>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (message, set_message) = signal::<Option<(AlertKind, String)>>(None);

    let change_action = Action::new_local(move |request: &ChangePasswordRequest| {
        let request = request.clone();
        async move { auth_client::change_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(()) => {
                    tracing::info!("password changed");
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    set_message.set(Some((AlertKind::Success, PASSWORD_CHANGED.to_string())));
                }
                Err(err) => {
                    tracing::warn!(status = ?http_status(&err), "password change failed");
                    set_message.set(Some((AlertKind::Error, password_change_error(&err))));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_message.set(None);
        match password_change(
            &current.get_untracked(),
            &new_password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(request) => {
                change_action.dispatch(request);
            }
            Err(reason) => set_message.set(Some((AlertKind::Error, reason.to_string()))),
        }
    };

    let field = move |id: &'static str, label: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <div class="mb-4">
                <label class=Theme::LABEL for=id>{label}</label>
                <input
                    id=id
                    type="password"
                    class=Theme::INPUT
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |event| value.set(event_target_value(&event))
                />
            </div>
        }
    };

    view! {
        <form class=Theme::CARD on:submit=on_submit>
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Change Password"</h2>
            {field("current-password", "Current password", "current-password", current)}
            {field("new-password", "New password", "new-password", new_password)}
            {field("confirm-new-password", "Confirm new password", "new-password", confirm)}
            <Button button_type="submit" disabled=change_action.pending()>
                "Change Password"
            </Button>
            {move || {
                message
                    .get()
                    .map(|(kind, text)| view! { <div class="mt-4"><Alert kind=kind message=text /></div> })
            }}
        </form>
    }
}

/// Status code for logs; the message may echo user input.
fn http_status(err: &AppError) -> Option<u16> {
    match err {
        AppError::Http { status, .. } => Some(*status),
        _ => None,
    }
}

async fn load_history(user_id: i64) -> Result<Vec<Booking>, AppError> {
    let list = bookings::user_bookings(user_id).await?;
    let mut list = bookings::with_cars(list).await;
    sort_newest_first(&mut list);
    Ok(list)
}

#[component]
fn RentalHistory(user_id: i64) -> impl IntoView {
    let notifications = use_notifications();
    let history = LocalResource::new(move || load_history(user_id));
    let pending = RwSignal::new(None::<Confirmation>);
    let extending = RwSignal::new(None::<Booking>);
    let viewing = RwSignal::new(None::<Booking>);
    let today = Local::now().date_naive();

    let on_cancel = Callback::new(move |booking_id: i64| {
        pending.set(Some(Confirmation {
            message: "Are you sure you want to cancel this booking?".to_string(),
            on_confirm: Callback::new(move |()| {
                spawn_local(async move {
                    match bookings::delete_booking(booking_id).await {
                        Ok(()) => {
                            tracing::info!(booking_id, "booking cancelled");
                            notifications.success("Booking cancelled successfully.");
                            history.refetch();
                        }
                        Err(err) => {
                            tracing::warn!(booking_id, error = %err, "cancel failed");
                            notifications.error("Failed to cancel booking. Please try again.");
                        }
                    }
                });
            }),
        }));
    });
    let on_extend = Callback::new(move |booking: Booking| extending.set(Some(booking)));
    let on_details = Callback::new(move |booking: Booking| viewing.set(Some(booking)));

    view! {
        <section class="space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"Rental History"</h2>
            <Suspense fallback=|| view! { <Spinner label="Loading your bookings..." /> }>
                {move || match history.get() {
                    None => view! { <Spinner label="Loading your bookings..." /> }.into_any(),
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "failed to load rental history");
                        view! {
                            <Alert kind=AlertKind::Error message="Failed to load your bookings.">
                                <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| history.refetch()>
                                    "Retry"
                                </button>
                            </Alert>
                        }
                        .into_any()
                    }
                    Some(Ok(list)) if list.is_empty() => view! {
                        <div class=Theme::CARD>
                            <p class=Theme::MUTED>"You have no bookings yet."</p>
                            <A href=Page::Rental.path() {..} class=Theme::LINK_ACTION>
                                "Browse available cars"
                            </A>
                        </div>
                    }
                    .into_any(),
                    Some(Ok(list)) => view! {
                        <div class="grid gap-4 md:grid-cols-2">
                            {list
                                .into_iter()
                                .map(|booking| view! {
                                    <HistoryCard
                                        booking=booking
                                        today=today
                                        on_details=on_details
                                        on_cancel=on_cancel
                                        on_extend=on_extend
                                    />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </Suspense>
            <ConfirmDialog pending=pending />
            {move || {
                extending
                    .get()
                    .map(|booking| view! {
                        <ExtendDialog booking=booking extending=extending on_done=Callback::new(move |()| history.refetch()) />
                    })
            }}
            {move || {
                viewing
                    .get()
                    .map(|booking| view! { <DetailsDialog booking=booking today=today viewing=viewing /> })
            }}
        </section>
    }
}

#[component]
fn HistoryCard(
    booking: Booking,
    today: NaiveDate,
    on_details: Callback<Booking>,
    on_cancel: Callback<i64>,
    on_extend: Callback<Booking>,
) -> impl IntoView {
    let status = BookingStatus::of(&booking, today);
    let badge = match status {
        BookingStatus::Upcoming => "bg-blue-100 text-blue-800",
        BookingStatus::Active => "bg-emerald-100 text-emerald-800",
        BookingStatus::Completed => "bg-gray-100 text-gray-700",
    };
    let booking_id = booking.id;
    let car_name = booking
        .car
        .as_ref()
        .map_or_else(|| "Car details unavailable".to_string(), |car| car.full_name());
    let year = booking.car.as_ref().and_then(|car| car.year);
    let dates = format!("{} - {}", format_date(&booking.start_date), format_date(&booking.end_date));
    let duration = format_days(booking_days(&booking));
    let total = format_price(booking_total(&booking));
    let extend_target = booking.clone();
    let details_target = booking.clone();

    view! {
        <article class=Theme::CARD>
            <div class="flex items-center justify-between">
                <span class=format!("{} {}", Theme::BADGE, badge)>{status.label()}</span>
                <span class=Theme::MUTED>{format!("Booking #{booking_id}")}</span>
            </div>
            <h3 class="mt-3 text-lg font-semibold text-gray-900 dark:text-white">{car_name}</h3>
            {year.map(|year| view! { <p class=Theme::MUTED>{year}</p> })}
            <dl class="mt-2 space-y-1 text-sm text-gray-700 dark:text-gray-300">
                <div><dt class="inline font-medium">"Dates: "</dt><dd class="inline">{dates}</dd></div>
                <div><dt class="inline font-medium">"Duration: "</dt><dd class="inline">{duration}</dd></div>
                <div><dt class="inline font-medium">"Total cost: "</dt><dd class="inline">{total}</dd></div>
            </dl>
            <div class="mt-4 flex gap-3">
                <button
                    type="button"
                    class=Theme::BUTTON_SECONDARY
                    on:click=move |_| on_details.run(details_target.clone())
                >
                    "View Details"
                </button>
                <Show when=move || status.can_cancel()>
                    <button type="button" class=Theme::BUTTON_DANGER on:click=move |_| on_cancel.run(booking_id)>
                        "Cancel Booking"
                    </button>
                </Show>
                <Show when=move || status.can_extend()>
                    <button
                        type="button"
                        class=Theme::BUTTON_SECONDARY
                        on:click={
                            let booking = extend_target.clone();
                            move |_| on_extend.run(booking.clone())
                        }
                    >
                        "Extend Booking"
                    </button>
                </Show>
            </div>
        </article>
    }
}

/// Read-only summary of one booking from the history list.
#[component]
fn DetailsDialog(booking: Booking, today: NaiveDate, viewing: RwSignal<Option<Booking>>) -> impl IntoView {
    let close = Callback::new(move |()| viewing.set(None));
    let car = booking
        .car
        .as_ref()
        .map_or_else(|| "Car details unavailable".to_string(), |car| car.full_name_with_year());
    let rows = [
        ("Status", BookingStatus::of(&booking, today).label().to_string()),
        ("Car", car),
        ("From", format_date(&booking.start_date)),
        ("To", format_date(&booking.end_date)),
        ("Duration", format_days(booking_days(&booking))),
        ("Total cost", format_price(booking_total(&booking))),
    ];

    view! {
        <Modal title=format!("Booking #{}", booking.id) on_close=close>
            <dl class="space-y-2 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="flex justify-between gap-4">
                            <dt class=Theme::MUTED>{label}</dt>
                            <dd class="font-medium text-gray-900 dark:text-white">{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <div class="mt-6 flex justify-end">
                <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| close.run(())>
                    "Close"
                </button>
            </div>
        </Modal>
    }
}

/// Picks a later end date for an active rental.
#[component]
fn ExtendDialog(
    booking: Booking,
    extending: RwSignal<Option<Booking>>,
    on_done: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let earliest = booking.end().map(next_day);
    let new_end = RwSignal::new(earliest.map(format_date_for_input).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let booking = StoredValue::new(booking);
    let close = Callback::new(move |()| extending.set(None));

    let extend_action = Action::new_local(move |(id, request): &(i64, BookingRequest)| {
        let (id, request) = (*id, request.clone());
        async move { bookings::update_booking(id, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = extend_action.value().get() {
            match result {
                Ok(_) => {
                    notifications.success("Booking extended successfully!");
                    extending.set(None);
                    on_done.run(());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "extension failed");
                    set_error.set(Some("Failed to extend booking. Please try again.".to_string()));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let Some(date) = parse_date(&new_end.get_untracked()) else {
            set_error.set(Some("Please choose a new end date.".to_string()));
            return;
        };
        match booking.with_value(|booking| extension_request(booking, date).map(|request| (booking.id, request))) {
            Ok(input) => {
                extend_action.dispatch(input);
            }
            Err(reason) => set_error.set(Some(reason.to_string())),
        }
    };

    view! {
        <Modal title="Extend Booking".to_string() on_close=close>
            <form on:submit=on_submit>
                <p class=Theme::MUTED>
                    {booking.with_value(|booking| format!("Current end date: {}", format_date(&booking.end_date)))}
                </p>
                <label class=format!("{} mt-4", Theme::LABEL) for="extend-end-date">"New end date"</label>
                <input
                    id="extend-end-date"
                    type="date"
                    class=Theme::INPUT
                    min=earliest.map(format_date_for_input)
                    prop:value=move || new_end.get()
                    on:change=move |event| new_end.set(event_target_value(&event))
                />
                {move || error.get().map(|message| view! { <div class="mt-4"><Alert kind=AlertKind::Error message=message /></div> })}
                <div class="mt-6 flex justify-end gap-3">
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <Button button_type="submit" disabled=extend_action.pending()>
                        "Extend"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
