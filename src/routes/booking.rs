use crate::{
    app_lib::{
        format::{format_date_for_input, format_days, format_price, format_rate, parse_date},
        theme::Theme,
    },
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        auth::RequireAuth,
        bookings::{
            client as bookings,
            pricing::{
                BOOKING_REDIRECT_MS, CAR_LOAD_FAILED, NO_CAR_SELECTED, Quote, adjust_end,
                availability, booking_created_message, booking_failed_message, booking_request,
                default_dates, next_day,
            },
            types::{Booking, BookingRequest},
        },
        cars::{client as cars, types::Car},
        navigation::Page,
    },
};
use chrono::Local;
use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_params_map},
};

#[component]
pub fn BookingPage() -> impl IntoView {
    let params = use_params_map();
    let car_id = move || {
        params
            .with(|params| params.get("car_id"))
            .and_then(|id| id.parse::<i64>().ok())
    };

    view! {
        <RequireAuth>
            {move || match car_id() {
                Some(car_id) => view! { <BookingForm car_id=car_id /> }.into_any(),
                None => view! {
                    <Alert kind=AlertKind::Info message=NO_CAR_SELECTED>
                        <A href=Page::Rental.path() {..} class=Theme::LINK_ACTION>
                            "Browse cars"
                        </A>
                    </Alert>
                }
                .into_any(),
            }}
        </RequireAuth>
    }
}

#[component]
fn BookingForm(car_id: i64) -> impl IntoView {
    let car = LocalResource::new(move || async move { cars::get_car(car_id).await });

    view! {
        <Suspense fallback=|| view! { <Spinner label="Loading car details..." /> }>
            {move || match car.get() {
                None => view! { <Spinner label="Loading car details..." /> }.into_any(),
                Some(Err(err)) => {
                    tracing::warn!(car_id, error = %err, "failed to load car");
                    view! { <Alert kind=AlertKind::Error message=CAR_LOAD_FAILED /> }.into_any()
                }
                Some(Ok(car)) => view! { <BookingDetails car=car /> }.into_any(),
            }}
        </Suspense>
    }
}

#[component]
fn BookingDetails(car: Car) -> impl IntoView {
    let navigate = use_navigate();
    let today = Local::now().date_naive();
    let (default_start, default_end) = default_dates(today);
    let start = RwSignal::new(default_start);
    let end = RwSignal::new(default_end);
    let (error, set_error) = signal::<Option<String>>(None);
    let (confirmation, set_confirmation) = signal::<Option<String>>(None);

    let car_id = car.id;
    let daily_rate = car.daily_price();
    let available = availability(&car);
    let quote = move || Quote::new(daily_rate, start.get(), end.get());

    let create_action = Action::new_local(move |request: &BookingRequest| {
        let request = request.clone();
        async move { bookings::create_booking(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(created) => {
                    let reference = created.as_ref().map(|booking: &Booking| booking.id);
                    tracing::info!(car_id, ?reference, "booking created");
                    set_confirmation.set(Some(booking_created_message(reference)));
                    let navigate = navigate.clone();
                    Timeout::new(BOOKING_REDIRECT_MS, move || {
                        navigate(&Page::User.path(), Default::default());
                    })
                    .forget();
                }
                Err(err) => {
                    tracing::warn!(car_id, error = %err, "booking failed");
                    set_error.set(Some(booking_failed_message(&err.detail())));
                }
            }
        }
    });

    let on_start = move |value: String| {
        if let Some(date) = parse_date(&value) {
            let date = date.max(today);
            start.set(date);
            end.update(|end| *end = adjust_end(date, *end));
        }
    };
    let on_end = move |value: String| {
        if let Some(date) = parse_date(&value) {
            end.set(adjust_end(start.get_untracked(), date));
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        if available.is_err() {
            return;
        }
        match booking_request(car_id, start.get_untracked(), end.get_untracked()) {
            Ok(request) => {
                create_action.dispatch(request);
            }
            Err(message) => set_error.set(Some(message.to_string())),
        }
    };

    let submit_disabled = Signal::derive(move || {
        available.is_err() || create_action.pending().get() || confirmation.with(Option::is_some)
    });
    let [feature1, feature2, feature3] = car.features();

    view! {
        <div class="grid gap-6 lg:grid-cols-2">
            <section class=Theme::CARD>
                <img class="w-full h-56 object-cover rounded-lg" src=car.image_src() alt=car.full_name() />
                <h1 class=format!("{} mt-4", Theme::PAGE_TITLE)>{car.full_name()}</h1>
                <p class=Theme::MUTED>{car.type_label().to_string()}</p>
                <ul class="mt-3 text-sm text-gray-600 dark:text-gray-300 list-disc list-inside">
                    <li>{feature1}</li>
                    <li>{feature2}</li>
                    <li>{feature3}</li>
                </ul>
                <p class="mt-4 text-xl font-bold text-gray-900 dark:text-white">
                    {format!("{} per day", format_rate(daily_rate))}
                </p>
            </section>

            <form class=Theme::CARD on:submit=on_submit>
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Choose your dates"</h2>
                <div class="grid gap-4 sm:grid-cols-2">
                    <div>
                        <label class=Theme::LABEL for="start-date">"Start date"</label>
                        <input
                            id="start-date"
                            type="date"
                            class=Theme::INPUT
                            min=format_date_for_input(today)
                            prop:value=move || format_date_for_input(start.get())
                            on:change=move |event| on_start(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="end-date">"End date"</label>
                        <input
                            id="end-date"
                            type="date"
                            class=Theme::INPUT
                            min=move || format_date_for_input(next_day(start.get()))
                            prop:value=move || format_date_for_input(end.get())
                            on:change=move |event| on_end(event_target_value(&event))
                        />
                    </div>
                </div>

                <dl class="mt-6 grid grid-cols-3 gap-4 text-sm">
                    <div>
                        <dt class=Theme::MUTED>"Duration"</dt>
                        <dd class="font-medium">{move || format_days(quote().days)}</dd>
                    </div>
                    <div>
                        <dt class=Theme::MUTED>"Daily rate"</dt>
                        <dd class="font-medium">{format_price(daily_rate)}</dd>
                    </div>
                    <div>
                        <dt class=Theme::MUTED>"Total"</dt>
                        <dd class="font-semibold">{move || format_price(quote().total)}</dd>
                    </div>
                </dl>

                <div class="mt-4">
                    {match available {
                        Ok(message) => view! { <Alert kind=AlertKind::Success message=message /> },
                        Err(message) => view! { <Alert kind=AlertKind::Error message=message /> },
                    }}
                </div>

                <div class="mt-6">
                    <Button button_type="submit" disabled=submit_disabled>
                        "Book Now"
                    </Button>
                </div>
                {move || {
                    create_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    confirmation
                        .get()
                        .map(|message| view! { <div class="mt-4"><Alert kind=AlertKind::Success message=message /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="mt-4"><Alert kind=AlertKind::Error message=message /></div> })
                }}
            </form>
        </div>
    }
}
