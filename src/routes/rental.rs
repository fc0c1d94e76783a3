//! Car list with search, type filter and price sort. Browsing is public;
//! renting needs a session, so guests get a login prompt that brings them
//! back to the chosen car.

use crate::{
    app_lib::{
        debounce::{SEARCH_DEBOUNCE_MS, TimerDebouncer},
        format::{DEFAULT_TRUNCATE_LENGTH, format_rate, truncate_text},
        storage,
        theme::Theme,
    },
    components::{Alert, AlertKind, Spinner},
    features::{
        auth::state::use_auth,
        cars::{
            catalog::{CarQuery, LOAD_FAILED, NO_CARS, NO_MATCHES, SortOrder, car_types},
            client,
            types::Car,
        },
        navigation::Page,
    },
};
use leptos::{
    ev::{Event, KeyboardEvent, MouseEvent},
    prelude::*,
};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn RentalPage() -> impl IntoView {
    let cars = LocalResource::new(move || async move { client::list_cars().await });
    let query = RwSignal::new(CarQuery::default());
    let search_input = RwSignal::new(String::new());
    let login_prompt = RwSignal::new(None::<i64>);
    let debouncer = StoredValue::new_local(TimerDebouncer::new(SEARCH_DEBOUNCE_MS));

    let run_search = move || {
        debouncer.with_value(TimerDebouncer::cancel);
        query.update(|q| q.search = search_input.get_untracked());
    };
    let on_search_input = move |event: Event| {
        search_input.set(event_target_value(&event));
        debouncer.with_value(|d| {
            d.call(move || query.update(|q| q.search = search_input.get_untracked()));
        });
    };
    let on_search_key = move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            event.prevent_default();
            run_search();
        }
    };
    let clear_filters = move |_: MouseEvent| {
        debouncer.with_value(TimerDebouncer::cancel);
        search_input.set(String::new());
        query.set(CarQuery::default());
    };

    let type_options = move || match cars.get() {
        Some(Ok(list)) => car_types(&list),
        _ => Vec::new(),
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class=Theme::PAGE_TITLE>"Available Cars"</h1>
                <p class=Theme::MUTED>"Pick a car and choose your dates on the next page."</p>
            </div>

            <div class=format!("{} grid gap-4 md:grid-cols-4", Theme::CARD)>
                <div class="md:col-span-2 flex gap-2">
                    <input
                        type="search"
                        class=Theme::INPUT
                        placeholder="Search by name, model or type"
                        prop:value=move || search_input.get()
                        on:input=on_search_input
                        on:keydown=on_search_key
                    />
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| run_search()>
                        "Search"
                    </button>
                </div>
                <select
                    class=Theme::INPUT
                    prop:value=move || query.with(|q| q.car_type.clone())
                    on:change=move |event| {
                        let value = event_target_value(&event);
                        query.update(|q| q.car_type = value);
                    }
                >
                    <option value="">"All types"</option>
                    <For each=type_options key=|car_type| car_type.clone() let:car_type>
                        <option value=car_type.clone()>{car_type.clone()}</option>
                    </For>
                </select>
                <select
                    class=Theme::INPUT
                    prop:value=move || query.with(|q| q.sort.value())
                    on:change=move |event| {
                        let sort = SortOrder::from_value(&event_target_value(&event));
                        query.update(|q| q.sort = sort);
                    }
                >
                    <option value=SortOrder::PriceAsc.value()>"Price: low to high"</option>
                    <option value=SortOrder::PriceDesc.value()>"Price: high to low"</option>
                </select>
                <Show when=move || !query.with(CarQuery::is_default)>
                    <div class="md:col-span-4 flex justify-end">
                        <button type="button" class=Theme::LINK_ACTION on:click=clear_filters>
                            "Clear Filters"
                        </button>
                    </div>
                </Show>
            </div>

            {move || {
                login_prompt
                    .get()
                    .map(|car_id| {
                        let target = Page::Booking(Some(car_id)).path();
                        view! {
                            <Alert kind=AlertKind::Info message="You need to be logged in to make a booking.">
                                <A
                                    href=Page::Login.path()
                                    {..}
                                    class=Theme::LINK_ACTION
                                    on:click=move |_| storage::remember_redirect(&storage::session(), &target)
                                >
                                    "Log in here"
                                </A>
                            </Alert>
                        }
                    })
            }}

            <Suspense fallback=|| view! { <Spinner label="Loading cars..." /> }>
                {move || match cars.get() {
                    None => view! { <Spinner label="Loading cars..." /> }.into_any(),
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "failed to load cars");
                        view! {
                            <Alert kind=AlertKind::Error message=LOAD_FAILED>
                                <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| cars.refetch()>
                                    "Retry"
                                </button>
                            </Alert>
                        }
                        .into_any()
                    }
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <Alert kind=AlertKind::Info message=NO_CARS /> }.into_any()
                    }
                    Some(Ok(list)) => {
                        let visible = query.with(|q| q.apply(&list));
                        if visible.is_empty() {
                            view! {
                                <Alert kind=AlertKind::Info message=NO_MATCHES>
                                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=clear_filters>
                                        "Clear Filters"
                                    </button>
                                </Alert>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                    {visible
                                        .into_iter()
                                        .map(|car| view! { <CarCard car=car login_prompt=login_prompt /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CarCard(car: Car, login_prompt: RwSignal<Option<i64>>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let car_id = car.id;
    let on_rent = move |_| {
        if auth.is_authenticated.get_untracked() {
            navigate(&Page::Booking(Some(car_id)).path(), Default::default());
        } else {
            login_prompt.set(Some(car_id));
        }
    };
    let booked = car.is_booked();
    let [feature1, feature2, feature3] = car
        .features()
        .map(|feature| truncate_text(&feature, DEFAULT_TRUNCATE_LENGTH));

    view! {
        <article class="flex flex-col overflow-hidden bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-sm">
            <img class="h-48 w-full object-cover" src=car.image_src() alt=car.full_name() />
            <div class="flex flex-1 flex-col p-5 space-y-3">
                <div>
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        {car.display_name().to_string()}
                    </h2>
                    <p class=Theme::MUTED>
                        {format!("{} · {}", car.model_label(), car.type_label())}
                    </p>
                </div>
                <ul class="text-sm text-gray-600 dark:text-gray-300 list-disc list-inside">
                    <li>{feature1}</li>
                    <li>{feature2}</li>
                    <li>{feature3}</li>
                </ul>
                <p class="mt-auto text-xl font-bold text-gray-900 dark:text-white">
                    {format!("{} per day", format_rate(car.daily_price()))}
                </p>
                <button
                    type="button"
                    class="text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm px-5 py-2.5 disabled:bg-gray-400 disabled:cursor-not-allowed"
                    disabled=booked
                    on:click=on_rent
                >
                    {car.rent_label()}
                </button>
            </div>
        </article>
    }
}
