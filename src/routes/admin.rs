//! Admin dashboard with users, cars and bookings tabs. The guard only hides
//! the page from non-admins; `GET /users` confirms the rights on entry and
//! every call is still authorized by the backend.

use crate::{
    app_lib::{
        AppError,
        format::{format_days, format_price, format_rate, format_short_date},
        theme::Theme,
    },
    components::{
        Alert, AlertKind, Button, ConfirmDialog, Confirmation, Modal, Notifications, Spinner,
        use_notifications,
    },
    features::{
        admin::{
            ACCESS_DENIED, AdminTab, BookingEdit, delete_confirmation, failure_message,
            fallback_rate,
        },
        auth::{RequireAdmin, state::use_auth},
        bookings::{
            client as bookings,
            types::{Booking, BookingRequest},
        },
        cars::{
            catalog::CarForm,
            client as cars,
            types::{Car, CarRequest},
        },
        users::{
            client as users,
            types::{User, or_dash},
        },
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminDashboard />
        </RequireAdmin>
    }
}

/// Asks for confirmation, then runs `action` and reports the outcome.
fn confirm_delete<F, Fut>(
    pending: RwSignal<Option<Confirmation>>,
    notifications: Notifications,
    entity: &'static str,
    action: F,
    on_done: Callback<()>,
) where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), AppError>> + 'static,
{
    pending.set(Some(Confirmation {
        message: delete_confirmation(entity),
        on_confirm: Callback::new(move |()| {
            let request = action();
            spawn_local(async move {
                match request.await {
                    Ok(()) => {
                        tracing::info!(entity, "deleted");
                        notifications.success(format!("The {entity} was deleted successfully."));
                        on_done.run(());
                    }
                    Err(err) => {
                        tracing::warn!(entity, error = %err, "delete failed");
                        notifications.error(failure_message(&format!("Failed to delete {entity}")));
                    }
                }
            });
        }),
    }));
}

async fn bookings_with_cars() -> Result<Vec<Booking>, AppError> {
    Ok(bookings::with_cars(bookings::list_bookings().await?).await)
}

async fn user_bookings_with_cars(user_id: i64) -> Result<Vec<Booking>, AppError> {
    Ok(bookings::with_cars(bookings::user_bookings(user_id).await?).await)
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();
    let user_list = LocalResource::new(move || async move { users::list_users().await });
    let tab = RwSignal::new(AdminTab::default());
    let pending = RwSignal::new(None::<Confirmation>);

    // The first answer from `GET /users` decides whether the session really
    // holds admin rights.
    let denied = Memo::new(move |_| matches!(user_list.get(), Some(Err(_))));
    Effect::new(move |_| {
        if denied.get() {
            tracing::warn!("admin verification failed");
            auth.revoke_admin();
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class=Theme::PAGE_TITLE>"Admin Dashboard"</h1>
                <p class=Theme::MUTED>"Manage users, cars and bookings."</p>
            </div>
            {move || match user_list.get() {
                None => view! { <Spinner label="Verifying admin access..." /> }.into_any(),
                Some(Err(_)) => view! { <Alert kind=AlertKind::Error message=ACCESS_DENIED /> }.into_any(),
                Some(Ok(_)) => view! {
                    <nav class="flex gap-2 border-b border-gray-200 dark:border-gray-700">
                        {AdminTab::ALL
                            .into_iter()
                            .map(|item| view! {
                                <button
                                    type="button"
                                    class="px-4 py-2 text-sm font-medium border-b-2 -mb-px"
                                    class=("border-blue-600", move || tab.get() == item)
                                    class=("text-blue-600", move || tab.get() == item)
                                    class=("border-transparent", move || tab.get() != item)
                                    class=("text-gray-500", move || tab.get() != item)
                                    on:click=move |_| tab.set(item)
                                >
                                    {item.label()}
                                </button>
                            })
                            .collect_view()}
                    </nav>
                    {move || match tab.get() {
                        AdminTab::Users => view! { <UsersTab user_list=user_list pending=pending /> }.into_any(),
                        AdminTab::Cars => view! { <CarsTab pending=pending /> }.into_any(),
                        AdminTab::Bookings => view! { <BookingsTab pending=pending /> }.into_any(),
                    }}
                }
                .into_any(),
            }}
            <ConfirmDialog pending=pending />
        </div>
    }
}

#[component]
fn UsersTab(
    user_list: LocalResource<Result<Vec<User>, AppError>>,
    pending: RwSignal<Option<Confirmation>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let viewing = RwSignal::new(None::<User>);
    let reload = Callback::new(move |()| user_list.refetch());

    view! {
        <div class=Theme::TABLE_WRAPPER>
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class=Theme::TABLE_HEAD>"ID"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Username"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Email"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Phone"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Role"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    {move || match user_list.get() {
                        Some(Ok(list)) if list.is_empty() => view! {
                            <tr><td colspan="6" class=Theme::TABLE_CELL>"No users found."</td></tr>
                        }
                        .into_any(),
                        Some(Ok(list)) => list
                            .into_iter()
                            .map(|user| {
                                let user_id = user.id;
                                let is_admin = user.is_admin();
                                let target = user.clone();
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
                                        <td class=Theme::TABLE_CELL>{user_id}</td>
                                        <td class=Theme::TABLE_CELL>{user.username.clone()}</td>
                                        <td class=Theme::TABLE_CELL>{or_dash(user.email.as_deref())}</td>
                                        <td class=Theme::TABLE_CELL>{or_dash(user.phone.as_deref())}</td>
                                        <td class=Theme::TABLE_CELL>{user.role_label().to_string()}</td>
                                        <td class=format!("{} space-x-3", Theme::TABLE_CELL)>
                                            <button
                                                type="button"
                                                class=Theme::LINK_ACTION
                                                on:click=move |_| viewing.set(Some(target.clone()))
                                            >
                                                "View Bookings"
                                            </button>
                                            <button
                                                type="button"
                                                class=Theme::LINK_DANGER
                                                disabled=is_admin
                                                title=is_admin.then_some("Administrators cannot be deleted")
                                                on:click=move |_| {
                                                    confirm_delete(
                                                        pending,
                                                        notifications,
                                                        "user",
                                                        move || users::delete_user(user_id),
                                                        reload,
                                                    );
                                                }
                                            >
                                                "Delete User"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any(),
                        _ => ().into_any(),
                    }}
                </tbody>
            </table>
        </div>
        {move || {
            viewing
                .get()
                .map(|user| view! { <UserBookingsModal user=user viewing=viewing pending=pending /> })
        }}
    }
}

#[component]
fn UserBookingsModal(
    user: User,
    viewing: RwSignal<Option<User>>,
    pending: RwSignal<Option<Confirmation>>,
) -> impl IntoView {
    let user_id = user.id;
    let list = LocalResource::new(move || user_bookings_with_cars(user_id));
    let title = format!("Bookings for {}", user.display_name());
    let email = or_dash(user.email.as_deref());

    view! {
        <Modal title=title on_close=Callback::new(move |()| viewing.set(None))>
            <p class=Theme::MUTED>{format!("{} · {}", user.username, email)}</p>
            <div class="mt-4">
                <BookingTable list=list pending=pending />
            </div>
        </Modal>
    }
}

#[component]
fn CarsTab(pending: RwSignal<Option<Confirmation>>) -> impl IntoView {
    let notifications = use_notifications();
    let car_list = LocalResource::new(move || async move { cars::list_cars().await });
    let editing = RwSignal::new(None::<Option<Car>>);
    let reload = Callback::new(move |()| car_list.refetch());

    view! {
        <div class="flex justify-end">
            <Button on_click=Callback::new(move |_| editing.set(Some(None)))>"Add Car"</Button>
        </div>
        <div class=format!("{} mt-4", Theme::TABLE_WRAPPER)>
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class=Theme::TABLE_HEAD>"ID"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Name"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Model"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Type"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Price"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Status"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    {move || match car_list.get() {
                        None => view! {
                            <tr><td colspan="7" class="px-6 py-12 text-center"><Spinner /></td></tr>
                        }
                        .into_any(),
                        Some(Err(err)) => {
                            tracing::warn!(error = %err, "failed to load cars");
                            view! {
                                <tr><td colspan="7" class="px-6 py-4">
                                    <Alert kind=AlertKind::Error message=failure_message("Failed to load cars") />
                                </td></tr>
                            }
                            .into_any()
                        }
                        Some(Ok(list)) if list.is_empty() => view! {
                            <tr><td colspan="7" class=Theme::TABLE_CELL>"No cars found."</td></tr>
                        }
                        .into_any(),
                        Some(Ok(list)) => list
                            .into_iter()
                            .map(|car| {
                                let car_id = car.id;
                                let target = car.clone();
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
                                        <td class=Theme::TABLE_CELL>{car_id}</td>
                                        <td class=Theme::TABLE_CELL>{car.display_name().to_string()}</td>
                                        <td class=Theme::TABLE_CELL>{car.model_label().to_string()}</td>
                                        <td class=Theme::TABLE_CELL>{car.type_label().to_string()}</td>
                                        <td class=Theme::TABLE_CELL>{format_rate(car.daily_price())}</td>
                                        <td class=Theme::TABLE_CELL>{car.status_label()}</td>
                                        <td class=format!("{} space-x-3", Theme::TABLE_CELL)>
                                            <button
                                                type="button"
                                                class=Theme::LINK_ACTION
                                                on:click=move |_| editing.set(Some(Some(target.clone())))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                type="button"
                                                class=Theme::LINK_DANGER
                                                on:click=move |_| {
                                                    confirm_delete(
                                                        pending,
                                                        notifications,
                                                        "car",
                                                        move || cars::delete_car(car_id),
                                                        reload,
                                                    );
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
        {move || {
            editing
                .get()
                .map(|car| view! { <CarModal car=car editing=editing on_saved=reload /> })
        }}
    }
}

/// Add or edit dialog. `car` is `None` when adding.
#[component]
fn CarModal(
    car: Option<Car>,
    editing: RwSignal<Option<Option<Car>>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let car_id = car.as_ref().map(|car| car.id);
    let booked = car.as_ref().is_some_and(Car::is_booked);
    let form = RwSignal::new(car.as_ref().map(CarForm::from_car).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let close = Callback::new(move |()| editing.set(None));
    let title = if car_id.is_some() { "Edit Car" } else { "Add New Car" };

    let save_action = Action::new_local(move |request: &CarRequest| {
        let request = request.clone();
        async move {
            match car_id {
                Some(id) => cars::update_car(id, &request).await,
                None => cars::create_car(&request).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    tracing::info!(?car_id, "car saved");
                    notifications.success(if car_id.is_some() {
                        "Car updated successfully."
                    } else {
                        "Car added successfully."
                    });
                    editing.set(None);
                    on_saved.run(());
                }
                Err(err) => {
                    tracing::warn!(?car_id, error = %err, "saving car failed");
                    set_error.set(Some(failure_message("Failed to save car")));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(|form| form.to_request(booked)) {
            Ok(request) => {
                save_action.dispatch(request);
            }
            Err(reason) => set_error.set(Some(reason.to_string())),
        }
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      get: fn(&CarForm) -> &String,
                      set: fn(&mut CarForm, String)| {
        view! {
            <div>
                <label class=Theme::LABEL for=id>{label}</label>
                <input
                    id=id
                    type="text"
                    class=Theme::INPUT
                    prop:value=move || form.with(|form| get(form).clone())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        form.update(|form| set(form, value));
                    }
                />
            </div>
        }
    };

    view! {
        <Modal title=title.to_string() on_close=close>
            <form on:submit=on_submit>
                <div class="grid gap-4 sm:grid-cols-2">
                    {field("car-name", "Name", |f| &f.name, |f, v| f.name = v)}
                    {field("car-model", "Model", |f| &f.model, |f, v| f.model = v)}
                    {field("car-type", "Type", |f| &f.car_type, |f, v| f.car_type = v)}
                    {field("car-price", "Price per day", |f| &f.price, |f, v| f.price = v)}
                    {field("car-feature1", "Feature 1", |f| &f.feature1, |f, v| f.feature1 = v)}
                    {field("car-feature2", "Feature 2", |f| &f.feature2, |f, v| f.feature2 = v)}
                    {field("car-feature3", "Feature 3", |f| &f.feature3, |f, v| f.feature3 = v)}
                    {field("car-image-url", "Image URL", |f| &f.image_url, |f, v| f.image_url = v)}
                </div>
                {move || error.get().map(|message| view! { <div class="mt-4"><Alert kind=AlertKind::Error message=message /></div> })}
                <div class="mt-6 flex justify-end gap-3">
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <Button button_type="submit" disabled=save_action.pending()>
                        {title}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn BookingsTab(pending: RwSignal<Option<Confirmation>>) -> impl IntoView {
    let list = LocalResource::new(bookings_with_cars);

    view! { <BookingTable list=list pending=pending /> }
}

/// Booking rows with edit and delete actions, shared by the bookings tab and
/// the per-user bookings dialog.
#[component]
fn BookingTable(
    list: LocalResource<Result<Vec<Booking>, AppError>>,
    pending: RwSignal<Option<Confirmation>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Booking>);
    let reload = Callback::new(move |()| list.refetch());

    view! {
        <div class=Theme::TABLE_WRAPPER>
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class=Theme::TABLE_HEAD>"ID"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"User"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Car"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Start"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"End"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Total"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    {move || match list.get() {
                        None => view! {
                            <tr><td colspan="7" class="px-6 py-12 text-center"><Spinner /></td></tr>
                        }
                        .into_any(),
                        Some(Err(err)) => {
                            tracing::warn!(error = %err, "failed to load bookings");
                            view! {
                                <tr><td colspan="7" class="px-6 py-4">
                                    <Alert kind=AlertKind::Error message=failure_message("Failed to load bookings") />
                                </td></tr>
                            }
                            .into_any()
                        }
                        Some(Ok(rows)) if rows.is_empty() => view! {
                            <tr><td colspan="7" class=Theme::TABLE_CELL>"No bookings found."</td></tr>
                        }
                        .into_any(),
                        Some(Ok(rows)) => rows
                            .into_iter()
                            .map(|booking| {
                                let booking_id = booking.id;
                                let target = booking.clone();
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
                                        <td class=Theme::TABLE_CELL>{booking_id}</td>
                                        <td class=Theme::TABLE_CELL>{booking.username().to_string()}</td>
                                        <td class=Theme::TABLE_CELL>{booking.car_label()}</td>
                                        <td class=Theme::TABLE_CELL>{format_short_date(&booking.start_date)}</td>
                                        <td class=Theme::TABLE_CELL>{format_short_date(&booking.end_date)}</td>
                                        <td class=Theme::TABLE_CELL>
                                            {format_rate(booking.total_price.unwrap_or_default())}
                                        </td>
                                        <td class=format!("{} space-x-3", Theme::TABLE_CELL)>
                                            <button
                                                type="button"
                                                class=Theme::LINK_ACTION
                                                on:click=move |_| editing.set(Some(target.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                type="button"
                                                class=Theme::LINK_DANGER
                                                on:click=move |_| {
                                                    confirm_delete(
                                                        pending,
                                                        notifications,
                                                        "booking",
                                                        move || bookings::delete_booking(booking_id),
                                                        reload,
                                                    );
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
        {move || {
            editing
                .get()
                .map(|booking| view! { <BookingModal booking=booking editing=editing on_saved=reload /> })
        }}
    }
}

#[component]
fn BookingModal(
    booking: Booking,
    editing: RwSignal<Option<Booking>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let booking_id = booking.id;
    let fallback = fallback_rate(&booking);
    let form = RwSignal::new(BookingEdit::from_booking(&booking));
    let (error, set_error) = signal::<Option<String>>(None);
    let close = Callback::new(move |()| editing.set(None));

    // Rate of the car currently typed into the form.
    let selected_car = Memo::new(move |_| form.with(BookingEdit::car_id));
    let rate = LocalResource::new(move || {
        let car_id = selected_car.get();
        async move {
            match car_id {
                Some(id) => cars::get_car(id).await.ok().map(|car| car.daily_price()),
                None => None,
            }
        }
    });
    let daily_rate = move || rate.get().flatten().unwrap_or(fallback);
    let quote = move || form.with(|form| form.quote(daily_rate()));

    let save_action = Action::new_local(move |request: &BookingRequest| {
        let request = request.clone();
        async move { bookings::update_booking(booking_id, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    tracing::info!(booking_id, "booking updated");
                    notifications.success("Booking updated successfully.");
                    editing.set(None);
                    on_saved.run(());
                }
                Err(err) => {
                    tracing::warn!(booking_id, error = %err, "booking update failed");
                    set_error.set(Some(failure_message("Failed to update booking")));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(BookingEdit::to_request) {
            Ok(request) => {
                save_action.dispatch(request);
            }
            Err(reason) => set_error.set(Some(reason.to_string())),
        }
    };

    view! {
        <Modal title=format!("Edit Booking #{booking_id}") on_close=close>
            <form on:submit=on_submit>
                <div class="grid gap-4 sm:grid-cols-3">
                    <div>
                        <label class=Theme::LABEL for="booking-car-id">"Car ID"</label>
                        <input
                            id="booking-car-id"
                            type="number"
                            min="1"
                            class=Theme::INPUT
                            prop:value=move || form.with(|form| form.car_id.clone())
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                form.update(|form| form.car_id = value);
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="booking-start">"Start date"</label>
                        <input
                            id="booking-start"
                            type="date"
                            class=Theme::INPUT
                            prop:value=move || form.with(|form| form.start_date.clone())
                            on:change=move |event| {
                                let value = event_target_value(&event);
                                form.update(|form| form.start_date = value);
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="booking-end">"End date"</label>
                        <input
                            id="booking-end"
                            type="date"
                            class=Theme::INPUT
                            prop:value=move || form.with(|form| form.end_date.clone())
                            on:change=move |event| {
                                let value = event_target_value(&event);
                                form.update(|form| form.end_date = value);
                            }
                        />
                    </div>
                </div>
                <dl class="mt-6 grid grid-cols-3 gap-4 text-sm">
                    <div>
                        <dt class=Theme::MUTED>"Duration"</dt>
                        <dd class="font-medium">{move || quote().map(|q| format_days(q.days)).unwrap_or_else(|| "-".to_string())}</dd>
                    </div>
                    <div>
                        <dt class=Theme::MUTED>"Daily rate"</dt>
                        <dd class="font-medium">{move || format_price(daily_rate())}</dd>
                    </div>
                    <div>
                        <dt class=Theme::MUTED>"Total"</dt>
                        <dd class="font-semibold">{move || quote().map(|q| format_price(q.total)).unwrap_or_else(|| "-".to_string())}</dd>
                    </div>
                </dl>
                {move || error.get().map(|message| view! { <div class="mt-4"><Alert kind=AlertKind::Error message=message /></div> })}
                <div class="mt-6 flex justify-end gap-3">
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <Button button_type="submit" disabled=save_action.pending()>
                        "Save Changes"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
