//! Delivery details form.
//!
//! Reached two ways: `/delivery/:id` with a transaction id, or
//! `/delivery-form?bidId=…` right after payment, where the transaction
//! is found among the user's winnings by bid id.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::net::types::DeliveryDetails;
use crate::state::bids::{self, BidsState};

/// Address form for a paid winning. Saving merges the details into the
/// local winning record immediately.
#[component]
pub fn DeliveryPage() -> impl IntoView {
    let state = expect_context::<RwSignal<BidsState>>();
    let params = use_params_map();
    let query = use_query_map();

    bids::reset_delivery_state(state);

    let recipient = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());

    // Transaction id straight from the path, or resolved through the
    // winnings list when only the bid id is known.
    let transaction_id = move || {
        if let Some(id) = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok()) {
            return Some(id);
        }
        let bid_id = query.get().get("bidId")?.parse::<i64>().ok()?;
        state.with(|s| {
            s.winnings
                .iter()
                .find(|w| w.bid.as_ref().is_some_and(|b| b.id == bid_id))
                .map(|w| w.id)
        })
    };

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let _ = bids::fetch_user_winnings(state).await;
        });
    });

    // Prefill from an existing delivery record once the id is known.
    // A transaction reached by direct link is verified first — the
    // delivery endpoint 404s on transactions that were never paid.
    Effect::new(move || {
        let Some(id) = transaction_id() else { return };
        let direct_link = params.get_untracked().get("id").is_some();
        leptos::task::spawn_local(async move {
            if direct_link && bids::fetch_transaction_by_id(state, id).await.is_none() {
                return;
            }
            if let Some(saved) = bids::get_delivery_details(state, id).await {
                recipient.set(saved.details.recipient.unwrap_or_default());
                phone.set(saved.details.phone.unwrap_or_default());
                city.set(saved.details.city.unwrap_or_default());
                address.set(saved.details.address.unwrap_or_default());
                postal_code.set(saved.details.postal_code.unwrap_or_default());
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = transaction_id() else { return };
        let non_empty = |signal: RwSignal<String>| {
            let value = signal.get_untracked();
            (!value.trim().is_empty()).then(|| value.trim().to_owned())
        };
        let details = DeliveryDetails {
            recipient: non_empty(recipient),
            phone: non_empty(phone),
            city: non_empty(city),
            address: non_empty(address),
            postal_code: non_empty(postal_code),
            comment: None,
        };
        leptos::task::spawn_local(async move {
            let _ = bids::save_delivery_details(state, id, &details).await;
        });
    };

    view! {
        <section class="delivery-page">
            <h1>"Данные доставки"</h1>
            <form class="delivery-page__form" on:submit=on_submit>
                <label>
                    "Получатель"
                    <input
                        type="text"
                        prop:value=move || recipient.get()
                        on:input=move |ev| recipient.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Телефон"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Город"
                    <input
                        type="text"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Адрес"
                    <input
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Индекс"
                    <input
                        type="text"
                        prop:value=move || postal_code.get()
                        on:input=move |ev| postal_code.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || state.get().error.is_some()>
                    <p class="delivery-page__error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || state.get().delivery_success>
                    <p class="delivery-page__success">"Данные доставки сохранены"</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || state.get().loading>
                    "Сохранить"
                </button>
            </form>
        </section>
    }
}
