//! Payment page for a won lot.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::bids::{self, BidsState};

/// Pays for the winning named by the `bidId` query parameter. The id
/// is passed through as-is — the store rejects an empty one before any
/// request goes out.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let state = expect_context::<RwSignal<BidsState>>();
    let query = use_query_map();

    bids::reset_payment_state(state);

    let bid_id = move || query.get().get("bidId").unwrap_or_default();
    let method = RwSignal::new("balance".to_owned());

    let on_pay = move |_| {
        let id = bid_id();
        let chosen = method.get_untracked();
        leptos::task::spawn_local(async move {
            let _ = bids::pay_for_winning(state, &id, &chosen).await;
        });
    };

    view! {
        <section class="payment-page">
            <h1>"Оплата выигрыша"</h1>
            <Show
                when=move || state.get().payment_success
                fallback=move || {
                    view! {
                        <div class="payment-page__form">
                            <label>
                                "Способ оплаты"
                                <select on:change=move |ev| method.set(event_target_value(&ev))>
                                    <option value="balance" selected>"С баланса"</option>
                                    <option value="card">"Картой"</option>
                                </select>
                            </label>
                            <button
                                class="btn btn--primary"
                                on:click=on_pay
                                disabled=move || state.get().loading
                            >
                                "Оплатить"
                            </button>
                            <Show when=move || state.get().error.is_some()>
                                <p class="payment-page__error">
                                    {move || state.get().error.unwrap_or_default()}
                                </p>
                            </Show>
                        </div>
                    }
                }
            >
                <p class="payment-page__success">"Оплата прошла успешно!"</p>
                <a class="btn" href=move || format!("/delivery-form?bidId={}", bid_id())>
                    "Указать данные доставки"
                </a>
            </Show>
        </section>
    }
}
