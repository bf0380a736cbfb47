//! Profile page: account, balance, bids, winnings, subscription.

use leptos::prelude::*;

use crate::net;
use crate::net::types::{DeliveryStatus, PaymentStatus, Role};
use crate::state::balance::{self, BalanceState};
use crate::state::bids::{self, BidsState};
use crate::state::session::SessionState;

/// The signed-in user's dashboard. Buyers get balance, bids, and
/// winnings with payment/delivery follow-ups; charity accounts see
/// their organization record.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let bids_state = expect_context::<RwSignal<BidsState>>();
    let balance_state = expect_context::<RwSignal<BalanceState>>();

    // Stale success banners from a previous visit have no business here.
    bids::reset_confirmation_state(bids_state);
    balance::reset_top_up_success(balance_state);

    let top_up_amount = RwSignal::new(String::new());
    let subscription = LocalResource::new(|| net::subscriptions::fetch_subscription());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let _ = bids::fetch_user_bids(bids_state).await;
            let _ = bids::fetch_user_winnings(bids_state).await;
            let _ = balance::fetch_balance(balance_state).await;
            let _ = balance::fetch_history(balance_state).await;
        });
    });

    let on_top_up = move |_| {
        let Ok(amount) = top_up_amount.get_untracked().trim().parse::<f64>() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if balance::top_up_balance(balance_state, amount).await.is_some() {
                top_up_amount.set(String::new());
            }
        });
    };

    let on_confirm = move |bid_id: i64| {
        leptos::task::spawn_local(async move {
            let _ = bids::confirm_delivery(bids_state, bid_id).await;
        });
    };

    let on_cancel_subscription = move |_| {
        leptos::task::spawn_local(async move {
            if net::subscriptions::cancel_subscription().await.is_ok() {
                subscription.refetch();
            }
        });
    };

    let on_create_subscription = move |_| {
        leptos::task::spawn_local(async move {
            if net::subscriptions::create_subscription("balance").await.is_ok() {
                subscription.refetch();
            }
        });
    };

    view! {
        <section class="profile-page">
            <h1>{move || session.get().display_name()}</h1>

            <Show when=move || session.get().role() == Some(Role::Charity)>
                <div class="profile-page__charity">
                    <h2>"Организация"</h2>
                    <p>
                        {move || {
                            session.get().user_charity.map(|c| c.name).unwrap_or_default()
                        }}
                    </p>
                </div>
            </Show>

            <div class="profile-page__balance">
                <h2>"Баланс"</h2>
                <p>{move || balance_state.get().formatted_balance()}</p>
                <div class="profile-page__top-up">
                    <input
                        type="number"
                        placeholder="Сумма, ₽"
                        prop:value=move || top_up_amount.get()
                        on:input=move |ev| top_up_amount.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=on_top_up>"Пополнить"</button>
                </div>
                <Show when=move || balance_state.get().top_up_success>
                    <p class="profile-page__top-up-ok">"Баланс пополнен"</p>
                </Show>
                <ul class="profile-page__history">
                    {move || {
                        balance_state
                            .get()
                            .history
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li>
                                        {entry.operation.unwrap_or_default()} " " {entry.amount} " ₽"
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>

            <div class="profile-page__bids">
                <h2>"Мои ставки"</h2>
                <ul>
                    {move || {
                        bids_state
                            .get()
                            .sorted_bids()
                            .into_iter()
                            .map(|bid| {
                                view! {
                                    <li class=("profile-page__won", bid.is_winner)>
                                        "Лот " {bid.lot} ": " {bid.amount} " ₽"
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>

            <div class="profile-page__winnings">
                <h2>"Мои выигрыши"</h2>
                <p class="profile-page__winnings-summary">
                    {move || {
                        let state = bids_state.get();
                        format!(
                            "К оплате: {} · Ждут подтверждения: {}",
                            state.pending_payment_winnings().len(),
                            state.pending_confirmation_winnings().len(),
                        )
                    }}
                </p>
                <ul>
                    {move || {
                        bids_state
                            .get()
                            .winnings
                            .into_iter()
                            .map(|winning| {
                                let bid_id = winning.bid.as_ref().map(|b| b.id);
                                let unpaid = winning.status == PaymentStatus::Pending;
                                let confirmable = winning.status == PaymentStatus::Completed
                                    && winning.delivery_status
                                        != Some(DeliveryStatus::Delivered);
                                view! {
                                    <li>
                                        {winning.lot.as_ref().map(|l| l.title.clone()).unwrap_or_default()}
                                        <Show when=move || unpaid>
                                            <a
                                                class="btn"
                                                href=format!(
                                                    "/payment?bidId={}",
                                                    bid_id.map(|id| id.to_string()).unwrap_or_default(),
                                                )
                                            >
                                                "Оплатить"
                                            </a>
                                        </Show>
                                        <Show when=move || !unpaid>
                                            <a class="btn" href=format!("/delivery/{}", winning.id)>
                                                "Доставка"
                                            </a>
                                        </Show>
                                        <Show when=move || confirmable>
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    if let Some(id) = bid_id {
                                                        on_confirm(id);
                                                    }
                                                }
                                            >
                                                "Подтвердить получение"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || bids_state.get().confirmation_success>
                    <p class="profile-page__confirm-ok">"Получение подтверждено"</p>
                </Show>
            </div>

            <div class="profile-page__subscription">
                <h2>"Подписка"</h2>
                <Suspense fallback=|| view! { <p>"Загрузка..."</p> }>
                    {move || {
                        subscription.get().map(|status| match status {
                            Ok(status) if status.is_active => {
                                view! {
                                    <div>
                                        <p>"Подписка активна"</p>
                                        <button class="btn" on:click=on_cancel_subscription>
                                            "Отменить"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            _ => {
                                view! {
                                    <div>
                                        <p>"Подписки нет"</p>
                                        <button class="btn" on:click=on_create_subscription>
                                            "Оформить подписку"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </section>
    }
}
