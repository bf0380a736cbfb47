//! Lot detail page: record, bid history, bidding and moderation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{LotRequest, Role};
use crate::state::bids::{self, BidsState};
use crate::state::lots::{self, LotsState};
use crate::state::session::SessionState;

/// One lot with its bids. Buyers bid; charity and admin accounts see
/// the moderation controls; the donor who created the lot can edit or
/// remove it.
#[component]
pub fn LotDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let lots_state = expect_context::<RwSignal<LotsState>>();
    let bids_state = expect_context::<RwSignal<BidsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let lot_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let amount = RwSignal::new(String::new());
    let edit_title = RwSignal::new(String::new());

    Effect::new(move || {
        let Some(id) = lot_id() else { return };
        leptos::task::spawn_local(async move {
            let _ = lots::fetch_lot_by_id(lots_state, id).await;
            let _ = bids::fetch_lot_bids(bids_state, id).await;
        });
    });

    on_cleanup(move || {
        lots::clear_current_lot(lots_state);
        bids::reset_bid_state(bids_state);
    });

    let can_moderate = move || {
        matches!(session.get().role(), Some(Role::Charity | Role::Admin))
    };

    // The donor who created the lot, or an admin.
    let can_edit = move || {
        let state = session.get();
        if state.role() == Some(Role::Admin) {
            return true;
        }
        let owner = lots_state.get().current_lot.and_then(|l| l.donor);
        owner.is_some() && owner == state.user.map(|u| u.id)
    };

    let on_bid = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = lot_id() else { return };
        let Ok(value) = amount.get_untracked().trim().parse::<f64>() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if bids::create_bid(bids_state, id, value).await.is_some() {
                let _ = bids::fetch_lot_bids(bids_state, id).await;
            }
        });
    };

    let on_approve = move |_| {
        let Some(id) = lot_id() else { return };
        leptos::task::spawn_local(async move {
            let _ = lots::approve_lot(lots_state, id).await;
        });
    };

    let on_reject = move |_| {
        let Some(id) = lot_id() else { return };
        leptos::task::spawn_local(async move {
            let _ = lots::reject_lot(lots_state, id).await;
        });
    };

    let on_rename = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = lots_state.with_untracked(|s| s.current_lot.clone()) else {
            return;
        };
        let title = edit_title.get_untracked();
        if title.trim().is_empty() {
            return;
        }
        let payload = LotRequest {
            auction: current.auction,
            title: title.trim().to_owned(),
            description: current.description.clone().unwrap_or_default(),
            category: current.category,
            start_price: current.start_price.clone(),
        };
        leptos::task::spawn_local(async move {
            if lots::update_lot(lots_state, current.id, &payload).await.is_some() {
                let _ = lots::fetch_lot_by_id(lots_state, current.id).await;
            }
        });
    };

    let on_delete = {
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = lot_id() else { return };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if lots::delete_lot(lots_state, id).await {
                    navigate("/auctions", NavigateOptions::default());
                }
            });
        }
    };

    let on_delete_image = move |image_id: i64| {
        let id = lot_id();
        leptos::task::spawn_local(async move {
            if lots::delete_image(lots_state, image_id).await {
                if let Some(id) = id {
                    let _ = lots::fetch_lot_by_id(lots_state, id).await;
                }
            }
        });
    };

    view! {
        <section class="lot-detail">
            <Show when=move || lots_state.get().current_lot.is_some()>
                <h1>{move || lots_state.get().current_lot.map(|l| l.title).unwrap_or_default()}</h1>
                <p>
                    {move || {
                        lots_state.get().current_lot.and_then(|l| l.description).unwrap_or_default()
                    }}
                </p>
            </Show>

            <Show when=can_moderate>
                <div class="lot-detail__moderation">
                    <button class="btn" on:click=on_approve>"Одобрить"</button>
                    <button class="btn" on:click=on_reject>"Отклонить"</button>
                </div>
            </Show>

            <Show when=can_edit>
                <div class="lot-detail__manage">
                    <form on:submit=on_rename>
                        <input
                            type="text"
                            placeholder="Новое название"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| edit_title.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">"Сохранить"</button>
                    </form>
                    <button class="btn btn--danger" on:click=on_delete.clone()>
                        "Удалить лот"
                    </button>
                    <ul class="lot-detail__images">
                        {move || {
                            lots_state
                                .get()
                                .current_lot
                                .map(|l| l.images)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|image| {
                                    let image_id = image.id;
                                    view! {
                                        <li>
                                            <img src=image.image alt=""/>
                                            <button
                                                class="btn"
                                                on:click=move |_| on_delete_image(image_id)
                                            >
                                                "Удалить фото"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>

            <Show when=move || session.get().role() == Some(Role::Buyer)>
                <form class="lot-detail__bid-form" on:submit=on_bid>
                    <input
                        type="number"
                        placeholder="Ваша ставка, ₽"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || bids_state.get().loading>
                        "Сделать ставку"
                    </button>
                </form>
                <Show when=move || bids_state.get().bid_success>
                    <p class="lot-detail__bid-ok">{move || bids_state.get().bid_message}</p>
                </Show>
            </Show>

            <Show when=move || bids_state.get().error.is_some()>
                <p class="lot-detail__error">{move || bids_state.get().error.unwrap_or_default()}</p>
            </Show>

            <h2>"Ставки"</h2>
            <ul class="lot-detail__bids">
                {move || {
                    bids_state
                        .get()
                        .sorted_bids()
                        .into_iter()
                        .map(|bid| {
                            let when = bid.created_at.format("%d.%m.%Y %H:%M").to_string();
                            view! {
                                <li class=("lot-detail__winner", bid.is_winner)>
                                    {bid.amount} " ₽ — " {when}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
