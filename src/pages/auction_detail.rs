//! Auction detail page: the auction record, its timeline, and its lots.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::lot_card::LotCard;
use crate::net;
use crate::net::http::FormPayload;
use crate::net::types::Role;
use crate::state::auctions::{self, AuctionsState};
use crate::state::lots::{self, LotsState};
use crate::state::session::SessionState;

/// One auction with its lots. Buyers without a ticket can purchase one
/// here; charity and admin accounts can rename or delete the auction.
/// The lots request is re-filtered by auction id in the store, so
/// foreign lots never render.
#[component]
pub fn AuctionDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auctions_state = expect_context::<RwSignal<AuctionsState>>();
    let lots_state = expect_context::<RwSignal<LotsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let auction_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let ticket_message = RwSignal::new(None::<String>);
    let has_ticket = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());

    Effect::new(move || {
        let id = auction_id();
        let is_buyer = session.with_untracked(|s| s.role() == Some(Role::Buyer));
        leptos::task::spawn_local(async move {
            // The lots fetch runs even without an id: the store records
            // the validation error that the page then shows.
            if let Some(id) = id {
                let _ = auctions::fetch_auction_by_id(auctions_state, id).await;
                let _ = auctions::fetch_auction_events(auctions_state, id).await;
                if is_buyer {
                    if let Ok(access) = net::auctions::check_ticket_access(id).await {
                        has_ticket.set(access.has_access);
                    }
                }
            }
            let _ = lots::fetch_lots_by_auction(lots_state, id).await;
        });
    });

    on_cleanup(move || auctions::clear_current_auction(auctions_state));

    let can_manage = move || {
        matches!(session.get().role(), Some(Role::Charity | Role::Admin))
    };

    let on_purchase_ticket = move |_| {
        let Some(id) = auction_id() else { return };
        leptos::task::spawn_local(async move {
            match net::auctions::purchase_ticket(id).await {
                Ok(_) => {
                    has_ticket.set(true);
                    ticket_message.set(Some("Билет приобретён".to_owned()));
                }
                Err(err) => {
                    ticket_message.set(Some(err.message_or("Не удалось купить билет")));
                }
            }
        });
    };

    let on_rename = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = auction_id() else { return };
        let title = new_title.get_untracked();
        if title.trim().is_empty() {
            return;
        }
        let form = FormPayload::new().field("title", title.trim());
        leptos::task::spawn_local(async move {
            if auctions::update_auction(auctions_state, id, form).await.is_ok() {
                new_title.set(String::new());
            }
        });
    };

    let on_delete = {
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = auction_id() else { return };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if auctions::delete_auction(auctions_state, id).await.is_ok() {
                    navigate("/auctions", NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <section class="auction-detail">
            <Show when=move || auctions_state.get().current_auction.is_some()>
                <header class="auction-detail__header">
                    <h1>
                        {move || {
                            auctions_state.get().current_auction.map(|a| a.title).unwrap_or_default()
                        }}
                    </h1>
                    <p>
                        {move || {
                            auctions_state
                                .get()
                                .current_auction
                                .and_then(|a| a.description)
                                .unwrap_or_default()
                        }}
                    </p>
                </header>
            </Show>

            <Show when=move || session.get().role() == Some(Role::Buyer)>
                <Show
                    when=move || has_ticket.get()
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=on_purchase_ticket>
                                "Купить билет участника"
                            </button>
                        }
                    }
                >
                    <p class="auction-detail__ticket">"Билет участника уже есть"</p>
                </Show>
                <Show when=move || ticket_message.get().is_some()>
                    <p class="auction-detail__ticket">
                        {move || ticket_message.get().unwrap_or_default()}
                    </p>
                </Show>
            </Show>

            <Show when=can_manage>
                <div class="auction-detail__manage">
                    <form on:submit=on_rename>
                        <input
                            type="text"
                            placeholder="Новое название"
                            prop:value=move || new_title.get()
                            on:input=move |ev| new_title.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">"Переименовать"</button>
                    </form>
                    <button class="btn btn--danger" on:click=on_delete.clone()>
                        "Удалить аукцион"
                    </button>
                </div>
            </Show>

            <Show when=move || auctions_state.get().error.is_some()>
                <p class="auction-detail__error">
                    {move || auctions_state.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show when=move || !auctions_state.get().auction_events.is_empty()>
                <ul class="auction-detail__events">
                    {move || {
                        auctions_state
                            .get()
                            .auction_events
                            .into_iter()
                            .map(|event| {
                                view! { <li>{event.title.unwrap_or_default()}</li> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            <h2>"Лоты"</h2>
            <Show when=move || lots_state.get().error.is_some()>
                <p class="auction-detail__error">
                    {move || lots_state.get().error.unwrap_or_default()}
                </p>
            </Show>
            <div class="auction-detail__lots">
                {move || {
                    lots_state
                        .get()
                        .lots
                        .into_iter()
                        .map(|lot| view! { <LotCard lot=lot/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
