//! Auction list page.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::auction_card::AuctionCard;
use crate::state::auctions::{self, AuctionsState};

/// All auctions still running, newest data fetched on entry.
#[component]
pub fn AuctionsPage() -> impl IntoView {
    let state = expect_context::<RwSignal<AuctionsState>>();

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let _ = auctions::fetch_auctions(state).await;
        });
    });

    view! {
        <section class="auctions-page">
            <h1>"Аукционы"</h1>
            <Show when=move || state.get().error.is_some()>
                <p class="auctions-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || state.get().has_auctions()
                fallback=move || {
                    view! {
                        <p class="auctions-page__empty">
                            {move || {
                                if state.get().loading { "Загрузка..." } else { "Аукционов пока нет" }
                            }}
                        </p>
                    }
                }
            >
                <div class="auctions-page__grid">
                    {move || {
                        state
                            .get()
                            .active_auctions(Utc::now())
                            .into_iter()
                            .map(|auction| view! { <AuctionCard auction=auction/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
