//! Card for one auction in a list.

use leptos::prelude::*;

use crate::net::types::Auction;

/// Compact auction summary linking to the detail page.
#[component]
pub fn AuctionCard(auction: Auction) -> impl IntoView {
    let href = format!("/auctions/{}", auction.id);
    let ends = auction.end_date.format("%d.%m.%Y %H:%M").to_string();

    view! {
        <a class="auction-card" href=href>
            <h3 class="auction-card__title">{auction.title}</h3>
            <p class="auction-card__description">
                {auction.description.unwrap_or_default()}
            </p>
            <span class="auction-card__ends">"До " {ends}</span>
        </a>
    }
}
