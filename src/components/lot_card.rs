//! Card for one lot in a list.

use leptos::prelude::*;

use crate::net::types::{Lot, LotStatus};

fn status_label(status: LotStatus) -> &'static str {
    match status {
        LotStatus::Pending => "На модерации",
        LotStatus::Active => "Активен",
        LotStatus::Approved => "Одобрен",
        LotStatus::Rejected => "Отклонён",
        LotStatus::Sold => "Продан",
        LotStatus::Unknown => "—",
    }
}

/// Compact lot summary linking to the detail page.
#[component]
pub fn LotCard(lot: Lot) -> impl IntoView {
    let href = format!("/lots/{}", lot.id);
    let price = lot.current_price.or(lot.start_price).unwrap_or_default();

    view! {
        <a class="lot-card" href=href>
            <h4 class="lot-card__title">{lot.title}</h4>
            <span class="lot-card__status">{status_label(lot.status)}</span>
            <span class="lot-card__price">{price} " ₽"</span>
        </a>
    }
}
