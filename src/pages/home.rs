//! Landing page.

use leptos::prelude::*;

use crate::components::lot_card::LotCard;
use crate::state::lots::{self, LotsState};

/// Home page: a short pitch plus a showcase of currently active lots.
#[component]
pub fn HomePage() -> impl IntoView {
    let lots_state = expect_context::<RwSignal<LotsState>>();

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let _ = lots::fetch_lots(lots_state, &[("status", "active")]).await;
        });
    });

    view! {
        <section class="home-page">
            <h1>"Добрый аукцион"</h1>
            <p>
                "Благотворительный маркетплейс: доноры отдают вещи, "
                "покупатели делают ставки, фонды получают выручку."
            </p>
            <a class="btn btn--primary" href="/auctions">
                "Смотреть аукционы"
            </a>

            <Show when=move || lots_state.get().has_lots()>
                <h2>"Сейчас на торгах"</h2>
                <div class="home-page__lots">
                    {move || {
                        lots_state
                            .get()
                            .active_lots()
                            .into_iter()
                            .take(6)
                            .map(|lot| view! { <LotCard lot=lot/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
