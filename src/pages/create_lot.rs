//! Lot creation page for donors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LotRequest;
use crate::state::lots::{self, LotsState};

/// Donor form: lot fields plus an optional photo uploaded right after
/// the lot record is created.
#[component]
pub fn CreateLotPage() -> impl IntoView {
    let state = expect_context::<RwSignal<LotsState>>();
    let navigate = use_navigate();

    lots::reset_success(state);

    let auction = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let start_price = RwSignal::new(String::new());
    let image_input: NodeRef<leptos::html::Input> = NodeRef::new();

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let _ = lots::fetch_categories(state).await;
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(auction_id) = auction.get_untracked().trim().parse::<i64>() else {
            return;
        };
        let payload = LotRequest {
            auction: auction_id,
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked().parse().ok(),
            start_price: {
                let raw = start_price.get_untracked();
                (!raw.trim().is_empty()).then(|| raw.trim().to_owned())
            },
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let file = image_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            leptos::task::spawn_local(async move {
                let Some(lot) = lots::create_lot(state, &payload).await else {
                    return;
                };
                if let Some(file) = file {
                    let form = crate::net::http::FormPayload::new()
                        .field("lot", lot.id.to_string())
                        .file("image", file);
                    let _ = lots::upload_image(state, form).await;
                }
                navigate(&format!("/lots/{}", lot.id), NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&payload, &navigate);
        }
    };

    view! {
        <section class="create-lot">
            <h1>"Новый лот"</h1>
            <form class="create-lot__form" on:submit=on_submit>
                <label>
                    "Аукцион (ID)"
                    <input
                        type="number"
                        prop:value=move || auction.get()
                        on:input=move |ev| auction.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Название"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Описание"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Категория"
                    <select on:change=move |ev| category.set(event_target_value(&ev))>
                        <option value="">"Без категории"</option>
                        {move || {
                            state
                                .get()
                                .categories
                                .into_iter()
                                .map(|c| {
                                    view! { <option value=c.id.to_string()>{c.name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label>
                    "Начальная цена, ₽"
                    <input
                        type="number"
                        prop:value=move || start_price.get()
                        on:input=move |ev| start_price.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Фотография"
                    <input type="file" accept="image/*" node_ref=image_input/>
                </label>
                <Show when=move || state.get().error.is_some()>
                    <p class="create-lot__error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || state.get().loading>
                    "Создать лот"
                </button>
            </form>
        </section>
    }
}
