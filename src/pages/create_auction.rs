//! Auction creation page for charity accounts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auctions::{self, AuctionsState};

/// Charity form posting a multipart payload (the cover image rides
/// along with the fields). Validation errors come back per field and
/// are shown as the multi-line message the store assembled.
#[component]
pub fn CreateAuctionPage() -> impl IntoView {
    let state = expect_context::<RwSignal<AuctionsState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let image_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let mut form = crate::net::http::FormPayload::new()
                .field("title", title.get_untracked())
                .field("description", description.get_untracked())
                .field("start_date", start_date.get_untracked())
                .field("end_date", end_date.get_untracked());
            if let Some(file) = image_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            {
                form = form.file("image", file);
            }
            leptos::task::spawn_local(async move {
                if auctions::create_auction(state, form).await.is_ok() {
                    navigate("/auctions", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <section class="create-auction">
            <h1>"Новый аукцион"</h1>
            <form class="create-auction__form" on:submit=on_submit>
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
                    "Начало"
                    <input
                        type="datetime-local"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Окончание"
                    <input
                        type="datetime-local"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Обложка"
                    <input type="file" accept="image/*" node_ref=image_input/>
                </label>
                <Show when=move || state.get().error.is_some()>
                    <pre class="create-auction__error">
                        {move || state.get().error.unwrap_or_default()}
                    </pre>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || state.get().loading>
                    "Создать аукцион"
                </button>
            </form>
        </section>
    }
}
