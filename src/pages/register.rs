//! Registration page.

use leptos::prelude::*;

use crate::net::types::RegisterRequest;
use crate::state::session::{self, SessionState};

/// Registration form with a role selector. Charity accounts add the
/// organization fields. Success shows the confirmation message and
/// leaves the user anonymous until the e-mail is verified.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // A revisit should never show a stale "check your mail" banner.
    session::reset_register_state(session);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let role = RwSignal::new("buyer".to_owned());
    let charity_name = RwSignal::new(String::new());
    let ogrn = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let is_charity = role.get_untracked() == "charity";
        let payload = RegisterRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: None,
            role: role.get_untracked(),
            charity_name: is_charity.then(|| charity_name.get_untracked()),
            ogrn: is_charity.then(|| ogrn.get_untracked()),
        };
        leptos::task::spawn_local(async move {
            let _ = session::register(session, &payload).await;
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Регистрация"</h1>
            <Show
                when=move || session.get().register_success
                fallback=move || {
                    view! {
                        <form class="auth-page__form" on:submit=on_submit>
                            <label>
                                "Электронная почта"
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Пароль"
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Имя"
                                <input
                                    type="text"
                                    prop:value=move || first_name.get()
                                    on:input=move |ev| first_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Кто вы"
                                <select on:change=move |ev| role.set(event_target_value(&ev))>
                                    <option value="buyer" selected>"Покупатель"</option>
                                    <option value="donor">"Донор"</option>
                                    <option value="charity">"Благотворительная организация"</option>
                                </select>
                            </label>
                            <Show when=move || role.get() == "charity">
                                <label>
                                    "Название организации"
                                    <input
                                        type="text"
                                        prop:value=move || charity_name.get()
                                        on:input=move |ev| charity_name.set(event_target_value(&ev))
                                    />
                                </label>
                                <label>
                                    "ОГРН"
                                    <input
                                        type="text"
                                        prop:value=move || ogrn.get()
                                        on:input=move |ev| ogrn.set(event_target_value(&ev))
                                    />
                                </label>
                            </Show>
                            <Show when=move || session.get().error.is_some()>
                                <p class="auth-page__error">
                                    {move || session.get().error.unwrap_or_default()}
                                </p>
                            </Show>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || session.get().loading
                            >
                                "Зарегистрироваться"
                            </button>
                        </form>
                    }
                }
            >
                <p class="auth-page__success">{move || session.get().register_message}</p>
            </Show>
        </section>
    }
}
