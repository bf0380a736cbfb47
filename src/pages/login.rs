//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net;
use crate::net::types::Credentials;
use crate::state::session::{self, SessionState};

/// Login form. On success the user lands back on the home page.
///
/// Confirmation links from registration e-mails land here with a
/// `token` query parameter; it is redeemed once on entry.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let verify_message = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(token) = query.get_untracked().get("token") else {
            return;
        };
        leptos::task::spawn_local(async move {
            match net::auth::verify_email(&token).await {
                Ok(response) => verify_message.set(Some(
                    response.message.unwrap_or_else(|| "Почта подтверждена".to_owned()),
                )),
                Err(err) => {
                    verify_message.set(Some(err.message_or("Не удалось подтвердить почту")));
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials =
            Credentials { email: email.get_untracked(), password: password.get_untracked() };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session::login(session, &credentials).await {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Вход"</h1>
            <Show when=move || verify_message.get().is_some()>
                <p class="auth-page__verify">{move || verify_message.get().unwrap_or_default()}</p>
            </Show>
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
                <Show when=move || session.get().error.is_some()>
                    <p class="auth-page__error">
                        {move || session.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || session.get().loading>
                    "Войти"
                </button>
            </form>
            <p>
                "Нет аккаунта? " <a href="/register">"Зарегистрироваться"</a>
            </p>
        </section>
    }
}
