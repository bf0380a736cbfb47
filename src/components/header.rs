//! Top navigation bar with session-aware account links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Site-wide header: public navigation plus login/profile controls.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Добрый аукцион"</a>
            <nav class="site-header__nav">
                <a href="/auctions">"Аукционы"</a>
                <a href="/charity">"Фонды"</a>
                <a href="/stories">"Истории"</a>
                <a href="/about">"О нас"</a>
                <a href="/contacts">"Контакты"</a>
            </nav>
            <div class="site-header__account">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login">"Войти"</a>
                            <a class="site-header__register" href="/register">"Регистрация"</a>
                        }
                    }
                >
                    <a href="/profile">{move || session.get().display_name()}</a>
                    <button class="site-header__logout" on:click=on_logout.clone()>
                        "Выйти"
                    </button>
                </Show>
            </div>
        </header>
    }
}
