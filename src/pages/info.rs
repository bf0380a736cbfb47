//! Static information pages.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1>"О нас"</h1>
            <p>
                "Площадка соединяет благотворительные фонды, доноров вещей "
                "и покупателей: каждая ставка превращается в помощь."
            </p>
        </section>
    }
}

#[component]
pub fn ContactsPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1>"Контакты"</h1>
            <p>"Пишите нам: support@dobro-auction.ru"</p>
        </section>
    }
}

#[component]
pub fn StoriesPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1>"Истории"</h1>
            <p>"Истории фондов и людей, которым помогли собранные средства."</p>
        </section>
    }
}

#[component]
pub fn CharityPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1>"Фонды"</h1>
            <p>"Организации, для которых проводятся аукционы площадки."</p>
        </section>
    }
}
