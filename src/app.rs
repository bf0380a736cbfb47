//! Root application component with routing, contexts, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::header::Header;
use crate::pages::{
    auction_detail::AuctionDetailPage,
    auctions::AuctionsPage,
    create_auction::CreateAuctionPage,
    create_lot::CreateLotPage,
    delivery::DeliveryPage,
    home::HomePage,
    info::{AboutPage, CharityPage, ContactsPage, StoriesPage},
    login::LoginPage,
    lot_detail::LotDetailPage,
    payment::PaymentPage,
    profile::ProfilePage,
    register::RegisterPage,
};
use crate::routes::guard::{GuardDecision, decide};
use crate::routes::match_route;
use crate::state::auctions::AuctionsState;
use crate::state::balance::BalanceState;
use crate::state::bids::BidsState;
use crate::state::lots::LotsState;
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides every store context, restores the persisted session, and
/// sets up client-side routing behind the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let auctions = RwSignal::new(AuctionsState::default());
    let lots = RwSignal::new(LotsState::default());
    let bids = RwSignal::new(BidsState::default());
    let balance = RwSignal::new(BalanceState::default());

    provide_context(session);
    provide_context(auctions);
    provide_context(lots);
    provide_context(bids);
    provide_context(balance);

    // Rehydrate the user behind a persisted token.
    Effect::new(move || {
        if session.with_untracked(|s| s.is_authenticated() && s.user.is_none()) {
            leptos::task::spawn_local(session::init(session));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dobro-client.css"/>
        <Title text="Добрый аукцион"/>

        <Router>
            <RouteGate>
                <Header/>
                <main>
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("auctions") view=AuctionsPage/>
                        <Route
                            path=(StaticSegment("auctions"), ParamSegment("id"))
                            view=AuctionDetailPage
                        />
                        <Route path=StaticSegment("create-lot") view=CreateLotPage/>
                        <Route path=(StaticSegment("lots"), ParamSegment("id")) view=LotDetailPage/>
                        <Route path=StaticSegment("charity") view=CharityPage/>
                        <Route path=StaticSegment("stories") view=StoriesPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("contacts") view=ContactsPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route
                            path=(StaticSegment("delivery"), ParamSegment("id"))
                            view=DeliveryPage
                        />
                        <Route path=StaticSegment("delivery-form") view=DeliveryPage/>
                        <Route path=StaticSegment("payment") view=PaymentPage/>
                        <Route path=StaticSegment("create-auction") view=CreateAuctionPage/>
                    </Routes>
                </main>
            </RouteGate>
        </Router>
    }
}

/// Runs the guard on every location change, before the matched page
/// renders anything meaningful.
///
/// Tracks the last allowed path so a role rejection can send the user
/// back where they came from; with no history yet it falls back to
/// home, as the route table promises.
#[component]
fn RouteGate(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();
    let origin = StoredValue::new("/".to_owned());

    Effect::new(move || {
        let path = location.pathname.get();
        let Some(meta) = match_route(&path) else {
            return;
        };
        match session.with_untracked(|s| decide(meta, s)) {
            GuardDecision::Allow => origin.set_value(path),
            GuardDecision::ToLogin => navigate("/login", NavigateOptions::default()),
            GuardDecision::ToOrigin => {
                navigate(&origin.get_value(), NavigateOptions::default());
            }
        }
    });

    children()
}
