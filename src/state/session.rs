//! Session store: tokens, current user, linked charity, and the
//! login/register/logout flows.
//!
//! DESIGN
//! ======
//! The state lives in an `RwSignal<SessionState>` provided via context;
//! actions are free async functions over that signal, mirroring the
//! other stores. A present access token means "authenticated" — role
//! gates additionally check the decoded expiry, since the token's mere
//! presence proves nothing past it. Tokens persist in localStorage and
//! hydrate back on startup; everything else is rebuilt by fetching.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::net;
use crate::net::types::{Charity, Credentials, RegisterRequest, Role, User};
use crate::util::jwt::{self, TokenClaims};
use crate::util::storage;

/// Message shown when registration succeeds without a server message.
const REGISTER_FALLBACK: &str =
    "Регистрация успешна! Проверьте вашу почту для подтверждения аккаунта.";

/// Authentication state for the whole app.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
    pub user_charity: Option<Charity>,
    pub loading: bool,
    pub error: Option<String>,
    pub register_success: bool,
    pub register_message: String,
}

impl SessionState {
    /// Rebuild the session from durable storage on startup. Only the
    /// tokens persist; the user record is refetched.
    pub fn restore() -> Self {
        Self {
            access_token: storage::get_item(storage::ACCESS_TOKEN_KEY),
            refresh_token: storage::get_item(storage::REFRESH_TOKEN_KEY),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Claims decoded from the access token, if it decodes at all.
    pub fn token_claims(&self) -> Option<TokenClaims> {
        jwt::decode_claims(self.access_token.as_deref()?)
    }

    /// A token that fails to decode counts as expired.
    pub fn is_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.token_claims().is_none_or(|claims| claims.is_expired(now))
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// First name, falling back to the local part of the e-mail.
    pub fn display_name(&self) -> String {
        let Some(user) = &self.user else {
            return String::new();
        };
        match user.first_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => user.email.split('@').next().unwrap_or_default().to_owned(),
        }
    }

    /// Store a fresh token pair; the refresh token only rotates when a
    /// new one is actually issued.
    fn apply_tokens(&mut self, access: &str, refresh: Option<&str>) {
        self.access_token = Some(access.to_owned());
        if let Some(refresh) = refresh {
            self.refresh_token = Some(refresh.to_owned());
        }
    }

    /// Id to remember across sessions when this user logs out. Only
    /// buyers are tracked.
    fn departing_buyer_id(&self) -> Option<i64> {
        let user = self.user.as_ref()?;
        (user.role == Role::Buyer).then_some(user.id)
    }

    /// Drop every trace of the authenticated user from memory.
    fn clear_auth(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user = None;
        self.user_charity = None;
    }
}

/// Startup sequencing: with a persisted token, refresh it if stale,
/// then load the profile (and the charity record for charity users).
pub async fn init(session: RwSignal<SessionState>) {
    let (has_token, expired, refresh) = session.with_untracked(|s| {
        (s.is_authenticated(), s.is_token_expired(Utc::now()), s.refresh_token.clone())
    });
    if !has_token {
        return;
    }

    if expired {
        let Some(refresh) = refresh else {
            logout(session);
            return;
        };
        match net::auth::refresh_token(&refresh).await {
            Ok(rotated) => update_tokens(session, &rotated.access, rotated.refresh.as_deref()),
            Err(err) => {
                leptos::logging::warn!("token refresh failed: {err}");
                logout(session);
                return;
            }
        }
    }

    fetch_user_profile(session).await;
    if session.with_untracked(|s| s.role() == Some(Role::Charity)) {
        let _ = fetch_user_charity(session).await;
    }
}

/// Submit a registration. On success the user stays anonymous with a
/// pending-verification message; `true` means submitted.
pub async fn register(session: RwSignal<SessionState>, payload: &RegisterRequest) -> bool {
    session.update(|s| {
        s.loading = true;
        s.error = None;
        s.register_success = false;
        s.register_message = String::new();
    });

    let ok = match net::auth::register(payload).await {
        Ok(response) => {
            session.update(|s| {
                s.register_success = true;
                s.register_message =
                    response.message.unwrap_or_else(|| REGISTER_FALLBACK.to_owned());
            });
            true
        }
        Err(err) => {
            leptos::logging::warn!("registration failed: {err}");
            session.update(|s| s.error = Some(err.message_or("Ошибка при регистрации")));
            false
        }
    };

    session.update(|s| s.loading = false);
    ok
}

/// Log in, persist the token pair, then load the profile. Charity
/// users also get their linked charity record; buyers get a
/// best-effort ticket cache whose failure never fails the login.
pub async fn login(session: RwSignal<SessionState>, credentials: &Credentials) -> bool {
    session.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let ok = match net::auth::login(credentials).await {
        Ok(tokens) => {
            storage::set_item(storage::ACCESS_TOKEN_KEY, &tokens.access);
            storage::set_item(storage::REFRESH_TOKEN_KEY, &tokens.refresh);
            session.update(|s| s.apply_tokens(&tokens.access, Some(&tokens.refresh)));

            fetch_user_profile(session).await;

            match session.with_untracked(SessionState::role) {
                Some(Role::Charity) => {
                    let _ = fetch_user_charity(session).await;
                }
                Some(Role::Buyer) => match net::auctions::fetch_my_tickets().await {
                    Ok(tickets) => storage::cache_tickets(&tickets),
                    Err(err) => {
                        leptos::logging::warn!("ticket fetch after login failed: {err}");
                    }
                },
                _ => {}
            }
            true
        }
        Err(err) => {
            session.update(|s| s.error = Some(err.message_or("Неверный логин или пароль")));
            false
        }
    };

    session.update(|s| s.loading = false);
    ok
}

/// Load the current user's profile. A 401 here is the one failure with
/// a global side effect: the whole session is torn down.
pub async fn fetch_user_profile(session: RwSignal<SessionState>) {
    if session.with_untracked(|s| !s.is_authenticated()) {
        return;
    }

    session.update(|s| s.loading = true);

    match net::auth::fetch_profile().await {
        Ok(user) => session.update(|s| s.user = Some(user)),
        Err(err) if err.is_unauthorized() => logout(session),
        Err(err) => leptos::logging::warn!("profile fetch failed: {err}"),
    }

    session.update(|s| s.loading = false);
}

/// Load the charity record linked to the current (charity-role) user.
///
/// The direct endpoint is unreliable; on failure the full charity list
/// is scanned for one owned by the current user. The fallback failing
/// too is logged, not surfaced.
pub async fn fetch_user_charity(session: RwSignal<SessionState>) -> Option<Charity> {
    let (eligible, user_id) = session.with_untracked(|s| {
        (s.is_authenticated() && s.role() == Some(Role::Charity), s.user.as_ref().map(|u| u.id))
    });
    if !eligible {
        return None;
    }

    session.update(|s| s.loading = true);

    let found = match net::auth::fetch_user_charity().await {
        Ok(charity) => Some(charity),
        Err(_) => match net::auth::fetch_charities().await {
            Ok(charities) => charities
                .into_iter()
                .find(|c| c.user.as_ref().map(|owner| owner.id) == user_id),
            Err(err) => {
                leptos::logging::warn!("charity list fallback failed: {err}");
                None
            }
        },
    };

    if let Some(charity) = &found {
        session.update(|s| {
            s.user_charity = Some(charity.clone());
            if let Some(user) = &mut s.user {
                user.charity = Some(charity.clone());
            }
        });
    }

    session.update(|s| s.loading = false);
    found
}

/// Tear down the session. A departing buyer leaves their id behind for
/// cross-session continuity.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(|s| {
        if let Some(id) = s.departing_buyer_id() {
            storage::set_previous_user_id(id);
        }
        s.clear_auth();
    });

    storage::remove_item(storage::ACCESS_TOKEN_KEY);
    storage::remove_item(storage::REFRESH_TOKEN_KEY);
}

/// Rotate tokens after a refresh. The access token always rotates; the
/// refresh token only when a new one was issued. Both persist.
pub fn update_tokens(session: RwSignal<SessionState>, access: &str, refresh: Option<&str>) {
    session.update(|s| s.apply_tokens(access, refresh));
    if let Some(refresh) = refresh {
        storage::set_item(storage::REFRESH_TOKEN_KEY, refresh);
    }
    storage::set_item(storage::ACCESS_TOKEN_KEY, access);
}

/// Clear the post-registration flag and message.
pub fn reset_register_state(session: RwSignal<SessionState>) {
    session.update(|s| {
        s.register_success = false;
        s.register_message = String::new();
    });
}
