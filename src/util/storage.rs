//! Durable client-side storage for the session layer.
//!
//! Wraps `localStorage` access behind plain functions so the session
//! store never touches `web_sys` directly. Only the session layer (and
//! the buyer-login ticket cache it writes) uses these keys; domain
//! stores keep their state in memory only. Requires a browser
//! environment; outside of it every read returns `None` and writes are
//! dropped.

use crate::net::types::Ticket;

/// Access token for the `Authorization` header.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Refresh token used for rotation.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Id of the last buyer who logged out, kept for cross-session UX.
pub const PREVIOUS_USER_KEY: &str = "previous_user_id";
/// Cached entitlement tickets fetched on buyer login.
pub const TICKETS_KEY: &str = "user_tickets";

/// Read a string value from localStorage.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a string value to localStorage.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from localStorage.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Persist the id of a buyer who is logging out.
pub fn set_previous_user_id(id: i64) {
    set_item(PREVIOUS_USER_KEY, &id.to_string());
}

/// Cache the buyer's entitlement tickets as JSON.
///
/// Best-effort: serialization failure drops the cache silently, the
/// login flow must not depend on it.
pub fn cache_tickets(tickets: &[Ticket]) {
    if let Ok(json) = serde_json::to_string(tickets) {
        set_item(TICKETS_KEY, &json);
    }
}
