//! JWT payload decoding for the session store.
//!
//! The client only needs the claims (expiry, subject) to decide whether
//! a stored token is still usable; signature verification is the
//! backend's job. The payload segment is base64url without padding.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};

/// Claims carried in the access token payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct TokenClaims {
    /// Expiry as seconds since the epoch.
    pub exp: i64,
    /// Subject user id, when the backend includes one.
    pub user_id: Option<i64>,
}

impl TokenClaims {
    /// Whether the token has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Decode the claims from a JWT without verifying the signature.
///
/// Returns `None` for anything that is not a three-segment token with a
/// JSON payload — callers treat an undecodable token as expired.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };
    // Some encoders pad the segment even though RFC 7515 says not to.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
