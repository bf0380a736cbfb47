use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn user(role: Role) -> User {
    User {
        id: 42,
        email: "ivan@example.com".to_owned(),
        first_name: Some("Иван".to_owned()),
        last_name: None,
        role,
        charity: None,
    }
}

fn token_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp},"user_id":42}}"#).as_bytes());
    format!("{header}.{payload}.c2ln")
}

// =============================================================
// Defaults and derived getters
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert!(!state.register_success);
}

#[test]
fn authenticated_iff_access_token_present() {
    let mut state = SessionState::default();
    assert!(!state.is_authenticated());
    state.access_token = Some("token".to_owned());
    assert!(state.is_authenticated());
}

#[test]
fn display_name_prefers_first_name() {
    let mut state = SessionState { user: Some(user(Role::Buyer)), ..SessionState::default() };
    assert_eq!(state.display_name(), "Иван");

    state.user.as_mut().unwrap().first_name = None;
    assert_eq!(state.display_name(), "ivan");

    state.user.as_mut().unwrap().first_name = Some(String::new());
    assert_eq!(state.display_name(), "ivan");
}

#[test]
fn display_name_empty_without_user() {
    assert_eq!(SessionState::default().display_name(), "");
}

#[test]
fn role_comes_from_user_record() {
    let mut state = SessionState::default();
    assert_eq!(state.role(), None);
    state.user = Some(user(Role::Charity));
    assert_eq!(state.role(), Some(Role::Charity));
}

// =============================================================
// Token expiry
// =============================================================

#[test]
fn missing_token_counts_as_expired() {
    assert!(SessionState::default().is_token_expired(Utc::now()));
}

#[test]
fn undecodable_token_counts_as_expired() {
    let state =
        SessionState { access_token: Some("garbage".to_owned()), ..SessionState::default() };
    assert!(state.is_token_expired(Utc::now()));
}

#[test]
fn valid_token_expiry_is_compared_to_now() {
    let now = Utc::now();
    let live = SessionState {
        access_token: Some(token_expiring_at(now.timestamp() + 600)),
        ..SessionState::default()
    };
    assert!(!live.is_token_expired(now));

    let stale = SessionState {
        access_token: Some(token_expiring_at(now.timestamp() - 600)),
        ..SessionState::default()
    };
    assert!(stale.is_token_expired(now));
}

#[test]
fn token_claims_expose_subject() {
    let state = SessionState {
        access_token: Some(token_expiring_at(1_000)),
        ..SessionState::default()
    };
    assert_eq!(state.token_claims().and_then(|c| c.user_id), Some(42));
}

// =============================================================
// Token rotation
// =============================================================

#[test]
fn apply_tokens_always_rotates_access() {
    let mut state = SessionState {
        access_token: Some("old-access".to_owned()),
        refresh_token: Some("old-refresh".to_owned()),
        ..SessionState::default()
    };
    state.apply_tokens("new-access", None);
    assert_eq!(state.access_token.as_deref(), Some("new-access"));
    assert_eq!(state.refresh_token.as_deref(), Some("old-refresh"));
}

#[test]
fn apply_tokens_rotates_refresh_only_when_issued() {
    let mut state = SessionState::default();
    state.apply_tokens("a1", Some("r1"));
    assert_eq!(state.refresh_token.as_deref(), Some("r1"));
    state.apply_tokens("a2", Some("r2"));
    assert_eq!(state.access_token.as_deref(), Some("a2"));
    assert_eq!(state.refresh_token.as_deref(), Some("r2"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn departing_buyer_id_only_for_buyers() {
    let mut state = SessionState { user: Some(user(Role::Buyer)), ..SessionState::default() };
    assert_eq!(state.departing_buyer_id(), Some(42));

    state.user = Some(user(Role::Donor));
    assert_eq!(state.departing_buyer_id(), None);

    state.user = None;
    assert_eq!(state.departing_buyer_id(), None);
}

#[test]
fn clear_auth_leaves_no_session_data() {
    let mut state = SessionState {
        access_token: Some("a".to_owned()),
        refresh_token: Some("r".to_owned()),
        user: Some(user(Role::Charity)),
        user_charity: Some(Charity {
            id: 1,
            name: "Фонд".to_owned(),
            ogrn: None,
            description: None,
            user: None,
        }),
        ..SessionState::default()
    };
    state.clear_auth();
    assert!(!state.is_authenticated());
    assert!(state.refresh_token.is_none());
    assert!(state.user.is_none());
    assert!(state.user_charity.is_none());
}

// A login whose follow-up profile fetch gets a 401 ends unauthenticated:
// the handler runs the same teardown as clear_auth.
#[test]
fn teardown_after_fresh_login_returns_to_anonymous() {
    let mut state = SessionState::default();
    state.apply_tokens("fresh-access", Some("fresh-refresh"));
    assert!(state.is_authenticated());

    state.clear_auth();
    assert!(!state.is_authenticated());
    assert!(state.token_claims().is_none());
}
