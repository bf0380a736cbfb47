use super::*;

use crate::net::types::{Role, User};
use crate::routes::match_route;

fn session_with_role(role: Role) -> SessionState {
    SessionState {
        access_token: Some("token".to_owned()),
        user: Some(User {
            id: 1,
            email: "user@example.com".to_owned(),
            first_name: None,
            last_name: None,
            role,
            charity: None,
        }),
        ..SessionState::default()
    }
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_route_allows_anonymous() {
    let route = match_route("/auctions").unwrap();
    assert_eq!(decide(route, &SessionState::default()), GuardDecision::Allow);
}

#[test]
fn public_route_ignores_role() {
    let route = match_route("/lots/5").unwrap();
    assert_eq!(decide(route, &session_with_role(Role::Admin)), GuardDecision::Allow);
}

// =============================================================
// Authentication gate
// =============================================================

#[test]
fn auth_route_redirects_anonymous_to_login() {
    let route = match_route("/profile").unwrap();
    assert_eq!(decide(route, &SessionState::default()), GuardDecision::ToLogin);
}

#[test]
fn auth_route_allows_any_authenticated_role() {
    let route = match_route("/auctions/3").unwrap();
    for role in [Role::Buyer, Role::Donor, Role::Charity, Role::Admin] {
        assert_eq!(decide(route, &session_with_role(role)), GuardDecision::Allow);
    }
}

// Token presence alone is what "authenticated" means here; a token
// without a loaded user record still passes the plain auth gate.
#[test]
fn auth_route_allows_token_without_profile() {
    let route = match_route("/payment").unwrap();
    let session =
        SessionState { access_token: Some("t".to_owned()), ..SessionState::default() };
    assert_eq!(decide(route, &session), GuardDecision::Allow);
}

// =============================================================
// Role gate
// =============================================================

#[test]
fn role_route_requires_exact_match() {
    let route = match_route("/create-lot").unwrap();
    assert_eq!(decide(route, &session_with_role(Role::Donor)), GuardDecision::Allow);
    assert_eq!(decide(route, &session_with_role(Role::Buyer)), GuardDecision::ToOrigin);
    // Exact match only; admins get no pass-through.
    assert_eq!(decide(route, &session_with_role(Role::Admin)), GuardDecision::ToOrigin);
}

#[test]
fn role_route_unauthenticated_goes_to_login_first() {
    let route = match_route("/create-auction").unwrap();
    assert_eq!(decide(route, &SessionState::default()), GuardDecision::ToLogin);
}

#[test]
fn role_route_without_user_record_redirects_to_origin() {
    let route = match_route("/create-auction").unwrap();
    let session =
        SessionState { access_token: Some("t".to_owned()), ..SessionState::default() };
    assert_eq!(decide(route, &session), GuardDecision::ToOrigin);
}
