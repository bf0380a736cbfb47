use super::*;

// =============================================================
// Path matching
// =============================================================

#[test]
fn matches_home() {
    assert_eq!(match_route("/").unwrap().name, "home");
    assert_eq!(match_route("").unwrap().name, "home");
}

#[test]
fn matches_static_routes() {
    assert_eq!(match_route("/auctions").unwrap().name, "auctions");
    assert_eq!(match_route("/create-auction").unwrap().name, "create-auction");
    assert_eq!(match_route("/login").unwrap().name, "login");
}

#[test]
fn matches_param_routes() {
    assert_eq!(match_route("/auctions/17").unwrap().name, "auction-detail");
    assert_eq!(match_route("/lots/3").unwrap().name, "lot");
    assert_eq!(match_route("/delivery/8").unwrap().name, "delivery");
}

#[test]
fn tolerates_trailing_slash() {
    assert_eq!(match_route("/auctions/").unwrap().name, "auctions");
    assert_eq!(match_route("/auctions/17/").unwrap().name, "auction-detail");
}

#[test]
fn unknown_paths_do_not_match() {
    assert!(match_route("/no-such-page").is_none());
    assert!(match_route("/auctions/17/bids").is_none());
}

// =============================================================
// Table metadata
// =============================================================

#[test]
fn public_routes_have_no_auth_requirement() {
    for name in ["home", "auctions", "lot", "charity", "stories", "about", "contacts", "login", "register"] {
        let route = ROUTES.iter().find(|r| r.name == name).unwrap();
        assert!(!route.requires_auth, "{name} should be public");
        assert!(route.required_role.is_none());
    }
}

#[test]
fn guarded_routes_require_auth() {
    for name in ["auction-detail", "profile", "delivery", "delivery-form", "payment"] {
        let route = ROUTES.iter().find(|r| r.name == name).unwrap();
        assert!(route.requires_auth, "{name} should require auth");
        assert!(route.required_role.is_none());
    }
}

#[test]
fn creator_routes_require_roles() {
    let create_lot = ROUTES.iter().find(|r| r.name == "create-lot").unwrap();
    assert!(create_lot.requires_auth);
    assert_eq!(create_lot.required_role, Some(Role::Donor));

    let create_auction = ROUTES.iter().find(|r| r.name == "create-auction").unwrap();
    assert!(create_auction.requires_auth);
    assert_eq!(create_auction.required_role, Some(Role::Charity));
}
