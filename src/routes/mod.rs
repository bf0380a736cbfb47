//! Route table and navigation guard.
//!
//! Every route declares whether it needs authentication and, for the
//! creator pages, which role. The table is consulted by the guard on
//! each transition; the router components in `app.rs` mirror it.

pub mod guard;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Static metadata for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: &'static str,
    /// Path pattern; `:segment` matches any single segment.
    pub path: &'static str,
    pub requires_auth: bool,
    pub required_role: Option<Role>,
}

/// All known routes. Unknown paths fall back to home.
pub const ROUTES: &[RouteMeta] = &[
    RouteMeta { name: "home", path: "/", requires_auth: false, required_role: None },
    RouteMeta { name: "auctions", path: "/auctions", requires_auth: false, required_role: None },
    RouteMeta {
        name: "auction-detail",
        path: "/auctions/:id",
        requires_auth: true,
        required_role: None,
    },
    RouteMeta {
        name: "create-lot",
        path: "/create-lot",
        requires_auth: true,
        required_role: Some(Role::Donor),
    },
    RouteMeta { name: "lot", path: "/lots/:id", requires_auth: false, required_role: None },
    RouteMeta { name: "charity", path: "/charity", requires_auth: false, required_role: None },
    RouteMeta { name: "stories", path: "/stories", requires_auth: false, required_role: None },
    RouteMeta { name: "about", path: "/about", requires_auth: false, required_role: None },
    RouteMeta { name: "contacts", path: "/contacts", requires_auth: false, required_role: None },
    RouteMeta { name: "login", path: "/login", requires_auth: false, required_role: None },
    RouteMeta { name: "register", path: "/register", requires_auth: false, required_role: None },
    RouteMeta { name: "profile", path: "/profile", requires_auth: true, required_role: None },
    RouteMeta { name: "delivery", path: "/delivery/:id", requires_auth: true, required_role: None },
    RouteMeta {
        name: "delivery-form",
        path: "/delivery-form",
        requires_auth: true,
        required_role: None,
    },
    RouteMeta { name: "payment", path: "/payment", requires_auth: true, required_role: None },
    RouteMeta {
        name: "create-auction",
        path: "/create-auction",
        requires_auth: true,
        required_role: Some(Role::Charity),
    },
];

/// Look up the route matching a concrete path. Trailing slashes are
/// ignored; query strings must be stripped by the caller.
pub fn match_route(path: &str) -> Option<&'static RouteMeta> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    ROUTES.iter().find(|route| {
        let pattern: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        pattern.len() == segments.len()
            && pattern
                .iter()
                .zip(&segments)
                .all(|(p, s)| p.starts_with(':') || p == s)
    })
}
