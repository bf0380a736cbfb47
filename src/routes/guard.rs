//! Guard decision for route transitions.
//!
//! A pure predicate gate: no token refresh, no re-authentication, no
//! side effects. The router wiring translates the decision into a
//! redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::RouteMeta;
use crate::state::session::SessionState;

/// Outcome of checking one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the target route.
    Allow,
    /// Not authenticated for an auth-gated route.
    ToLogin,
    /// Authenticated but the role does not match; go back where the
    /// user came from (home when there is no origin).
    ToOrigin,
}

/// Check a transition to `meta` for the given session.
pub fn decide(meta: &RouteMeta, session: &SessionState) -> GuardDecision {
    if !meta.requires_auth {
        return GuardDecision::Allow;
    }
    if !session.is_authenticated() {
        return GuardDecision::ToLogin;
    }
    if let Some(required) = meta.required_role {
        if session.role() != Some(required) {
            return GuardDecision::ToOrigin;
        }
    }
    GuardDecision::Allow
}
