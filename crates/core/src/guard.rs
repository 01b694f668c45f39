//! Route guard decision procedure
//!
//! A [`Guard`] maps an identity snapshot and the current route to a
//! [`Decision`]: wait, render the protected content, or send the user to the
//! login route. Two presets cover the two gate components:
//!
//! - [`Guard::auth_gate`] keeps the query string in the return target, can
//!   require a verified email, and renders nothing while waiting.
//! - [`Guard::require_auth`] returns to the bare path (`/editor` when the
//!   path is unknown) and shows a loading indicator while waiting.
//!
//! [`GuardSession`] wraps a guard with a redirect latch so that repeated
//! evaluation of an unchanged state navigates only once.

use tracing::debug;

use crate::identity::IdentityState;
use crate::redirect::LoginRedirect;

/// Current location as seen by a guard
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteSnapshot {
    pub path: Option<String>,
    /// Query string without the leading `?`
    pub query: Option<String>,
}

impl RouteSnapshot {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            query: None,
        }
    }

    /// Location whose path could not be determined
    pub const fn unknown() -> Self {
        Self {
            path: None,
            query: None,
        }
    }

    /// Attach a query string; a leading `?` and empty queries are ignored
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.strip_prefix('?').unwrap_or(&query);
        self.query = (!query.is_empty()).then(|| query.to_string());
        self
    }

    fn path_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.path.as_deref().filter(|p| !p.is_empty()).unwrap_or(fallback)
    }
}

/// What a guard renders while it has no decision to show content
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Empty,
    Loading,
}

/// Outcome of a single guard evaluation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Identity state not settled yet
    Pending,
    /// Show the protected content
    Render,
    /// Replace the current history entry with the login route
    Redirect(LoginRedirect),
}

/// Configurable gate over protected content
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guard {
    require_verified: bool,
    carry_query: bool,
    fallback_path: &'static str,
    placeholder: Placeholder,
}

impl Guard {
    /// Gate that optionally requires a verified email
    pub const fn auth_gate(require_verified: bool) -> Self {
        Self {
            require_verified,
            carry_query: true,
            fallback_path: "/",
            placeholder: Placeholder::Empty,
        }
    }

    /// Gate that only requires a session
    pub const fn require_auth() -> Self {
        Self {
            require_verified: false,
            carry_query: false,
            fallback_path: "/editor",
            placeholder: Placeholder::Loading,
        }
    }

    pub const fn requires_verified(&self) -> bool {
        self.require_verified
    }

    /// What to render while the decision is not [`Decision::Render`]
    pub const fn placeholder(&self) -> Placeholder {
        self.placeholder
    }

    /// Decide what to do for the given snapshot and location
    pub fn decide(&self, state: &IdentityState, route: &RouteSnapshot) -> Decision {
        if !state.settled {
            return Decision::Pending;
        }

        let path = route.path_or(self.fallback_path);
        let Some(user) = &state.user else {
            let next = match (&route.query, self.carry_query) {
                (Some(query), true) => format!("{path}?{query}"),
                _ => path.to_string(),
            };
            return Decision::Redirect(LoginRedirect::sign_in(next));
        };

        if self.require_verified && !user.email_verified {
            return Decision::Redirect(LoginRedirect::verify_email(path));
        }

        Decision::Render
    }
}

/// Result of [`GuardSession::evaluate`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub decision: Decision,
    /// Navigation to perform now, if any
    pub navigate: Option<LoginRedirect>,
}

impl Outcome {
    pub const fn renders_content(&self) -> bool {
        matches!(self.decision, Decision::Render)
    }
}

/// A guard plus the last redirect it issued
#[derive(Clone, Debug)]
pub struct GuardSession {
    guard: Guard,
    issued: Option<LoginRedirect>,
}

impl GuardSession {
    pub const fn new(guard: Guard) -> Self {
        Self {
            guard,
            issued: None,
        }
    }

    pub const fn guard(&self) -> Guard {
        self.guard
    }

    /// Evaluate the guard; a redirect is handed out once until the guard
    /// renders content again or the target changes.
    pub fn evaluate(&mut self, state: &IdentityState, route: &RouteSnapshot) -> Outcome {
        let decision = self.guard.decide(state, route);
        let navigate = match &decision {
            Decision::Redirect(redirect) if self.issued.as_ref() != Some(redirect) => {
                debug!(login = %redirect.href(), "Guard redirecting to login");
                self.issued = Some(redirect.clone());
                Some(redirect.clone())
            }
            Decision::Render => {
                self.issued = None;
                None
            }
            _ => None,
        };
        Outcome { decision, navigate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::User;

    fn unverified() -> IdentityState {
        IdentityState::signed_in(User::new("u1").verified(false))
    }

    fn verified() -> IdentityState {
        IdentityState::signed_in(User::new("u1").verified(true))
    }

    fn href(decision: Decision) -> String {
        match decision {
            Decision::Redirect(redirect) => redirect.href(),
            other => panic!("Expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_unsettled_state_is_pending_for_both_guards() {
        let route = RouteSnapshot::new("/editor");
        let states = [
            IdentityState::unsettled(),
            IdentityState {
                user: Some(User::new("u1").verified(true)),
                settled: false,
            },
        ];
        for state in &states {
            for guard in [
                Guard::auth_gate(false),
                Guard::auth_gate(true),
                Guard::require_auth(),
            ] {
                assert_eq!(guard.decide(state, &route), Decision::Pending);
            }
        }
    }

    #[test]
    fn test_auth_gate_carries_query_when_signed_out() {
        let route = RouteSnapshot::new("/editor").with_query("tab=2");
        let decision = Guard::auth_gate(false).decide(&IdentityState::signed_out(), &route);
        assert_eq!(href(decision), "/login?next=%2Feditor%3Ftab%3D2");
    }

    #[test]
    fn test_auth_gate_without_query() {
        let route = RouteSnapshot::new("/profile").with_query("?");
        let decision = Guard::auth_gate(true).decide(&IdentityState::signed_out(), &route);
        assert_eq!(href(decision), "/login?next=%2Fprofile");
    }

    #[test]
    fn test_auth_gate_requires_verified_email() {
        let route = RouteSnapshot::new("/profile");
        let decision = Guard::auth_gate(true).decide(&unverified(), &route);
        assert_eq!(href(decision), "/login?verify=1&next=%2Fprofile");
    }

    #[test]
    fn test_verify_redirect_drops_query() {
        let route = RouteSnapshot::new("/profile").with_query("tab=security");
        let decision = Guard::auth_gate(true).decide(&unverified(), &route);
        assert_eq!(href(decision), "/login?verify=1&next=%2Fprofile");
    }

    #[test]
    fn test_auth_gate_renders_when_requirements_met() {
        let route = RouteSnapshot::new("/profile");
        assert_eq!(
            Guard::auth_gate(false).decide(&unverified(), &route),
            Decision::Render
        );
        assert_eq!(
            Guard::auth_gate(true).decide(&verified(), &route),
            Decision::Render
        );
    }

    #[test]
    fn test_require_auth_drops_query_and_defaults_path() {
        let guard = Guard::require_auth();
        let route = RouteSnapshot::new("/editor").with_query("tab=2");
        assert_eq!(
            href(guard.decide(&IdentityState::signed_out(), &route)),
            "/login?next=%2Feditor"
        );
        assert_eq!(
            href(guard.decide(&IdentityState::signed_out(), &RouteSnapshot::unknown())),
            "/login?next=%2Feditor"
        );
    }

    #[test]
    fn test_require_auth_ignores_verification() {
        let route = RouteSnapshot::new("/editor");
        assert_eq!(
            Guard::require_auth().decide(&unverified(), &route),
            Decision::Render
        );
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Guard::auth_gate(true).placeholder(), Placeholder::Empty);
        assert_eq!(Guard::require_auth().placeholder(), Placeholder::Loading);
    }

    #[test]
    fn test_session_navigates_once_per_redirect() {
        let mut session = GuardSession::new(Guard::auth_gate(false));
        let route = RouteSnapshot::new("/editor");
        let state = IdentityState::signed_out();

        let first = session.evaluate(&state, &route);
        assert!(first.navigate.is_some());
        for _ in 0..3 {
            let again = session.evaluate(&state, &route);
            assert_eq!(again.decision, first.decision);
            assert!(again.navigate.is_none());
        }
    }

    #[test]
    fn test_session_rearms_after_render() {
        let mut session = GuardSession::new(Guard::auth_gate(true));
        let route = RouteSnapshot::new("/profile");

        assert!(session.evaluate(&unverified(), &route).navigate.is_some());
        assert!(session.evaluate(&IdentityState::unsettled(), &route).navigate.is_none());
        assert!(session.evaluate(&unverified(), &route).navigate.is_none());

        let shown = session.evaluate(&verified(), &route);
        assert!(shown.renders_content());
        assert!(shown.navigate.is_none());

        assert!(session.evaluate(&unverified(), &route).navigate.is_some());
    }

    #[test]
    fn test_session_navigates_again_when_target_changes() {
        let mut session = GuardSession::new(Guard::auth_gate(true));
        let route = RouteSnapshot::new("/profile");

        let verify = session.evaluate(&unverified(), &route).navigate;
        let sign_in = session.evaluate(&IdentityState::signed_out(), &route).navigate;
        assert_eq!(verify.map(|r| r.href()).as_deref(), Some("/login?verify=1&next=%2Fprofile"));
        assert_eq!(sign_in.map(|r| r.href()).as_deref(), Some("/login?next=%2Fprofile"));
    }
}
