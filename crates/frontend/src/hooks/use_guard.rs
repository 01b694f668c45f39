//! Guard evaluation hook

use gatehouse_core::{Decision, Guard, GuardSession, LoginRedirect, RouteSnapshot};
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;

use crate::identity::use_identity;
use crate::routes::Route;

/// Snapshot of a router location as seen by the guards
pub fn route_snapshot(location: Option<&Location>) -> RouteSnapshot {
    location.map_or_else(RouteSnapshot::unknown, |location| {
        RouteSnapshot::new(location.path()).with_query(location.query_str())
    })
}

/// Evaluate `guard` against the current identity state and route.
///
/// Redirects replace the current history entry and are issued once per
/// decision, so unrelated re-renders do not navigate again.
#[hook]
pub fn use_guard(guard: Guard) -> Decision {
    let identity = use_identity();
    let location = use_location();
    let navigator = use_navigator();
    let session = use_mut_ref(|| GuardSession::new(guard));

    if session.borrow().guard() != guard {
        *session.borrow_mut() = GuardSession::new(guard);
    }

    let route = route_snapshot(location.as_ref());
    let outcome = session.borrow_mut().evaluate(&identity.state, &route);

    use_effect_with(outcome.navigate.clone(), move |navigate| {
        if let Some(redirect) = navigate {
            replace_with_login(navigator.as_ref(), redirect);
        }
    });

    outcome.decision
}

fn replace_with_login(navigator: Option<&Navigator>, redirect: &LoginRedirect) {
    let Some(navigator) = navigator else {
        tracing::warn!(login = %redirect.href(), "No router available, cannot redirect");
        return;
    };
    if let Err(e) = navigator.replace_with_query(&Route::Login, redirect) {
        tracing::warn!(login = %redirect.href(), "Redirect to login failed: {}", e);
    }
}
