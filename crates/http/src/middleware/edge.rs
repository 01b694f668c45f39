//! Edge middleware
//!
//! Runs in front of every route and forwards requests unchanged. The matcher
//! is intentionally empty: sessions live in the browser and are not visible
//! to the edge as cookies, so protected routes are gated client-side.

use axum::{extract::Request, middleware::Next, response::Response};

/// Path patterns the edge would act on. Empty: the edge acts on nothing.
pub const EDGE_MATCHER: &[&str] = &[];

/// Whether `path` is covered by [`EDGE_MATCHER`]
pub fn matches(path: &str) -> bool {
    matches_any(EDGE_MATCHER, path)
}

/// Match `path` against patterns of the form `/exact` or `/prefix/:path*`
pub fn matches_any(patterns: &[&str], path: &str) -> bool {
    patterns.iter().any(|pattern| {
        pattern.strip_suffix("/:path*").map_or(pattern == &path, |prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    })
}

/// Forward the request and response untouched
pub async fn edge_middleware(request: Request, next: Next) -> Response {
    if matches(request.uri().path()) {
        trace!(path = %request.uri().path(), "Edge matcher hit, passing through");
    }
    next.run(request).await
}
