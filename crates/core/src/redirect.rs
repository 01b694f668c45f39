//! Login route contract
//!
//! The login route accepts `next` (URL-encoded return path, optionally with
//! its query string) and `verify` (`1` when email verification is required
//! before returning). Guards produce a [`LoginRedirect`]; the login page
//! reads it back with [`LoginQuery`].

use serde::{Serialize, Serializer};
use url::form_urlencoded;

use crate::identity::IdentityState;

/// Path of the login route
pub const LOGIN_PATH: &str = "/login";

/// Fallback return target when `next` is absent or unsafe
const DEFAULT_RETURN_TARGET: &str = "/";

/// Navigation target issued by a guard
///
/// Serializes to the login query string, `verify` first and only when set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRedirect {
    #[serde(
        skip_serializing_if = "std::ops::Not::not",
        serialize_with = "serialize_flag"
    )]
    pub verify: bool,
    pub next: String,
}

fn serialize_flag<S: Serializer>(_: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("1")
}

impl LoginRedirect {
    /// Redirect for a missing session
    pub fn sign_in(next: impl Into<String>) -> Self {
        Self {
            verify: false,
            next: next.into(),
        }
    }

    /// Redirect for a session whose email is not yet verified
    pub fn verify_email(next: impl Into<String>) -> Self {
        Self {
            verify: true,
            next: next.into(),
        }
    }

    /// Encoded query string, without the leading `?`
    pub fn query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if self.verify {
            query.append_pair("verify", "1");
        }
        query.append_pair("next", &self.next);
        query.finish()
    }

    /// Full login URL, e.g. `/login?next=%2Feditor`
    pub fn href(&self) -> String {
        format!("{LOGIN_PATH}?{}", self.query())
    }
}

/// Query parameters as received by the login route
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginQuery {
    pub next: Option<String>,
    pub verify: bool,
}

impl LoginQuery {
    /// Parse a query string, with or without its leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "next" => parsed.next = Some(value.into_owned()),
                "verify" => parsed.verify = value == "1",
                _ => {}
            }
        }
        parsed
    }

    /// Where to send the user once signed in.
    ///
    /// Only local absolute paths are honored; anything that could leave the
    /// origin falls back to `/`.
    pub fn return_target(&self) -> &str {
        match self.next.as_deref() {
            Some(next) if is_local_path(next) => next,
            _ => DEFAULT_RETURN_TARGET,
        }
    }

    /// Whether the given state satisfies this login request
    pub fn ready_to_return(&self, state: &IdentityState) -> bool {
        if self.verify {
            state.is_verified()
        } else {
            state.is_authenticated()
        }
    }
}

impl From<LoginRedirect> for LoginQuery {
    fn from(redirect: LoginRedirect) -> Self {
        Self {
            next: Some(redirect.next),
            verify: redirect.verify,
        }
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
