//! Observed identity state

use serde::{Deserialize, Serialize};

/// A signed-in account as reported by the identity provider
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub email_verified: bool,
}

impl User {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            email_verified: false,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub const fn verified(mut self, email_verified: bool) -> Self {
        self.email_verified = email_verified;
        self
    }
}

/// Identity state observed by the guards
///
/// `settled` stays false until the provider has finished its initial
/// resolution. While unsettled the `user` field carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityState {
    pub user: Option<User>,
    pub settled: bool,
}

impl IdentityState {
    /// State before the provider has answered
    pub const fn unsettled() -> Self {
        Self {
            user: None,
            settled: false,
        }
    }

    /// Settled state with no session
    pub const fn signed_out() -> Self {
        Self {
            user: None,
            settled: true,
        }
    }

    /// Settled state with a recognized session
    pub const fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            settled: true,
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        self.settled && self.user.is_some()
    }

    pub fn is_verified(&self) -> bool {
        self.settled && self.user.as_ref().is_some_and(|u| u.email_verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsettled_state_is_never_authenticated() {
        let state = IdentityState {
            user: Some(User::new("u1").verified(true)),
            settled: false,
        };
        assert!(!state.is_authenticated());
        assert!(!state.is_verified());
    }

    #[test]
    fn test_signed_in_state() {
        let state = IdentityState::signed_in(User::new("u1").with_email("a@example.com"));
        assert!(state.is_authenticated());
        assert!(!state.is_verified());
        assert_eq!(
            state.user.and_then(|u| u.email).as_deref(),
            Some("a@example.com")
        );
    }

    #[test]
    fn test_default_is_unsettled() {
        assert_eq!(IdentityState::default(), IdentityState::unsettled());
    }
}
