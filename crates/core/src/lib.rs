//! Gatehouse core types and utilities
//!
//! Target-independent pieces of the authentication gate: the observed
//! identity state and its publish/subscribe store, the guard decision
//! procedure, the login route contract, and the provider bootstrap.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod redirect;
pub mod store;

pub use bootstrap::{AuthHandle, DocumentStore, ObjectStore, ProviderHandles, Session};
pub use config::ProviderConfig;
pub use error::{CoreError, CoreResult};
pub use guard::{Decision, Guard, GuardSession, Outcome, Placeholder, RouteSnapshot};
pub use identity::{IdentityState, User};
pub use redirect::{LOGIN_PATH, LoginQuery, LoginRedirect};
pub use store::{IdentityStore, IdentitySubscription};
