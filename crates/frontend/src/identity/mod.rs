//! Identity context shared by the guards and pages

pub mod context;

pub use context::{IdentityContext, IdentityProvider, use_identity};
