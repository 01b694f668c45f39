pub mod app;
pub mod auth_guard;
pub mod components;
pub mod hooks;
pub mod identity;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod services;

pub use app::App;
pub use auth_guard::{AuthGate, Gate, RequireAuth};
pub use identity::{IdentityContext, IdentityProvider, use_identity};
pub use routes::Route;
