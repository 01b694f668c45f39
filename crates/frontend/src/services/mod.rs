pub mod provider;
pub mod session;

pub use provider::load_provider;
