//! Gatehouse HTTP edge
//!
//! Serves the single-page frontend behind a pass-through edge middleware.
//! Route protection happens in the browser; the edge only forwards.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod server;

pub use config::EdgeConfig;
pub use error::{HttpError, Result};
pub use server::{router, serve};
