//! Middleware components for HTTP request processing

pub mod edge;

pub use edge::{EDGE_MATCHER, edge_middleware};
