mod use_guard;

pub use use_guard::{route_snapshot, use_guard};
