//! Browser console logging

use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events (and `log` records) to the browser console
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new());

    if let Err(e) = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init()
    {
        web_sys::console::warn_1(&format!("Logging already initialized: {e}").into());
    }
}
