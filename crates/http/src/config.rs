//! Edge server configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Gatehouse edge - serves the frontend and forwards every request unchanged
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct EdgeConfig {
    /// Address to listen on
    #[arg(long, env = "GATEHOUSE_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Directory holding the built frontend (index.html and assets)
    #[arg(long, env = "GATEHOUSE_STATIC_DIR", default_value = "dist")]
    pub static_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "GATEHOUSE_LOG", default_value = "gatehouse=debug,tower_http=debug")]
    pub log_level: String,
}
