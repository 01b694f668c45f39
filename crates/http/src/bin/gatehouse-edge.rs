use anyhow::Result;
use clap::Parser;
use gatehouse_http::{EdgeConfig, logging::init_logging, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let config = EdgeConfig::parse();
    init_logging(&config.log_level)?;

    serve(config).await?;
    Ok(())
}
