// Standalone MCP server binary

use anyhow::Result;
use heybible_client::{ClientConfig, HeyBibleClient};
use heybible_mcp::server::HeyBibleServer;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Tracing writes to stderr; stdout is reserved for MCP framing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run().await {
        tracing::error!(%err, "fatal error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Missing HEY_BIBLE_API_KEY fails here, before anything is built.
    let config = ClientConfig::from_env()?;
    let client = Arc::new(HeyBibleClient::new(config)?);

    let server = HeyBibleServer::new(client);
    let service = server.serve(stdio()).await?;

    tracing::info!("Hey Bible MCP server running on stdio");
    service.waiting().await?;

    Ok(())
}
