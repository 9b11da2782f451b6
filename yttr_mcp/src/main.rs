use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use yttr_core::{
    mcp_server::{JsonRpcHandler, McpServer},
    service::YouTubeTranscriptService,
    transport::StdioTransport,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stdout is the JSON-RPC channel, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting yttranscrpter MCP Server");

    let service = YouTubeTranscriptService::new()?;

    // Create MCP server
    let server = McpServer::new(Arc::new(service));

    // Create JSON-RPC handler
    let handler = JsonRpcHandler::new(server);

    // Create and run stdio transport
    let transport = StdioTransport::new(handler);

    info!("MCP Server ready, listening on stdio");

    // Run the transport
    if let Err(e) = transport.run().await {
        error!("Transport error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
