//! Serve command: MCP server over stdio.

use anyhow::Context;
use clap::Args;
use prosemetry_core::Lexicon;
use prosemetry_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let server = ProjectServer::new(Lexicon::extended(&config.lexicon), config.input_limit())
        .context("failed to build analysis engine")?;

    info!("starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;
    info!("MCP server stopped");
    Ok(())
}
