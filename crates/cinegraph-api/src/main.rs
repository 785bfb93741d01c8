//! CLI entry point for the cinegraph-api server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cinegraph_graph::{GraphClient, MovieService};

use cinegraph_api::config;
use cinegraph_api::graphql::{build_schema, MovieQueries};
use cinegraph_api::server;

#[derive(Parser)]
#[command(name = "cinegraph-api")]
#[command(about = "GraphQL API over the Cinegraph movie graph")]
struct Cli {
    /// Config file prefix (default: cinegraph).
    #[arg(short, long, default_value = "cinegraph")]
    config: String,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let mut app_config = config::load(&cli.config)?;
    if let Some(host) = cli.host {
        app_config.server.host = host;
    }
    if let Some(port) = cli.port {
        app_config.server.port = port;
    }

    let client = GraphClient::connect(&app_config.graph).await?;
    let movies: Arc<dyn MovieQueries> = Arc::new(MovieService::new(client));
    let schema = build_schema(movies);

    server::serve(&app_config.server, server::router(schema)).await?;

    Ok(())
}
