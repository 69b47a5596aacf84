use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vector_crud::{router, Commands, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "vector-crud")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Collection opened (or created) at startup
    #[arg(long, global = true, default_value = "my_collection")]
    collection: String,

    /// ChromaDB server URL; documents are kept in memory when omitted
    #[arg(long, global = true)]
    chroma_url: Option<String>,

    #[arg(long, global = true, default_value = "384")]
    embedding_dimensions: usize,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let container = Container::new(ContainerConfig {
        collection_name: cli.collection,
        chroma_url: cli.chroma_url,
        embedding_dimensions: cli.embedding_dimensions,
    })
    .await?;

    match cli.command {
        Commands::Serve { port, public } => {
            let host = if public { [0, 0, 0, 0] } else { [127, 0, 0, 1] };
            let addr = SocketAddr::from((host, port));
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(
                "Serving collection '{}' on http://{}",
                container.collection_name(),
                addr
            );

            axum::serve(listener, router(container.connector()))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
