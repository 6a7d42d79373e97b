use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lawander::{Commands, Container, ContainerConfig, HttpServer, ProviderConfig, Router};

#[derive(Parser)]
#[command(name = "lawander")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Overrides CEREBRAS_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Overrides CEREBRAS_BASE_URL; must not include /v1/chat/completions
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Overrides CEREBRAS_MODEL
    #[arg(long, global = true)]
    model: Option<String>,

    /// Answer locally without calling the provider
    #[arg(long, global = true)]
    mock_provider: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn provider_config(&self) -> ProviderConfig {
        let mut config = ProviderConfig::from_env();
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.as_str());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        if let Some(model) = &self.model {
            config = config.with_model(model.as_str());
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        provider: cli.provider_config(),
        mock_provider: cli.mock_provider,
    })?;

    if !cli.mock_provider && !container.has_credentials() {
        warn!("No API key configured; requests will be sent without credentials");
    }

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                Ipv4Addr::UNSPECIFIED
            } else {
                Ipv4Addr::LOCALHOST
            };
            let server = HttpServer::start(Arc::new(container), SocketAddr::from((ip, port))).await?;
            tokio::signal::ctrl_c().await?;
            info!("Shutting down HTTP server on {}", server.addr());
            server.shutdown();
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{output}");
        }
    }

    Ok(())
}
