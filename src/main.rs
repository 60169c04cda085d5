use activity_provider::config::ServerConfig;
use activity_provider::http::{self, AppState};
use activity_provider::lifecycle::{setup_tracing, ProviderSystem};
use clap::Parser;
use tracing::{error, info};

/// Activity provider for robotic-mission activities.
#[derive(Parser, Debug)]
#[command(name = "activity-provider", version, about)]
struct Cli {
    /// Host to bind.
    #[arg(long, env = "AP_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, env = "AP_PORT", default_value = "5000")]
    port: u16,

    /// Public base URL used in runtime locators instead of the request's Host header.
    #[arg(long, env = "AP_PUBLIC_URL")]
    public_url: Option<String>,

    /// Capacity of the registry request channel.
    #[arg(long, default_value = "32")]
    channel_capacity: usize,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            public_url: cli.public_url,
            channel_capacity: cli.channel_capacity,
        }
    }
}

/// Resolves on ctrl-c. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for ctrl-c; graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ServerConfig::from(Cli::parse());
    let system = ProviderSystem::new(config.channel_capacity);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;
    let app = http::router(AppState::new(&system, config));

    info!(%local_addr, "Activity provider listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}
