//! # Tubegate
//!
//! Caching gateway in front of the YouTube Data API for mobile clients.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tubegate_domain::CliOverrides;
use tubegate_jobs::{CacheJanitorJob, JobRunner};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "tubegate")]
#[command(version)]
#[command(about = "Caching YouTube gateway with shared-secret access control")]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port (default: 5000)
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Bind address (default: 0.0.0.0)
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Path of the client settings document (default: config.json)
    #[arg(long)]
    settings_file: Option<String>,

    /// Path of the blocked channel list (default: blockedChannels.json)
    #[arg(long)]
    blocked_file: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,

    /// Shared secret clients send in the x-app-key header
    #[arg(long, env = "APP_SECRET", hide_env_values = true)]
    app_secret: Option<String>,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    youtube_api_key: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            bind_address: self.bind.clone(),
            app_secret: self.app_secret.clone(),
            api_key: self.youtube_api_key.clone(),
            settings_file: self.settings_file.clone(),
            blocked_channels_file: self.blocked_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    let cli = Cli::parse();
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Tubegate"
    );

    let repos = di::Repositories::new(&config).await?;
    let upstream = di::build_upstream(&config)?;
    let use_cases = di::UseCases::new(&config, &repos, upstream);

    let shutdown = CancellationToken::new();

    let janitor = CacheJanitorJob::new(use_cases.clear_cache.clone())
        .with_interval(config.cache.janitor_interval_secs)
        .with_cancellation(shutdown.clone());
    let job_handles = JobRunner::new().with_cache_janitor(janitor).start().await;

    let state = di::build_app_state(&config, &use_cases);
    server::start_web_server(&config, state, shutdown.clone()).await?;

    shutdown.cancel();
    for handle in job_handles {
        let _ = handle.await;
    }

    info!("Tubegate stopped");
    Ok(())
}
