//! ci-cd-demo server entry point.

use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ci_cd_demo::api::AppState;
use ci_cd_demo::config::Config;
use ci_cd_demo::metrics;
use ci_cd_demo::server;
use ci_cd_demo::utils::shutdown_signal;

/// Status and info HTTP server for the CI/CD demo.
#[derive(Parser, Debug)]
#[command(name = "ci-cd-demo")]
#[command(about = "Landing page, liveness, readiness and info endpoints for the CI/CD demo")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started_at = Instant::now();
    let args = Args::parse();

    let config = Config::load()?;
    init_logging(&config, args.verbose);
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve { port }) => cmd_serve(config, port.or(args.port), started_at).await,
        None => cmd_serve(config, args.port, started_at).await,
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ci_cd_demo=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json().flatten_event(true)).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CI-CD-DEMO - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  Version: {}", config.app_version);
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    port_override: Option<u16>,
    started_at: Instant,
) -> anyhow::Result<()> {
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let state = AppState::with_start(config.app_version.as_str(), started_at);
    let addr = config.socket_addr()?;
    let listener = server::bind(addr).await?;

    server::serve(listener, state, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}
