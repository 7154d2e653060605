//! File listing service entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use file_listing::api::{self, AppState};
use file_listing::catalog::{Catalog, FilesResponse};
use file_listing::config::Config;
use file_listing::instance::ServiceVariant;
use file_listing::metrics;

/// File listing service.
#[derive(Parser, Debug)]
#[command(name = "file-listing")]
#[command(about = "Serves a fixed catalog of file descriptors over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Bind address (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Include the instance identity in responses (overrides SERVICE_VARIANT).
    #[arg(long, global = true)]
    instance_aware: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the /files response body and exit.
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("file_listing=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match &args.command {
        Some(Command::CheckConfig) => cmd_check_config(&args),
        Some(Command::Catalog) => cmd_catalog(&args),
        Some(Command::Serve) | None => cmd_serve(&args).await,
    }
}

/// Load configuration and apply CLI overrides.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if args.instance_aware {
        config.service_variant = ServiceVariant::InstanceAware;
    }

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config(args: &Args) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("FILE LISTING SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config(args) {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Variant: {}", config.service_variant);
    match config.identity() {
        Some(identity) => println!("  Instance: {}", identity),
        None => println!("  Instance: (not reported)"),
    }
    println!("  Listen: {}:{}", config.host, config.port);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the body `GET /files` would return.
fn cmd_catalog(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let body = FilesResponse::new(&Catalog::fixed(), config.identity().as_ref());
    println!("{}", body.to_pretty_json()?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(args: &Args) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = load_config(args)?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let handle = metrics::install_recorder()?;
    metrics::init_metrics();

    let identity = config.identity();
    info!("Variant: {}", config.service_variant);
    if let Some(identity) = &identity {
        info!("Instance: {}", identity);
    }

    let catalog = Catalog::fixed();
    let app_state = AppState::new(&catalog, identity).with_metrics(handle);

    let (host, port) = config.bind_addr();
    let listener = api::bind(host, port).await?;

    api::serve(listener, app_state).await?;
    Ok(())
}
