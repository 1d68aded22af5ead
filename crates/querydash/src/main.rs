//! querydash - Query analytics dashboard shell

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use querydash_core::{Config, RouteTable};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "querydash",
    version,
    about = "Query analytics dashboard shell",
    long_about = "Hosts the querydash web frontend and inspects its client-side routes.\n\
                  \n\
                  The dashboard has four tabs (Generate Query, Optimize, Recommendation,\n\
                  Data Catalog Editor) at '/', and a query details view at\n\
                  '/query-details/:ruleId/:recommendation/:ruleTitle'. Any other path\n\
                  redirects to '/'.\n\
                  \n\
                  Examples:\n\
                    querydash                        # Serve the frontend (default)\n\
                    querydash serve --port 8080      # Custom port\n\
                    querydash routes                 # Print the route table\n\
                    querydash resolve /foo/bar       # Show what a path mounts\n\
                  \n\
                  Frontend Workflow:\n\
                    cd crates/querydash-web && trunk build --release\n\
                    querydash serve\n\
                  \n\
                  Environment Variables:\n\
                    QUERYDASH_CONFIG                 # Config file path\n\
                    QUERYDASH_LOG                    # Log filter (falls back to RUST_LOG)\n\
                    QUERYDASH_HOST / QUERYDASH_PORT  # Bind address overrides\n\
                    QUERYDASH_DIST                   # Frontend build directory\n\
                    QUERYDASH_NO_COLOR               # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to config file (default: <config dir>/querydash/config.toml)
    #[arg(long, env = "QUERYDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "querydash_core=debug"
    #[arg(long, env = "QUERYDASH_LOG")]
    log: Option<String>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "QUERYDASH_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web frontend (default)
    Serve {
        /// Interface to bind
        #[arg(long, env = "QUERYDASH_HOST")]
        host: Option<String>,
        /// Port for web server
        #[arg(long, env = "QUERYDASH_PORT")]
        port: Option<u16>,
        /// Directory with the trunk build output
        #[arg(long, env = "QUERYDASH_DIST")]
        dist: Option<PathBuf>,
        /// Open the dashboard in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Print the route table and exit
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which view a path mounts
    Resolve {
        /// Path to dispatch, e.g. /query-details/42/approve/MyRule
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log.as_deref(), cli.no_color);

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    match cli.mode.unwrap_or(Mode::Serve {
        host: None,
        port: None,
        dist: None,
        open: false,
    }) {
        Mode::Serve {
            host,
            port,
            dist,
            open,
        } => {
            // Only serving reads the config file
            let config =
                Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
            run_serve(config, host, port, dist, open).await?;
        }
        Mode::Routes { json } => {
            println!(
                "{}",
                cli::format_route_table(&RouteTable::standard(), json, cli.no_color)
            );
        }
        Mode::Resolve { path, json } => {
            let resolution = RouteTable::standard().resolve(&path);
            println!("{}", cli::format_resolution(&path, &resolution, json));
        }
    }

    Ok(())
}

fn init_tracing(filter: Option<&str>, no_color: bool) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_serve(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    dist: Option<PathBuf>,
    open: bool,
) -> Result<()> {
    // CLI and env overrides win over the config file
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(dist) = dist {
        config.server.dist_dir = dist;
    }
    config.validate().context("Invalid server settings")?;

    let url = format!("http://{}", config.bind_address());
    if config.server.dist_dir.join("index.html").exists() {
        println!("Dashboard: {}", url);
        println!("API:       {}/api/health", url);
    } else {
        println!("Backend only: {}/api/*", url);
        println!("Run 'trunk build' in crates/querydash-web to compile the frontend");
    }

    if open {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "could not open browser");
        } else {
            info!(url = %url, "opened browser");
        }
    }

    querydash_web::run(&config).await
}
