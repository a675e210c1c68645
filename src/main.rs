//! Room booking server
//!
//! ```sh
//! # Run with default config (~/.config/room-booking/config.toml)
//! room-booking
//!
//! # Custom config path, in-memory store on another port
//! room-booking --config ./booking.toml --port 9090
//!
//! # Validate config without starting
//! room-booking --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use room_booking::config::{default_config_path, AppConfig};
use room_booking::server::{init_tracing, ServerHandle, ServerOptions};

/// Room booking REST API with per-room conflict detection.
#[derive(Parser, Debug)]
#[command(
    name = "room-booking",
    version,
    about = "Hourly and daily room reservations over a REST API",
    long_about = "Room booking server. Rejects any reservation that overlaps \
                  an existing one for the same room.\n\n\
                  Default config: ~/.config/room-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BOOKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if cli.check {
        return match load_error {
            Some(e) => {
                eprintln!("Configuration is invalid: {}", e);
                ExitCode::FAILURE
            }
            None => {
                println!("Configuration is valid");
                println!("   Config file : {}", config_path.display());
                println!("   API address : {}", config.server.address());
                println!("   Database    : {}", config.database.url);
                println!("   Log level   : {}", config.logging.level);
                ExitCode::SUCCESS
            }
        };
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config);
    match load_error {
        Some(e) => {
            error!("Failed to load config: {}", e);
            error!("Using default configuration.");
        }
        None => info!("Configuration loaded from {}", config_path.display()),
    }

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    handle.install_signal_handler();
    info!("Server started. Press Ctrl+C to shutdown gracefully.");
    handle.wait().await;
    ExitCode::SUCCESS
}
