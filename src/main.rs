//! railqr-server - QR label generation and scan registry for track fittings

#![allow(missing_docs)]

use clap::Parser;
use railqr::config::{Config, LogFormat, LoggingConfig};
use railqr::server;
use railqr::utils::{init_logging, startup_logging};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "railqr-server", version, about)]
struct Args {
    /// Configuration file (YAML); defaults and environment are used if missing
    #[arg(short, long, env = "RAILQR_CONFIG", default_value = "config/railqr.yaml")]
    config: PathBuf,

    /// Bind host
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Bind port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log output format (text or json)
    #[arg(long, env = "LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

impl Args {
    /// Logging settings known before the config file is read
    fn startup_logging_config(&self) -> LoggingConfig {
        let mut logging = LoggingConfig::default();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(format) = self.log_format {
            logging.format = format;
        }
        logging
    }

    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.service.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.service.server.port = port;
        }
        if let Some(format) = self.log_format {
            config.service.logging.format = format;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let startup = startup_logging(&args.startup_logging_config());
    let loaded = Config::load(&args.config).await;
    drop(startup);

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    args.apply(&mut config);

    init_logging(config.logging());
    info!(config = %args.config.display(), "Configuration loaded");

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the multi-line bind error readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
