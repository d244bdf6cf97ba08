//! CLI for ordercast
//!
//! Subcommands:
//! - `serve`: run the HTTP server with live order notifications
//! - `statuses`: print the known order statuses, in order

use clap::Parser;
use ordercast::config::{Settings, load_config, load_config_from};
use ordercast::orders::ORDER_STATUSES;
use ordercast::{transport, utils};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ordercast")]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Config file to load instead of `config/default`
        #[arg(long)]
        config: Option<String>,
    },
    /// Print the order status sequence
    Statuses,
}

#[tokio::main]
async fn main() {
    match Command::parse() {
        Command::Serve { config } => {
            let settings = match load_settings(config.as_deref()) {
                Ok(settings) => settings,
                Err(e) => {
                    utils::logging::init("info");
                    error!("Failed to load configuration: {}", e);
                    std::process::exit(1);
                }
            };
            utils::logging::init(&settings.logging.level);
            info!(addr = %settings.bind_addr(), "starting ordercast");

            if let Err(e) = transport::run(settings).await {
                error!("Server failed: {}", e);
                std::process::exit(1);
            }
        }
        Command::Statuses => {
            for status in ORDER_STATUSES {
                println!("{status}");
            }
        }
    }
}

fn load_settings(path: Option<&str>) -> Result<Settings, config::ConfigError> {
    match path {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
}
