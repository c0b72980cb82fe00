mod config;
mod device_control;
mod integration;
#[cfg(test)]
mod test_utils;
mod web;

use actix_web::web::Data;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::DeviceConfig;
use device_control::FrontendSession;
use integration::RemoteDriver;

const DEFAULT_BIND: &str = "127.0.0.1:9090";

#[derive(Parser)]
#[command(name = "mythtv-remote-bridge")]
#[command(about = "Control a MythTV frontend as a remote entity")]
struct Cli {
    #[command(flatten)]
    device: DeviceConfig,

    /// Log level or filter directive
    #[arg(long, env = "UC_LOG_LEVEL", default_value = "debug", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the remote entity to the hub bridge (default)
    Serve {
        /// Address the local API listens on
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
    },
    /// List the frontend's simple commands
    Commands,
    /// Send one simple command and exit
    Send {
        /// Simple command name, e.g. CURSOR_UP
        command: String,
    },
    /// Print the remote entity definition as JSON
    Entity,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let device = cli.device;
    info!("Setup: {} ({}:{})", device.name(), device.host, device.port);

    let session = FrontendSession::connect(&device.host, device.port)?;
    let driver = RemoteDriver::new(device.id(), device.name(), session);

    match cli.command.unwrap_or(Command::Serve {
        bind: DEFAULT_BIND.to_string(),
    }) {
        Command::Serve { bind } => {
            let driver = Data::new(driver);
            web::serve(driver.clone(), &bind)?;
            // Last handle dropped outside the actix runtime
            drop(driver);
        }
        Command::Commands => {
            for command in driver.runner().commands().iter() {
                match &command.key_alias {
                    Some(key) => println!(
                        "{:<20}  {} (key {})  {}",
                        command.canonical_name, command.action, key, command.description
                    ),
                    None => println!(
                        "{:<20}  {}  {}",
                        command.canonical_name, command.action, command.description
                    ),
                }
            }
        }
        Command::Send { command } => {
            if !driver.runner().run(&command)? {
                error!("command: {} failed", command);
                std::process::exit(1);
            }
        }
        Command::Entity => {
            println!("{}", serde_json::to_string_pretty(driver.entity())?);
        }
    }

    Ok(())
}
