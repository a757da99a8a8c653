use clap::{Parser, Subcommand};
use motorpool_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

use commands::cars::CarCommand;
use commands::maintenance::MaintenanceArgs;
use commands::manufacturers::ManufacturerCommand;
use commands::owners::OwnerCommand;

#[derive(Parser)]
#[command(name = "motorpool")]
#[command(version)]
#[command(about = "Motorpool - fleet records with discount and owner cleanup maintenance")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discount cars in the age window and detach owners of older cars
    Maintenance(MaintenanceArgs),
    /// Manage manufacturers
    Manufacturer {
        #[command(subcommand)]
        command: ManufacturerCommand,
    },
    /// Manage owners
    Owner {
        #[command(subcommand)]
        command: OwnerCommand,
    },
    /// Manage cars
    Car {
        #[command(subcommand)]
        command: CarCommand,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Motorpool v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let use_cases = di::UseCases::new(&repos);

    let result = match cli.command {
        Command::Maintenance(args) => {
            commands::maintenance::run(&use_cases, &config.maintenance, args).await
        }
        Command::Manufacturer { command } => commands::manufacturers::run(&use_cases, command).await,
        Command::Owner { command } => commands::owners::run(&use_cases, command).await,
        Command::Car { command } => commands::cars::run(&use_cases, command).await,
    };

    pool.close().await;
    result
}
