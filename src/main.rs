use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use hydromodel::database::{self, MigrateDirection};
use hydromodel::legacy::LegacyStore;
use hydromodel::services::legacy_migration;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the model database schema
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Copy a legacy v2 model database into the new schema
    MigrateLegacy {
        /// Path to the legacy model database (opened read-only)
        #[clap(short, long)]
        legacy: String,
        #[clap(short, long, default_value = "hydromodel.db")]
        database: String,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long, default_value = "hydromodel.db")]
        database: String,
    },
    Migrate {
        #[clap(subcommand)]
        direction: MigrateDirection,
        #[clap(short, long, default_value = "hydromodel.db")]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                info!("Initializing database: {}", database);
                database::migrate_database(&database, MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                database::migrate_database(&database, direction).await?;
            }
        },
        Commands::MigrateLegacy { legacy, database } => {
            info!("Migrating legacy model {} into {}", legacy, database);
            let source = LegacyStore::open(&legacy).await?;
            let url = database::get_database_url(Some(database.as_str()));
            let target = database::establish_connection(&url).await?;
            let report = legacy_migration::migrate_connection_nodes(&source, &target).await?;
            info!("Copied {} connection nodes", report.rows_copied);
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
