//! Profile Service - account and feed management CLI.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profile_service_lib::config::ProfileServiceConfig;
use profile_service_lib::{MigrateAction, Profiles};

#[derive(Parser)]
#[command(name = "profile-service")]
#[command(about = "User profile and status feed management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Create a regular user account
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// Leave unset to create the account with an unusable password
        #[arg(long, env = "PROFILE_PASSWORD")]
        password: Option<String>,
    },
    /// Create a staff superuser account
    CreateSuperuser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, env = "PROFILE_PASSWORD")]
        password: String,
    },
    /// Post a status update for an existing account
    PostStatus {
        #[arg(long)]
        email: String,
        #[arg(long)]
        text: String,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Also loads .env
    let config = ProfileServiceConfig::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::debug!(service = %config.service.service_name, "Configuration loaded");

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            profile_service_lib::run_migrations(&config.database, migrate_action).await?;
        }
        Commands::CreateUser {
            email,
            name,
            password,
        } => {
            let profiles = Profiles::connect(&config.database).await?;
            let account = profiles
                .accounts
                .create_user(&email, &name, password.as_deref())
                .await?;
            println!("{}", account);
        }
        Commands::CreateSuperuser {
            email,
            name,
            password,
        } => {
            let profiles = Profiles::connect(&config.database).await?;
            let account = profiles
                .accounts
                .create_superuser(&email, &name, &password)
                .await?;
            println!("{}", account);
        }
        Commands::PostStatus { email, text } => {
            let profiles = Profiles::connect(&config.database).await?;
            let account = profiles.accounts.get_by_email(&email).await?;
            let item = profiles.feed.post_status(account.id, &text).await?;
            println!("{}", item);
        }
    }

    Ok(())
}
