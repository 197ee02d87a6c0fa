/// Roster - manage users in a remote collection from the terminal
use clap::{Parser, Subcommand};
use roster_cli::{
    config::RosterConfig,
    exit::{create_status, delete_status, list_status},
    render::{render_field_errors, render_table},
};
use roster_client::UsersClient;
use roster_core::{Draft, EntityId};
use roster_state::{CreateOutcome, ListController};
use std::{path::PathBuf, process::ExitCode, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Create, list and delete users in a remote collection", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Collection URL (overrides the configuration)
    #[arg(long, env = "ROSTER_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Create a new user
    Create {
        /// Display name
        #[arg(long, default_value = "")]
        name: String,
        /// Email address
        #[arg(long, default_value = "")]
        email: String,
        /// Login handle
        #[arg(long, default_value = "")]
        username: String,
    },
    /// Delete a user by id
    Delete {
        /// User id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster=info,roster_state=info,roster_client=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = RosterConfig::load(cli.config.as_deref())?;
    config.override_base_url(cli.base_url);
    config.validate()?;

    tracing::debug!(base_url = %config.api.base_url, "Using users collection");

    let api = Arc::new(UsersClient::new(config.client_config())?);
    let controller = ListController::new(api, config.controller_options());

    let code = match cli.command {
        Commands::List => list_users(&controller).await,
        Commands::Create {
            name,
            email,
            username,
        } => create_user(&controller, Draft::new(name, email, username)).await,
        Commands::Delete { id } => delete_user(&controller, EntityId::new(id)).await,
    };

    controller.dispose();
    Ok(code)
}

async fn list_users(controller: &ListController) -> ExitCode {
    let outcome = controller.initialize().await;
    show(controller);

    ExitCode::from(list_status(&outcome))
}

async fn create_user(controller: &ListController, draft: Draft) -> ExitCode {
    controller.initialize().await;

    let outcome = controller.submit_create(&draft).await;
    if let CreateOutcome::Rejected(errors) = &outcome {
        for line in render_field_errors(errors) {
            eprintln!("{line}");
        }
    } else {
        show(controller);
    }

    ExitCode::from(create_status(&outcome))
}

async fn delete_user(controller: &ListController, id: EntityId) -> ExitCode {
    controller.initialize().await;

    let outcome = controller.delete_entity(&id).await;
    show(controller);

    ExitCode::from(delete_status(&outcome))
}

/// Print the status line (then dismiss it) followed by the table.
fn show(controller: &ListController) {
    let state = controller.snapshot();

    if let Some(status) = state.status() {
        println!("{status}");
        controller.dismiss_status();
    }
    print!("{}", render_table(state.entities()));
}
