pub mod client;
pub mod output;

use clap::{Parser, Subcommand};

use client::ApiClient;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "workspace")]
#[command(about = "Workspace CLI - talks to a running workspace API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "WORKSPACE_API_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the workspace API"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Populate demo data through the seed endpoints")]
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },

    #[command(about = "List active departments of a workspace")]
    Departments {
        #[arg(help = "Workspace ID")]
        workspace_id: String,
    },

    #[command(about = "Check server health via /health")]
    Ping,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTarget {
    #[command(about = "Workspace, departments, users and tasks")]
    All,
    #[command(about = "Demo tasks only")]
    DemoTasks,
    #[command(about = "Demo users only")]
    DemoUsers,
}

impl SeedTarget {
    pub fn path(self) -> &'static str {
        match self {
            SeedTarget::All => "/api/seed/all",
            SeedTarget::DemoTasks => "/api/seed/demo-tasks",
            SeedTarget::DemoUsers => "/api/seed/demo-users",
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.server);

    match cli.command {
        Commands::Seed { target } => {
            let message = client.seed(target).await?;
            output::output_success(&output_format, &message)
        }
        Commands::Departments { workspace_id } => {
            let departments = client.departments(&workspace_id).await?;
            output::output_departments(&output_format, &workspace_id, &departments)
        }
        Commands::Ping => {
            let health = client.health().await?;
            output::output_health(&output_format, &health)
        }
    }
}
