mod cmd;
mod output;
mod root;
mod terminal;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cardctl",
    about = "A CLI for managing the Card Platform application",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .cardctl/ or docker-compose.yml)
    #[arg(long, global = true, env = "CARDCTL_ROOT")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for credentials and write the backend .env file
    Configure,

    /// Initialize the database by running migrations inside the backend container
    #[command(name = "db-init")]
    DbInit,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let result = match cli.command {
        Commands::Configure => cmd::configure::run(&root),
        Commands::DbInit => cmd::db_init::run(&root),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
