//! Selah CLI binary.
//!
//! This binary provides command-line access to Selah's functionality:
//! - Generate a video script from a scripture reference
//! - Recommend a color tone
//! - Browse, copy and prune saved generations
//! - Run an interactive session

use clap::Parser;
use selah::{SelahConfig, SelahResult};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{
    Cli, Commands, handle_history_command, list_options, recommend_tone, run_generate,
    run_session,
};

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Pick up GEMINI_API_KEY from .env when present
    dotenvy::dotenv().ok();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> SelahResult<()> {
    let config = match &cli.config {
        Some(path) => SelahConfig::from_file(path)?,
        None => SelahConfig::load()?,
    };

    // Execute the requested command
    match cli.command {
        Commands::Generate(args) => run_generate(&config, cli.ephemeral, args).await?,
        Commands::Tone { verse } => recommend_tone(&config, verse).await?,
        Commands::History(cmd) => handle_history_command(&config, cli.ephemeral, cmd).await?,
        Commands::Session => run_session(&config, cli.ephemeral).await?,
        Commands::Options => list_options(),
    }

    Ok(())
}
