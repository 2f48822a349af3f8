mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tiktally_config::Config;

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr, counts stay on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    match cli.command {
        cli::Commands::Count(args) => commands::count::handle(args, &config),
        cli::Commands::Tokenize(args) => commands::tokenize::handle(args, &config),
        cli::Commands::Models => commands::list::models(),
        cli::Commands::Encodings => commands::list::encodings(),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
