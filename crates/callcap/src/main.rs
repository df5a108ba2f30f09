mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics {
            file,
            date,
            config,
            no_demo,
            output,
        } => commands::metrics::run(&file, date, config.as_deref(), no_demo, output.as_deref()),
        Commands::Inspect { file, config, date } => {
            commands::inspect::run(&file, config.as_deref(), date)
        }
        Commands::Fallback { date, config } => commands::fallback::run(date, config.as_deref()),
        Commands::Parse { file, output } => commands::parse::run(&file, output.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
