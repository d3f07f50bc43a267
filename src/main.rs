use clap::Parser;
use theme_index::{
    cli::commands::{
        check::CheckCommand, generate::GenerateCommand, page_name::PageNameCommand,
        CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays clean for command output.
/// `RUST_LOG` takes precedence over `--log-level`.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let command: Box<dyn CommandHandler> = match cli.command {
        Commands::Generate { config, dry_run } => Box::new(GenerateCommand::new(config, dry_run)),
        Commands::Check { config } => Box::new(CheckCommand::new(config)),
        Commands::PageName { page, num_pages } => {
            Box::new(PageNameCommand::new(page, num_pages))
        }
    };

    tracing::debug!("Running {} command", command.name());
    command.execute()
}
