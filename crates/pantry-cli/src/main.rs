use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod output;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("pantry error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = pantry_config::PantryConfig::load_with_dotenv()?;
    tracing::debug!(
        deny_unknown_fields = config.validation.deny_unknown_fields,
        phone_min_digits = config.validation.phone_min_digits,
        phone_max_digits = config.validation.phone_max_digits,
        "configuration loaded"
    );
    let registry = pantry_schema::SchemaRegistry::with_options(engine_options(&config.validation));

    let outcome = match &cli.command {
        cli::Commands::Validate(args) => commands::validate::handle(args, &registry, &flags)?,
        cli::Commands::Batch(args) => commands::batch::handle(args, &registry, &flags)?,
        cli::Commands::Schema { action } => commands::schema::handle(action, &registry, &flags)?,
    };
    Ok(outcome.exit_code())
}

fn engine_options(config: &pantry_config::ValidationConfig) -> pantry_schema::EngineOptions {
    pantry_schema::EngineOptions {
        deny_unknown_fields: config.deny_unknown_fields,
        phone_min_digits: config.phone_min_digits,
        phone_max_digits: config.phone_max_digits,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PANTRY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
