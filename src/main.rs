//! flowseq - flow-arts sequence generator
//!
//! Generates choreography sequences and completes partial sequences into
//! circular ones using Circular Arrangement Patterns (CAPs).

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowseq::cli::{CapTypesArgs, CompleteArgs, ConfigArgs, ExitCode, GenerateArgs};
use flowseq::config::Config;
use flowseq::constants::{APP_BINARY_NAME, APP_NAME};

/// flowseq - flow-arts sequence generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a freeform or circular sequence
    Generate(GenerateArgs),
    /// Complete a partial sequence with a CAP
    Complete(CompleteArgs),
    /// List CAP types or resolve a component combination
    CapTypes(CapTypesArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        Config::load()
            .map(|config| config.logging.level)
            .unwrap_or_else(|_| "warn".to_string())
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Complete(args) => args.execute(),
        Command::CapTypes(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(error.exit_code().code());
        }
    }
}
