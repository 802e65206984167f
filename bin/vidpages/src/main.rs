//! vidpages CLI
//!
//! Generates one static HTML page per video record from a JSON data file and
//! a single HTML template.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use vidpages::cmd::InputArgs;

/// Command-line interface for vidpages.
#[derive(Parser)]
#[command(
    name = "vidpages",
    version,
    about = "Generate static video pages from a JSON list and an HTML template"
)]
struct Cli {
    /// Path to configuration file (defaults to ./vidpages.toml when present)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate one page per video record (default)
    Generate {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Validate configuration, data and template without writing
    Check {
        #[command(flatten)]
        inputs: InputArgs,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    vidpages::init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        None => vidpages::cmd::generate::run(config, &InputArgs::default()),
        Some(Commands::Generate { inputs }) => vidpages::cmd::generate::run(config, &inputs),
        Some(Commands::Check { inputs, strict }) => {
            vidpages::cmd::check::run(config, &inputs, strict)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
