use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sdk_version::config::Config;
use sdk_version::{commands, output};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sdk-version")]
#[command(version, about = "Version consistency checks and version bumps for SDK monorepos")]
#[command(styles = output::clap_styles())]
struct Cli {
    /// Repository root containing the manifests
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to <ROOT>/.sdk-version.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check project files, pod manifests and the package manifest for consistency
    Verify,
    /// Print the current version of a module, or of the whole repository
    Current { module: Option<String> },
    /// Replace OLD with NEW across manifests and docs
    Update {
        old: String,
        new: String,
        /// Modules to update; all modules when omitted
        modules: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(&cli.root)?,
    };

    match cli.command {
        Command::Verify => commands::verify(&cli.root, &config)?,
        Command::Current { module } => commands::current(&cli.root, &config, module.as_deref())?,
        Command::Update { old, new, modules } => {
            commands::update(&cli.root, &config, &old, &new, modules)?;
        }
    }
    Ok(())
}
