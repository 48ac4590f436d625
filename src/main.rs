mod recorder;
mod replay;
mod script;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use clap::{Parser, Subcommand};
use pointer::PointerConfig;
use pointer::bridge::INSTALL_SCRIPT;
use tracing_subscriber::EnvFilter;

use crate::replay::ReplayError;

#[derive(Parser, Debug)]
#[command(name = "tvpointer", about = "Replay remote-control sessions through the pointer engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines session script and print every host call.
    Replay {
        /// Script path, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
        /// Include full bridge scripts in `evaluate_script` lines.
        #[arg(long, env = "TVPOINTER_FULL_SCRIPTS")]
        scripts: bool,
    },
    /// Print the in-page bridge installer.
    Bridge,
}

fn main() -> Result<(), ReplayError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay { input, scripts } => run_replay(&input, scripts),
        Command::Bridge => {
            let mut out = io::stdout().lock();
            writeln!(out, "{INSTALL_SCRIPT}")?;
            Ok(())
        }
    }
}

fn run_replay(input: &str, scripts: bool) -> Result<(), ReplayError> {
    let config = PointerConfig::from_env()?;
    tracing::debug!(?config, "loaded configuration");
    let out = BufWriter::new(io::stdout().lock());

    if input == "-" {
        replay::run(io::stdin().lock(), out, config, scripts)?;
    } else {
        let file = File::open(input).map_err(|source| ReplayError::Open { path: input.to_owned(), source })?;
        replay::run(BufReader::new(file), out, config, scripts)?;
    }
    Ok(())
}
