mod infer;
mod position;
mod table_args;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "posvid";

    /// Environment variable holding a `tracing` filter directive, e.g. `posvid_core=debug`.
    pub const LOG_ENV: &str = "POSVID_LOG";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for deriving sibling video paths in tabular video metadata.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(position::cli::create_position_cli())
        .subcommand(infer::cli::create_infer_cli())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        consts::VERBOSE_LOG_LEVEL
    } else {
        consts::DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_env(consts::LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // POSITION VIDEO COLUMN
        //
        Some((position::cli::POSITION_CMD, matches)) => {
            position::handlers::run_position(matches)?;
        }

        //
        // COLUMN INFERENCE REPORT
        //
        Some((infer::cli::INFER_CMD, matches)) => {
            infer::handlers::run_infer(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
