// citeclean/src/main.rs
//! Citeclean entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! runners.

use anyhow::Result;
use clap::Parser;

use citeclean::cli::{Cli, Commands};
use citeclean::commands::clean::{run_clean, CleanOptions};
use citeclean::commands::sweep::{run_sweep, SweepOptions};
use citeclean::logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Clean(cmd) => {
            run_clean(CleanOptions {
                input_file: cmd.input_file,
                output: cmd.output,
                quiet: args.quiet,
            })
            .await
        }
        Commands::Sweep(cmd) => {
            run_sweep(SweepOptions {
                dir: cmd.dir,
                extension: cmd.extension,
                yes: cmd.yes,
                json: cmd.json,
                quiet: args.quiet,
            })
            .await
        }
    }
}
