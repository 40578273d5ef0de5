//! Command implementations for the crimestats CLI
//!
//! Each command is implemented in its own module:
//! - `load`: parse one country and print its tree as JSON
//! - `countries`: list supported countries and where their sources live

pub mod countries;
pub mod load;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(args.command.get_log_level());

    match args.command {
        Commands::Load(load_args) => load::run_load(load_args),
        Commands::Countries(countries_args) => countries::run_countries(countries_args),
    }
}
