use clap::Parser;
use crimestats::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            let error = anyhow::Error::new(error);
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
