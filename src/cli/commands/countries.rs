//! Countries command: supported identifiers and their source files

use crate::app::services::registry::CountryRegistry;
use crate::cli::args::CountriesArgs;
use crate::Result;
use colored::*;

/// Run the countries command
pub fn run_countries(args: CountriesArgs) -> Result<()> {
    let config = args.to_config()?;
    let registry = CountryRegistry::from_config(&config);

    println!("{}", "Supported countries".bright_green().bold());
    for entry in registry.entries() {
        println!(
            "\n  {} {}",
            entry.id.as_str().bright_white().bold(),
            format!("({})", entry.parser.country_name()).bright_cyan()
        );
        for source in &entry.sources {
            let marker = if source.exists() {
                "found".green()
            } else {
                "missing".yellow()
            };
            println!("    {} [{}]", source.display(), marker);
        }
    }

    println!(
        "\n{} {}",
        "Matching tables:".bright_cyan(),
        config.matching_root.display()
    );
    Ok(())
}
