//! Load command: one country's tree as JSON on stdout

use crate::app::services::data_access::DataAccess;
use crate::app::services::source_reader::FsSourceReader;
use crate::cli::args::LoadArgs;
use crate::{Country, Error, Result};
use std::io::Write;
use tracing::info;

/// Run the load command
pub fn run_load(args: LoadArgs) -> Result<()> {
    let config = args.to_config()?;
    let access = DataAccess::new(config, Box::new(FsSourceReader::new()))?;
    let country = args.country.as_str();

    let data = if args.map_categories {
        access.get_mapped_data(country, args.remove_unmatched, args.merge_categories)?
    } else {
        access.get_data(country)?
    };

    let json = render(&data, args.pretty)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).map_err(|e| Error::io("Failed to write output", e))?;

    info!("Wrote {} years for {}", data.years.len(), data.name);
    Ok(())
}

/// Serialize a tree using the wire field names
pub fn render(country: &Country, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(country)
    } else {
        serde_json::to_string(country)
    };
    rendered.map_err(|e| Error::configuration(format!("Failed to serialize output: {}", e)))
}
