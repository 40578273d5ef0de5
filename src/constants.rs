//! Application constants for the crime statistics loader
//!
//! This module contains the country identifiers, default source locations and
//! the per-country layout knowledge (header depths, cell ranges, marker text,
//! fix-up tables) used throughout the parsers.

// =============================================================================
// Country Identifiers and Default Locations
// =============================================================================

/// Supported country identifiers, in registry order
pub const COUNTRY_IDS: &[&str] = &[
    "luxembourg",
    "cyprus",
    "hungary",
    "bulgaria",
    "portugal",
    "denmark",
];

/// Default root directory holding `<country>/<file>` source exports
pub const DEFAULT_SOURCES_ROOT: &str = "data/source_files";

/// Default root directory holding `<country>/<country>-matching.txt` tables
pub const DEFAULT_MATCHING_ROOT: &str = "data/matching";

/// File name suffix of category lookup tables
pub const MATCHING_FILE_SUFFIX: &str = "-matching.txt";

/// Source files for each country, relative to the sources root
pub mod source_files {
    pub const LUXEMBOURG: &[&str] = &["luxembourg/luxembourg.csv"];
    pub const CYPRUS: &[&str] = &["cyprus/cyprus_1.xls", "cyprus/cyprus_2.xls"];
    pub const HUNGARY: &[&str] = &["hungary/hungary.xls"];
    pub const BULGARIA: &[&str] = &["bulgaria/bulgaria.xls"];
    pub const PORTUGAL: &[&str] = &["portugal/portugal.xls"];
    pub const DENMARK: &[&str] = &["denmark/denmark.csv"];
}

// =============================================================================
// Per-Country Layouts
// =============================================================================

/// Luxembourg: one CSV, crimes as rows and years as columns
pub mod luxembourg {
    pub const COUNTRY_NAME: &str = "Luxembourg";

    /// Parent category reported inclusive of the vehicle-theft subcategory
    pub const DISENTANGLE: &[(&str, &str)] = &[(
        "Thefts including acts of violence",
        "thereof: thefts of vehicules including acts of violence",
    )];
}

/// Cyprus: serious and minor offences split across two workbooks
pub mod cyprus {
    pub const COUNTRY_NAME: &str = "Cyprus";
    pub const YEAR: &str = "2019";

    pub const SERIOUS_SHEET: &str = "Serious crime";
    pub const SERIOUS_RANGE: &str = "A4:T15";
    pub const MINOR_SHEET: &str = "Minor per off";
    pub const MINOR_RANGE: &str = "A4:T12";

    pub const HEADER_ROWS: u32 = 3;
    /// Row whose cells name the columns
    pub const KEY_ROW: u32 = 2;

    pub const LABEL_COLUMN: &str = "A";
    pub const DISTRICT_COLUMNS: &[&str] = &["B", "E", "H", "K", "N", "Q"];
    pub const TOTAL_COLUMN: &str = "T";

    /// District spellings used in the export mapped to their common names
    pub const DISTRICT_RENAMES: &[(&str, &str)] = &[
        ("Limasol", "Limassol"),
        ("Ammochostos", "Famagusta"),
        ("Morfou", "Kyrenia"),
    ];
}

/// Hungary: one workbook, crime categories interleaved with location rows
pub mod hungary {
    pub const COUNTRY_NAME: &str = "Hungary";
    pub const SHEET: &str = "6.2.7.2.";
    pub const HEADER_ROWS: u32 = 3;
    pub const KEY_ROW: u32 = 2;

    pub const LOCATION_COLUMN: &str = "A";
    pub const LEVEL_COLUMN: &str = "B";
    pub const LOCATION_KEY: &str = "Crime_or_location";
    pub const LEVEL_KEY: &str = "Level";
    pub const YEAR_COLUMNS: &[&str] = &[
        "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T",
        "U",
    ];

    /// Level markers identifying a region row
    pub const REGION_MARKERS: &[&str] = &["capital", "county"];
    /// Level marker identifying the national total row
    pub const COUNTRY_MARKER: &str = "country";
    /// Footnote marker stripped from category labels
    pub const FOOTNOTE_MARKER: &str = "$";
}

/// Bulgaria: one workbook, one sheet per year, fixed-size location blocks
pub mod bulgaria {
    pub const COUNTRY_NAME: &str = "Bulgaria";
    /// Year sheets, in output order
    pub const YEAR_SHEETS: &[&str] = &["2018", "2017", "2016"];
    pub const RANGE: &str = "A7:B516";
    pub const LABEL_KEY: &str = "Crime_or_location";
    pub const VALUE_KEY: &str = "Value";

    /// Rows per block: one location row followed by its crime rows
    pub const BLOCK_ROWS: usize = 17;
    /// Block holding national totals
    pub const NATIONAL_BLOCK: usize = 0;
    /// Aggregate blocks with no geographic counterpart
    pub const SKIPPED_BLOCKS: &[usize] = &[1];
}

/// Portugal: one workbook, NUTS-coded rows at four depths
pub mod portugal {
    pub const COUNTRY_NAME: &str = "Portugal";
    pub const YEAR: &str = "2018";
    pub const SHEET: &str = "Table";
    pub const HEADER_ROWS: u32 = 11;
    pub const KEY_ROW: u32 = 10;
    pub const RANGE: &str = "A12:S355";

    pub const PLACE_KEY: &str = "Place";
    pub const LEVEL_KEY: &str = "Level";
    pub const CATEGORY_COLUMNS: &[&str] = &["C", "E", "G", "I", "K", "M", "O", "Q", "S"];
    /// Category column holding the row total, excluded from the tallies
    pub const TOTAL_KEY: &str = "Total";
    /// Level code of the national row
    pub const NATIONAL_MARKER: &str = "PT";
}

/// Denmark: one CSV, blocks of place rows under each crime category
pub mod denmark {
    pub const COUNTRY_NAME: &str = "Denmark";
    pub const YEAR: &str = "2019";
    /// Preamble lines before the first category row
    pub const PREAMBLE_LINES: u64 = 3;

    pub const NATIONAL_MARKER: &str = "All";
    pub const REGION_MARKER: &str = "Region";
}
