//! CSV records with their source line positions

use crate::{Error, Result};
use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

/// Options for reading a delimited text source
#[derive(Debug, Clone, Default)]
pub struct DelimitedOptions {
    /// Physical lines dropped from the top before any record is read
    pub skip_lines: u64,

    /// Accept records with differing field counts
    pub flexible: bool,

    /// Drop records whose field count differs from the first kept record
    /// instead of failing
    pub skip_malformed: bool,
}

impl DelimitedOptions {
    pub fn with_skip_lines(mut self, lines: u64) -> Self {
        self.skip_lines = lines;
        self
    }

    pub fn flexible(mut self) -> Self {
        self.flexible = true;
        self
    }

    pub fn skipping_malformed(mut self) -> Self {
        self.skip_malformed = true;
        self
    }
}

/// One CSV record with trimmed fields
#[derive(Debug, Clone, PartialEq)]
pub struct TextRow {
    /// 1-based line on which the record starts
    pub line: u64,
    pub fields: Vec<String>,
}

impl TextRow {
    /// Trimmed field, empty string when absent
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Number of fields with content
    pub fn filled_count(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_empty()).count()
    }
}

/// Split off the first `lines` physical lines
///
/// Returns the remaining text and the 1-based line number it starts on.
fn skip_physical_lines(text: &str, lines: u64) -> (&str, u64) {
    if lines == 0 {
        return (text, 1);
    }
    match text.match_indices('\n').nth(lines as usize - 1) {
        Some((index, _)) => (&text[index + 1..], lines + 1),
        None => ("", lines + 1),
    }
}

/// Tracks physical line numbers through a text by byte offset
///
/// csv positions a record where reading resumed, which is the first of any
/// blank lines preceding it; those are stepped over here.
struct LineCounter<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: u64,
}

impl<'a> LineCounter<'a> {
    fn new(text: &'a str, first_line: u64) -> Self {
        Self {
            bytes: text.as_bytes(),
            offset: 0,
            line: first_line,
        }
    }

    /// Line on which the record read from `offset` actually starts
    fn record_line(&mut self, offset: usize) -> u64 {
        let mut start = offset.min(self.bytes.len());
        loop {
            match &self.bytes[start..] {
                [b'\r', b'\n', ..] => start += 2,
                [b'\n', ..] | [b'\r', ..] => start += 1,
                _ => break,
            }
        }

        if start >= self.offset {
            let newlines = self.bytes[self.offset..start]
                .iter()
                .filter(|&&byte| byte == b'\n')
                .count() as u64;
            self.line += newlines;
            self.offset = start;
        }
        self.line
    }
}

/// Read every record of a CSV text, header line included
pub fn read_delimited(text: &str, file: &str, options: &DelimitedOptions) -> Result<Vec<TextRow>> {
    let (body, first_line) = skip_physical_lines(text, options.skip_lines);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(options.flexible || options.skip_malformed)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut lines = LineCounter::new(body, first_line);
    let mut rows = Vec::new();
    let mut expected_fields: Option<usize> = None;
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if options.skip_malformed => {
                warn!("Skipping unreadable record in {}: {}", file, e);
                skipped += 1;
                continue;
            }
            Err(e) => {
                return Err(Error::csv_parsing(
                    file,
                    "Failed to read CSV record",
                    Some(e),
                ));
            }
        };

        let offset = record.position().map(|p| p.byte() as usize).unwrap_or(0);
        let line = lines.record_line(offset);

        if options.skip_malformed {
            let expected = *expected_fields.get_or_insert(record.len());
            if record.len() != expected {
                debug!(
                    "Skipping record on line {} of {}: {} fields, expected {}",
                    line,
                    file,
                    record.len(),
                    expected
                );
                skipped += 1;
                continue;
            }
        }

        rows.push(TextRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    debug!(
        "Read {} records from {} ({} skipped)",
        rows.len(),
        file,
        skipped
    );
    Ok(rows)
}
