use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::OutputError;
use crate::models::SearchResult;

pub const HEADERS: [&str; 6] = ["Title", "URL", "Date", "Author", "Company", "Company Size"];

/// Writes the header row and one row per result.
pub fn write_results<W: Write>(writer: W, results: &[SearchResult]) -> Result<(), OutputError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for result in results {
        csv_writer.write_record([
            result.title.as_str(),
            result.link.as_str(),
            result.date_string().as_str(),
            result.author.as_str(),
            result.company.as_str(),
            result.company_size.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the results to it.
pub fn save_results<P: AsRef<Path>>(path: P, results: &[SearchResult]) -> Result<(), OutputError> {
    let file = File::create(path)?;
    write_results(file, results)
}
