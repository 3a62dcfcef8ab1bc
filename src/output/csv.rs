//! CSV export of series samples.
//!
//! A thin I/O wrapper around the series geometry: each line holds one
//! `x, value` pair, where x is the sample's data-space coordinate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::series::Series;

/// CSV encoder for series data.
pub struct CsvExporter;

impl CsvExporter {
    /// Write `(x, value)` pairs, one comma-separated pair per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write<W: Write>(series: &Series, writer: &mut W) -> Result<()> {
        for (i, &value) in series.values().iter().enumerate() {
            writeln!(writer, "{}, {}", series.sample_x(i), value)?;
        }
        Ok(())
    }

    /// Write the series to a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(series: &Series, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write(series, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Render the series to a CSV string.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails.
    pub fn to_string(series: &Series) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write(series, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
