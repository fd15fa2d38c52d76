//! CSV export of a filtered view.
//!
//! Columns: `country_name,year,population,gdp,gdp_per_capita,gdp_growth_pct,
//! population_growth_pct,variation,iso3`. Numbers are written unformatted so
//! the file parses back to the same values.

use crate::dataset::{CountryYearRecord, Variation};
use crate::filter::FilteredView;
use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Exported CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One exported line. `gdp_per_capita` is computed at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub country_name: String,
    pub year: i32,
    pub population: u64,
    pub gdp: f64,
    pub gdp_per_capita: f64,
    pub gdp_growth_pct: f64,
    pub population_growth_pct: f64,
    pub variation: Variation,
    pub iso3: Option<String>,
}

impl From<&CountryYearRecord> for ExportRow {
    fn from(r: &CountryYearRecord) -> Self {
        Self {
            country_name: r.country_name.clone(),
            year: r.year,
            population: r.population,
            gdp: r.gdp,
            gdp_per_capita: r.gdp_per_capita(),
            gdp_growth_pct: r.gdp_growth_pct,
            population_growth_pct: r.population_growth_pct,
            variation: r.variation,
            iso3: r.iso3.clone(),
        }
    }
}

/// Write the view as CSV with a header row. Returns the number of data rows.
pub fn write_csv<W: io::Write>(view: &FilteredView<'_>, writer: W) -> Result<usize, ExportError> {
    let mut wtr = Writer::from_writer(writer);
    let mut count = 0usize;
    for record in view.iter() {
        wtr.serialize(ExportRow::from(record))?;
        count += 1;
    }
    if count == 0 {
        // serialize() writes the header with the first row; keep it for empty views.
        wtr.write_record([
            "country_name",
            "year",
            "population",
            "gdp",
            "gdp_per_capita",
            "gdp_growth_pct",
            "population_growth_pct",
            "variation",
            "iso3",
        ])?;
    }
    wtr.flush()?;
    Ok(count)
}

/// The CSV export as a UTF-8 string.
pub fn to_csv_string(view: &FilteredView<'_>) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(view, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write the CSV export to `path`, replacing any existing file.
pub fn write_csv_file<P: AsRef<Path>>(view: &FilteredView<'_>, path: P) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path)?;
    write_csv(view, io::BufWriter::new(file))
}

/// Parse an export back into rows.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<ExportRow>, ExportError> {
    ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader)
        .deserialize::<ExportRow>()
        .map(|row| row.map_err(ExportError::from))
        .collect()
}
