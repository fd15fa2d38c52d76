//! CSV export subcommand.

use crate::args::{FilterArgs, SourceArgs};
use crate::load::load_dataset;
use crate::table::NO_DATA_NOTICE;
use anyhow::Context;
use log::{info, warn};
use wpg_data::export::write_csv_file;

/// Fetch, filter and write the CSV export to `output`.
///
/// An empty selection still writes the header row.
pub async fn run_export(source: &SourceArgs, filter: &FilterArgs, output: &str) -> anyhow::Result<()> {
    let loaded = load_dataset(source).await?;
    let spec = filter.to_spec(&loaded.dataset);
    let view = loaded.dataset.filter(&spec);
    if view.is_empty() {
        warn!("{}", NO_DATA_NOTICE);
    }
    let count = write_csv_file(&view, output).with_context(|| format!("writing {}", output))?;
    info!("Export complete. {} rows written to {}", count, output);
    Ok(())
}
