//! Chart series subcommand.

use crate::args::{FilterArgs, SourceArgs};
use crate::load::load_dataset;
use crate::table::NO_DATA_NOTICE;
use anyhow::Context;
use log::{info, warn};
use wpg_data::charts::ChartBundle;

/// Fetch, filter and write every chart series as pretty-printed JSON.
pub async fn run_charts(source: &SourceArgs, filter: &FilterArgs, output: &str) -> anyhow::Result<()> {
    let loaded = load_dataset(source).await?;
    let spec = filter.to_spec(&loaded.dataset);
    let view = loaded.dataset.filter(&spec);
    if view.is_empty() {
        warn!("{}", NO_DATA_NOTICE);
    }
    let bundle = ChartBundle::new(&loaded.dataset, &spec, &view);
    if bundle.map.is_none() {
        info!("No map series: select a specific year with --year to include it");
    }
    let json = serde_json::to_string_pretty(&bundle)?;
    std::fs::write(output, json).with_context(|| format!("writing {}", output))?;
    info!("Chart series for {} rows written to {}", view.len(), output);
    Ok(())
}
