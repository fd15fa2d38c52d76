//! Fetch and build step shared by every subcommand.

use crate::args::SourceArgs;
use anyhow::Context;
use chrono::{DateTime, Utc};
use log::info;
use wpg_data::builder::DatasetBuilder;
use wpg_data::dataset::Dataset;
use wpg_wb::client::{FetchFailure, WorldBankClient};
use wpg_wb::country::Country;
use wpg_wb::quality::DataQualityIssue;

/// The built dataset plus everything that went wrong on the way to it.
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    /// Rejected observations from both parsing and building
    pub issues: Vec<DataQualityIssue>,
    pub failures: Vec<FetchFailure>,
    pub fetched_at: DateTime<Utc>,
}

/// Fetch both series for the configured countries and build the dataset.
///
/// Fails only when the country table is unreadable or every request failed.
pub async fn load_dataset(source: &SourceArgs) -> anyhow::Result<LoadedDataset> {
    let countries = Country::get_country_vector().context("reading the country table")?;
    let client = WorldBankClient::new(source.to_config())?;
    let report = client
        .get_all(&countries)
        .await
        .with_context(|| format!("fetching indicator series from {}", client.config().base_url))?;

    let output = DatasetBuilder::new(&countries).build(&report.population, &report.gdp);
    let mut issues = report.issues;
    issues.extend(output.issues);
    info!(
        "Dataset ready: {} records, {} rejected observations, {} failed requests",
        output.dataset.len(),
        issues.len(),
        report.failures.len()
    );
    Ok(LoadedDataset {
        dataset: output.dataset,
        issues,
        failures: report.failures,
        fetched_at: report.fetched_at,
    })
}
