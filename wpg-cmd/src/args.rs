//! Flags shared by the subcommands.

use clap::Args;
use log::warn;
use std::time::Duration;
use wpg_data::dataset::{Dataset, Variation};
use wpg_data::filter::{FilterSpec, GrowthRange};
use wpg_wb::config::{SourceConfig, DEFAULT_BASE_URL};
use wpg_wb::year_range::YearRange;

/// Where and how to fetch the indicator series.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Base URL of the World Bank indicators API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Requests in flight at once
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl SourceArgs {
    pub fn to_config(&self) -> SourceConfig {
        SourceConfig {
            base_url: self.base_url.clone(),
            years: YearRange::default(),
            concurrency: self.concurrency.max(1),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Filter flags. Anything left out keeps the "everything selected" default.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Country to include, by display name (repeatable; default: all)
    #[arg(short = 'c', long = "country")]
    pub countries: Vec<String>,

    /// Only this year
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Lowest population growth (%) to include
    #[arg(long, allow_negative_numbers = true)]
    pub min_growth: Option<f64>,

    /// Highest population growth (%) to include
    #[arg(long, allow_negative_numbers = true)]
    pub max_growth: Option<f64>,

    /// Only years of `growth` or `decline`
    #[arg(long)]
    pub variation: Option<Variation>,
}

impl FilterArgs {
    pub fn to_spec(&self, dataset: &Dataset) -> FilterSpec {
        let mut spec = FilterSpec::all(dataset)
            .with_year(self.year.into())
            .with_variation(self.variation);
        if !self.countries.is_empty() {
            let known = dataset.countries();
            for country in self.countries.iter().filter(|c| !known.contains(*c)) {
                warn!("Unknown country {:?}; it matches no rows", country);
            }
            spec = spec.with_countries(self.countries.iter().cloned());
        }
        let observed = spec.growth_range;
        spec.with_growth_range(GrowthRange::new(
            self.min_growth.unwrap_or(observed.min),
            self.max_growth.unwrap_or(observed.max),
        ))
    }
}
