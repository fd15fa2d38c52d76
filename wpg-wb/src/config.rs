use crate::year_range::YearRange;
use std::time::Duration;

/// Default base URL of the World Bank indicators API.
pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Page size sent with each request; the default year range always fits in one page.
pub const PER_PAGE: u32 = 100;

/// Runtime settings for the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub base_url: String,
    pub years: YearRange,
    /// Requests in flight at once
    pub concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            years: YearRange::default(),
            concurrency: 4,
            timeout: Duration::from_secs(30),
        }
    }
}
