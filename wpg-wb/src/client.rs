//! HTTP fetcher for the World Bank indicators API.

use crate::{
    config::{SourceConfig, PER_PAGE},
    country::Country,
    error::{FetchError, Result},
    indicator::Indicator,
    observation::{IndicatorPage, RawObservation},
    quality::DataQualityIssue,
};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use reqwest::Client;

/// A (country, indicator) request that could not be completed.
#[derive(Debug)]
pub struct FetchFailure {
    pub country_code: String,
    pub country_name: String,
    pub indicator: Indicator,
    pub error: FetchError,
}

/// Everything one full fetch produced.
#[derive(Debug)]
pub struct FetchReport {
    pub population: Vec<RawObservation>,
    pub gdp: Vec<RawObservation>,
    /// Pairs skipped because of transport, status or decode failures
    pub failures: Vec<FetchFailure>,
    /// Entries rejected while parsing responses
    pub issues: Vec<DataQualityIssue>,
    pub fetched_at: DateTime<Utc>,
}

impl FetchReport {
    fn new() -> Self {
        Self {
            population: Vec::new(),
            gdp: Vec::new(),
            failures: Vec::new(),
            issues: Vec::new(),
            fetched_at: Utc::now(),
        }
    }
}

/// Client for the indicators API, reused across all requests of a run.
#[derive(Debug, Clone)]
pub struct WorldBankClient {
    client: Client,
    config: SourceConfig,
}

impl WorldBankClient {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Use a preconfigured HTTP client. `config.timeout` is not applied.
    pub fn with_client(client: Client, config: SourceConfig) -> Self {
        Self { client, config }
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Request URL for one country and indicator.
    pub fn indicator_url(&self, country_code: &str, indicator: Indicator) -> String {
        format!(
            "{}/country/{}/indicator/{}?format=json&date={}&per_page={}",
            self.config.base_url.trim_end_matches('/'),
            country_code,
            indicator.id(),
            self.config.years.as_query(),
            PER_PAGE
        )
    }

    /// Fetch one indicator series for one country.
    ///
    /// A response without a data page is an empty result, not an error.
    pub async fn get_indicator(&self, country: &Country, indicator: Indicator) -> Result<IndicatorPage> {
        let url = self.indicator_url(&country.code, indicator);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text().await?;
        let page = IndicatorPage::from_response_body(&body, country, indicator)?;
        if page.observations.is_empty() {
            info!("No {} data for {} ({})", indicator, country.name, country.code);
        }
        Ok(page)
    }

    /// Fetch population and GDP for every country.
    ///
    /// Requests run with bounded concurrency and results are merged in
    /// country order, so the output does not depend on completion order.
    /// A failed pair is recorded and skipped; only a run where every request
    /// fails is an error.
    pub async fn get_all(&self, countries: &[Country]) -> Result<FetchReport> {
        let requests: Vec<(&Country, Indicator)> = countries
            .iter()
            .flat_map(|country| Indicator::ALL.iter().map(move |indicator| (country, *indicator)))
            .collect();
        let attempted = requests.len();
        info!(
            "Querying {} indicator series for {} countries ({})",
            attempted,
            countries.len(),
            self.config.years.as_query()
        );

        let results = stream::iter(requests)
            .map(|(country, indicator)| async move {
                let result = self.get_indicator(country, indicator).await;
                (country, indicator, result)
            })
            .buffered(self.config.concurrency.max(1))
            .collect::<Vec<_>>()
            .await;

        let mut report = FetchReport::new();
        for (country, indicator, result) in results {
            match result {
                Ok(page) => {
                    debug!(
                        "{} {}: {} observations",
                        country.name,
                        indicator,
                        page.observations.len()
                    );
                    for issue in &page.issues {
                        warn!("Rejected observation: {}", issue);
                    }
                    report.issues.extend(page.issues);
                    match indicator {
                        Indicator::Population => report.population.extend(page.observations),
                        Indicator::Gdp => report.gdp.extend(page.observations),
                    }
                }
                Err(error) => {
                    warn!(
                        "Skipping {} for {} ({}): {}",
                        indicator, country.name, country.code, error
                    );
                    report.failures.push(FetchFailure {
                        country_code: country.code.clone(),
                        country_name: country.name.clone(),
                        indicator,
                        error,
                    });
                }
            }
        }

        if attempted > 0 && report.failures.len() == attempted {
            return Err(FetchError::AllRequestsFailed { attempted });
        }
        info!(
            "Fetched {} population and {} GDP observations ({} requests failed)",
            report.population.len(),
            report.gdp.len(),
            report.failures.len()
        );
        Ok(report)
    }
}
