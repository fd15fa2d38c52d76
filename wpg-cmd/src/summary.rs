//! Summary subcommand: selector options and what went wrong while loading.

use crate::args::SourceArgs;
use crate::load::{load_dataset, LoadedDataset};
use std::io::{self, Write};
use wpg_data::filter::FilterOptions;
use wpg_utils::format::format_pct;

pub async fn run_summary(source: &SourceArgs) -> anyhow::Result<()> {
    let loaded = load_dataset(source).await?;
    let stdout = io::stdout();
    render_summary(&loaded, &mut stdout.lock())?;
    Ok(())
}

pub fn render_summary<W: Write>(loaded: &LoadedDataset, out: &mut W) -> io::Result<()> {
    let dataset = &loaded.dataset;
    let options = FilterOptions::from_dataset(dataset);

    writeln!(out, "Fetched at: {}", loaded.fetched_at.to_rfc3339())?;
    writeln!(out, "Records: {}", dataset.len())?;
    writeln!(out, "Countries: {}", options.countries.join(", "))?;
    match dataset.year_span() {
        Some((first, last)) => writeln!(out, "Years: {}-{}", first, last)?,
        None => writeln!(out, "Years: none")?,
    }
    if !dataset.is_empty() {
        writeln!(
            out,
            "Population growth range: {} to {}",
            format_pct(options.growth_bounds.min),
            format_pct(options.growth_bounds.max)
        )?;
    }
    let variations: Vec<String> = options.variations.iter().map(|v| v.to_string()).collect();
    writeln!(out, "Variations: {}", variations.join(", "))?;
    let declining: Vec<String> = dataset.countries_with_decline().into_iter().collect();
    writeln!(
        out,
        "Countries with a population decline: {}",
        if declining.is_empty() {
            "none".to_string()
        } else {
            declining.join(", ")
        }
    )?;

    writeln!(out, "Failed requests: {}", loaded.failures.len())?;
    for failure in &loaded.failures {
        writeln!(
            out,
            "  {} ({}) {}: {}",
            failure.country_name, failure.country_code, failure.indicator, failure.error
        )?;
    }
    writeln!(out, "Rejected observations: {}", loaded.issues.len())?;
    for issue in &loaded.issues {
        writeln!(out, "  {}", issue)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::tests::sample_dataset;
    use chrono::{TimeZone, Utc};
    use wpg_data::dataset::Dataset;
    use wpg_wb::client::FetchFailure;
    use wpg_wb::error::FetchError;
    use wpg_wb::indicator::Indicator;
    use wpg_wb::quality::{DataQualityError, DataQualityIssue};

    fn render(loaded: &LoadedDataset) -> String {
        let mut out = Vec::new();
        render_summary(loaded, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_summary() {
        let loaded = LoadedDataset {
            dataset: sample_dataset(),
            issues: vec![DataQualityIssue {
                country_name: "Chile".to_string(),
                year: Some(2016),
                indicator: Indicator::Gdp,
                kind: DataQualityError::NonNumeric("..".to_string()),
            }],
            failures: vec![FetchFailure {
                country_code: "ZMB".to_string(),
                country_name: "Zambia".to_string(),
                indicator: Indicator::Population,
                error: FetchError::Status {
                    status: 502,
                    url: "https://api.worldbank.org/v2/country/ZMB".to_string(),
                },
            }],
            fetched_at: Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap(),
        };
        let text = render(&loaded);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Fetched at: 2025-07-01T12:00:00+00:00");
        assert_eq!(lines[1], "Records: 4");
        assert_eq!(lines[2], "Countries: Chile, Venezuela");
        assert_eq!(lines[3], "Years: 2014-2015");
        assert_eq!(lines[4], "Population growth range: -0.99% to 1.14%");
        assert_eq!(lines[5], "Variations: Growth, Decline");
        assert_eq!(lines[6], "Countries with a population decline: Venezuela");
        assert_eq!(lines[7], "Failed requests: 1");
        assert!(lines[8].starts_with("  Zambia (ZMB) population: Bad response status 502"));
        assert_eq!(lines[9], "Rejected observations: 1");
        assert_eq!(lines[10], "  Chile gdp 2016: non-numeric value \"..\"");
    }

    #[test]
    fn test_render_summary_empty_dataset() {
        let loaded = LoadedDataset {
            dataset: Dataset::default(),
            issues: Vec::new(),
            failures: Vec::new(),
            fetched_at: Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap(),
        };
        let text = render(&loaded);
        assert!(text.contains("Years: none\n"));
        assert!(!text.contains("growth range"));
        assert!(text.contains("Countries with a population decline: none\n"));
    }
}
