//! Turns raw population and GDP observations into the analytical dataset.

use crate::dataset::{CountryYearRecord, Dataset, Variation};
use itertools::Itertools;
use log::{info, warn};
use std::collections::{btree_map::Entry, BTreeMap, HashMap};
use wpg_wb::{
    country::Country,
    indicator::Indicator,
    observation::{RawObservation, RawValue},
    quality::{DataQualityError, DataQualityIssue},
};

type Key = (String, i32);

/// Result of one build: the dataset and every observation rejected on the way.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub dataset: Dataset,
    pub issues: Vec<DataQualityIssue>,
    /// Rows present in both series, before the first year of each country
    /// is dropped
    pub joined_rows: usize,
}

/// A joined row before growth rates are known.
#[derive(Debug, Clone)]
struct JoinedRow {
    country_name: String,
    year: i32,
    population: u64,
    gdp: f64,
}

/// Builds datasets for a fixed country table.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    iso3: HashMap<String, String>,
}

impl DatasetBuilder {
    pub fn new(countries: &[Country]) -> Self {
        Self {
            iso3: Country::iso3_lookup(countries),
        }
    }

    /// Join, derive and order the two series.
    ///
    /// (country, year) keys present in only one series are dropped without a
    /// report. The first year of every country has no growth baseline and is
    /// dropped as well.
    pub fn build(&self, population: &[RawObservation], gdp: &[RawObservation]) -> BuildOutput {
        let mut issues = Vec::new();
        // Population is whole people; anything that truncates below one is
        // reported with its truncated value.
        let population_table = indicator_table(population, Indicator::Population, &mut issues, |v| {
            let whole = v.trunc();
            if whole < 1.0 {
                Err(DataQualityError::NonPositive(whole))
            } else {
                Ok(whole as u64)
            }
        });
        let gdp_table = indicator_table(gdp, Indicator::Gdp, &mut issues, |v| {
            if v > 0.0 {
                Ok(v)
            } else {
                Err(DataQualityError::NonPositive(v))
            }
        });

        // BTreeMap iteration yields keys sorted by (country_name, year).
        let joined = population_table
            .into_iter()
            .filter_map(|((country_name, year), population)| {
                let gdp = *gdp_table.get(&(country_name.clone(), year))?;
                Some(JoinedRow {
                    country_name,
                    year,
                    population,
                    gdp,
                })
            })
            .collect::<Vec<_>>();
        let joined_len = joined.len();

        let mut records = Vec::with_capacity(joined_len);
        let by_country = joined.into_iter().chunk_by(|row| row.country_name.clone());
        for (_country, rows) in &by_country {
            let mut previous: Option<JoinedRow> = None;
            for row in rows {
                if let Some(prev) = &previous {
                    let population_growth_pct =
                        percent_change(prev.population as f64, row.population as f64);
                    let gdp_growth_pct = percent_change(prev.gdp, row.gdp);
                    records.push(CountryYearRecord {
                        iso3: self.iso3.get(&row.country_name).cloned(),
                        country_name: row.country_name.clone(),
                        year: row.year,
                        population: row.population,
                        gdp: row.gdp,
                        population_growth_pct,
                        gdp_growth_pct,
                        variation: Variation::from_growth(population_growth_pct),
                    });
                }
                previous = Some(row);
            }
        }

        info!(
            "Built dataset: {} joined rows, {} records after first-year drop, {} rejected observations",
            joined_len,
            records.len(),
            issues.len()
        );
        BuildOutput {
            dataset: Dataset::from_sorted(records),
            issues,
            joined_rows: joined_len,
        }
    }
}

/// Index one indicator's observations by (country_name, year).
///
/// `accept` turns a finite value into the table value, or into the reason it
/// is rejected.
fn indicator_table<T, F>(
    observations: &[RawObservation],
    indicator: Indicator,
    issues: &mut Vec<DataQualityIssue>,
    accept: F,
) -> BTreeMap<Key, T>
where
    F: Fn(f64) -> Result<T, DataQualityError>,
{
    let mut table = BTreeMap::new();
    for observation in observations {
        let checked = match &observation.value {
            RawValue::Text(text) => Err(DataQualityError::NonNumeric(text.clone())),
            RawValue::Number(v) if !v.is_finite() => Err(DataQualityError::NonFinite),
            RawValue::Number(v) => accept(*v),
        };
        let result = checked.and_then(|value| {
            match table.entry((observation.country_name.clone(), observation.year)) {
                Entry::Occupied(_) => Err(DataQualityError::DuplicateObservation),
                Entry::Vacant(slot) => {
                    slot.insert(value);
                    Ok(())
                }
            }
        });
        if let Err(kind) = result {
            let issue = DataQualityIssue {
                country_name: observation.country_name.clone(),
                year: Some(observation.year),
                indicator,
                kind,
            };
            warn!("Rejected observation: {}", issue);
            issues.push(issue);
        }
    }
    table
}

/// `(current / previous - 1) * 100`, rounded to 2 decimal places.
fn percent_change(previous: f64, current: f64) -> f64 {
    let pct = (current / previous - 1.0) * 100.0;
    (pct * 100.0).round() / 100.0
}
