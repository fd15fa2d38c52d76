use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction of a country's population change in a given year.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variation {
    Growth,
    Decline,
}

impl Variation {
    /// `Growth` for a strictly positive change; zero counts as `Decline`.
    pub fn from_growth(population_growth_pct: f64) -> Self {
        if population_growth_pct > 0.0 {
            Variation::Growth
        } else {
            Variation::Decline
        }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variation::Growth => write!(f, "Growth"),
            Variation::Decline => write!(f, "Decline"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variation {0:?} (expected \"growth\" or \"decline\")")]
pub struct ParseVariationError(pub String);

impl FromStr for Variation {
    type Err = ParseVariationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "growth" => Ok(Variation::Growth),
            "decline" => Ok(Variation::Decline),
            _ => Err(ParseVariationError(s.to_string())),
        }
    }
}

/// One row of the analytical dataset, unique per `(country_name, year)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryYearRecord {
    pub country_name: String,
    pub year: i32,
    pub population: u64,
    /// Current US dollars
    pub gdp: f64,
    /// Percent change from the previous row of the same country, 2 decimals
    pub population_growth_pct: f64,
    pub gdp_growth_pct: f64,
    pub variation: Variation,
    pub iso3: Option<String>,
}

impl CountryYearRecord {
    pub fn gdp_per_capita(&self) -> f64 {
        self.gdp / self.population as f64
    }
}

/// The built dataset, ordered by `(country_name, year)`.
///
/// Only [`crate::builder::DatasetBuilder`] creates one, so every record
/// satisfies the join and derivation rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CountryYearRecord>,
}

impl Dataset {
    pub(crate) fn from_sorted(records: Vec<CountryYearRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CountryYearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names, sorted.
    pub fn countries(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.country_name.clone()).collect()
    }

    /// Distinct years, sorted.
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// First and last year present.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let years = self.years();
        Some((*years.first()?, *years.last()?))
    }

    /// Smallest and largest population growth present.
    pub fn growth_bounds(&self) -> Option<(f64, f64)> {
        self.records.iter().fold(None, |acc, r| {
            let g = r.population_growth_pct;
            match acc {
                None => Some((g, g)),
                Some((min, max)) => Some((min.min(g), max.max(g))),
            }
        })
    }

    /// Countries with at least one year of population decline.
    pub fn countries_with_decline(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|r| r.variation == Variation::Decline)
            .map(|r| r.country_name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::three_country_output;

    #[test]
    fn test_variation_zero_is_decline() {
        assert_eq!(Variation::from_growth(0.0), Variation::Decline);
        assert_eq!(Variation::from_growth(-0.0), Variation::Decline);
        assert_eq!(Variation::from_growth(0.01), Variation::Growth);
        assert_eq!(Variation::from_growth(-3.2), Variation::Decline);
    }

    #[test]
    fn test_variation_from_str() {
        assert_eq!("growth".parse::<Variation>().unwrap(), Variation::Growth);
        assert_eq!(" Decline ".parse::<Variation>().unwrap(), Variation::Decline);
        assert!("flat".parse::<Variation>().is_err());
    }

    #[test]
    fn test_dataset_summaries() {
        let dataset = three_country_output().dataset;
        assert_eq!(dataset.len(), 9);
        assert_eq!(dataset.year_span(), Some((2014, 2016)));
        assert_eq!(dataset.growth_bounds(), Some((-5.26, 10.0)));
        let declining: Vec<String> = dataset.countries_with_decline().into_iter().collect();
        assert_eq!(declining, vec!["Atlantis".to_string(), "Borduria".to_string()]);
    }

    #[test]
    fn test_empty_dataset_summaries() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_span(), None);
        assert_eq!(dataset.growth_bounds(), None);
    }
}
