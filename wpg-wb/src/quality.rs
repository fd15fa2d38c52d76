//! Data quality problems found while turning API values into dataset rows.
//!
//! These are reported, never fatal: the affected observation is excluded and
//! the rest of the series is kept.

use crate::indicator::Indicator;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why an observation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum DataQualityError {
    /// The API returned something other than a number
    #[error("non-numeric value {0:?}")]
    NonNumeric(String),

    /// NaN or infinite value
    #[error("non-finite value")]
    NonFinite,

    /// Zero or negative GDP, or a population that truncates below one
    #[error("non-positive value {0}")]
    NonPositive(f64),

    /// A second reading for a (country, year) already seen in this series
    #[error("duplicate observation")]
    DuplicateObservation,

    /// The `date` field is not a year
    #[error("invalid date {0:?}")]
    InvalidDate(String),
}

/// A rejected observation with enough context to report it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQualityIssue {
    pub country_name: String,
    /// Absent when the date itself could not be parsed
    pub year: Option<i32>,
    pub indicator: Indicator,
    pub kind: DataQualityError,
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(
                f,
                "{} {} {}: {}",
                self.country_name, self.indicator, year, self.kind
            ),
            None => write!(f, "{} {}: {}", self.country_name, self.indicator, self.kind),
        }
    }
}
