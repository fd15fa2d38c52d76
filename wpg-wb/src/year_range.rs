use serde::{Deserialize, Serialize};

/// First year requested from the indicators API.
pub const FIRST_YEAR: i32 = 2013;

/// Last year requested from the indicators API.
pub const LAST_YEAR: i32 = 2025;

/// An inclusive range of years, formatted as `start:end` in API queries.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct YearRange(pub i32, pub i32);

impl YearRange {
    /// Value of the `date` query parameter, e.g. `2013:2025`.
    pub fn as_query(&self) -> String {
        format!("{}:{}", self.0, self.1)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange(FIRST_YEAR, LAST_YEAR)
    }
}
