use serde::{Deserialize, Serialize};
use std::fmt;

/// The two World Bank series the toolkit works with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    /// Total population (`SP.POP.TOTL`)
    Population,
    /// GDP in current US dollars (`NY.GDP.MKTP.CD`)
    Gdp,
}

impl Indicator {
    /// Every indicator, in fetch order.
    pub const ALL: [Indicator; 2] = [Indicator::Population, Indicator::Gdp];

    /// World Bank indicator id used in request paths.
    pub fn id(&self) -> &'static str {
        match self {
            Indicator::Population => "SP.POP.TOTL",
            Indicator::Gdp => "NY.GDP.MKTP.CD",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Population => write!(f, "population"),
            Indicator::Gdp => write!(f, "gdp"),
        }
    }
}
