//! Raw observation fixtures shared by the unit tests.

use crate::builder::{BuildOutput, DatasetBuilder};
use wpg_wb::country::Country;
use wpg_wb::observation::{RawObservation, RawValue};

pub fn obs(name: &str, year: i32, value: f64) -> RawObservation {
    RawObservation {
        country_code: name[..2].to_uppercase(),
        country_name: name.to_string(),
        year,
        value: RawValue::Number(value),
    }
}

pub fn series(name: &str, first_year: i32, values: &[f64]) -> Vec<RawObservation> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| obs(name, first_year + i as i32, *v))
        .collect()
}

pub fn country(name: &str, iso3: Option<&str>) -> Country {
    Country {
        code: name[..2].to_uppercase(),
        name: name.to_string(),
        iso3: iso3.map(String::from),
    }
}

/// Two countries, 2013-2015, Country A missing GDP for 2015.
pub fn two_country_fixture() -> (Vec<RawObservation>, Vec<RawObservation>) {
    let mut population = series("Country A", 2013, &[100.0, 110.0, 121.0]);
    population.extend(series("Country B", 2013, &[200.0, 190.0, 180.0]));
    let mut gdp = series("Country A", 2013, &[1000.0, 1100.0]);
    gdp.extend(series("Country B", 2013, &[2000.0, 1900.0, 1800.0]));
    (population, gdp)
}

/// Three countries, 2013-2016, all series complete.
///
/// Population growth after the first year:
/// - Atlantis: 10, 10, 0
/// - Borduria: -5, -5.26, 2.78
/// - Carpania: 2, 1.96, 1.92
pub fn three_country_output() -> BuildOutput {
    let mut population = series("Atlantis", 2013, &[100.0, 110.0, 121.0, 121.0]);
    population.extend(series("Borduria", 2013, &[200.0, 190.0, 180.0, 185.0]));
    population.extend(series("Carpania", 2013, &[50.0, 51.0, 52.0, 53.0]));
    let mut gdp = series("Atlantis", 2013, &[1000.0, 1100.0, 1210.0, 1300.0]);
    gdp.extend(series("Borduria", 2013, &[2000.0, 1900.0, 1800.0, 1900.0]));
    gdp.extend(series("Carpania", 2013, &[500.0, 510.0, 520.0, 530.0]));
    let countries = vec![
        country("Atlantis", Some("ATL")),
        country("Borduria", Some("BOR")),
        country("Carpania", None),
    ];
    DatasetBuilder::new(&countries).build(&population, &gdp)
}
