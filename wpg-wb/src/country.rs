use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Embedded CSV of the countries the dashboard tracks.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/countries.csv");

/// A tracked country: the code used in API requests, the display name used
/// as the dataset key, and the ISO-3 code used for map rendering.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Country {
    /// Code sent to the indicators API (ISO-2 or ISO-3)
    pub code: String,
    pub name: String,
    /// Empty in the CSV means no map location
    pub iso3: Option<String>,
}

impl Country {
    /// Get the country vector from the embedded CSV.
    pub fn get_country_vector() -> Result<Vec<Country>, csv::Error> {
        Country::parse_country_csv(CSV_OBJECT)
    }

    /// Parse a CSV string of countries into a vector of Countries.
    ///
    /// Expected CSV columns: code, name, iso3
    pub fn parse_country_csv(csv_object: &str) -> Result<Vec<Country>, csv::Error> {
        let mut country_list: Vec<Country> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            let code = rho.get(0).unwrap_or("").trim();
            let name = rho.get(1).unwrap_or("").trim();
            if code.is_empty() || name.is_empty() {
                log::warn!("skipping country row without code or name: {:?}", rho);
                continue;
            }
            let iso3 = rho
                .get(2)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);
            country_list.push(Country {
                code: code.to_string(),
                name: name.to_string(),
                iso3,
            });
        }
        Ok(country_list)
    }

    /// Build the name → ISO-3 lookup used when deriving map codes.
    pub fn iso3_lookup(countries: &[Country]) -> HashMap<String, String> {
        countries
            .iter()
            .filter_map(|c| c.iso3.as_ref().map(|iso3| (c.name.clone(), iso3.clone())))
            .collect()
    }
}
