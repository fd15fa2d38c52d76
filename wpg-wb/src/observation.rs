use crate::{
    country::Country,
    error::{FetchError, Result},
    indicator::Indicator,
    quality::{DataQualityError, DataQualityIssue},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reading as delivered by the API.
/// - `Number(f64)`: a JSON number
/// - `Text(String)`: anything else that was not null, kept so the builder can reject it
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// One indicator reading for one country and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub country_code: String,
    pub country_name: String,
    pub year: i32,
    pub value: RawValue,
}

/// Entry of the data array in an indicators API response.
#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    date: Value,
    #[serde(default)]
    value: Value,
}

/// Observations parsed from one (country, indicator) response, plus the
/// entries that had to be rejected on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorPage {
    pub observations: Vec<RawObservation>,
    pub issues: Vec<DataQualityIssue>,
}

impl IndicatorPage {
    /// Parse an indicators API response body.
    ///
    /// The API answers `[metadata, [entries...]]`. Fewer than two top-level
    /// elements, or a `null` data element, means the series has no data and
    /// yields an empty page. Entries with a `null` value are omitted.
    pub fn from_response_body(body: &str, country: &Country, indicator: Indicator) -> Result<Self> {
        let json: Value = serde_json::from_str(body)?;
        let elements = match json {
            Value::Array(elements) => elements,
            other => {
                return Err(FetchError::Decode(format!(
                    "expected a top-level array, got {}",
                    json_kind(&other)
                )))
            }
        };
        if elements.len() < 2 {
            return Ok(IndicatorPage::default());
        }
        let data = match elements.into_iter().nth(1) {
            Some(Value::Null) | None => return Ok(IndicatorPage::default()),
            Some(data) => data,
        };
        let entries: Vec<ApiEntry> = serde_json::from_value(data)?;

        let mut page = IndicatorPage::default();
        for entry in entries {
            let value = match entry.value {
                Value::Null => continue,
                Value::Number(n) => match n.as_f64() {
                    Some(v) => RawValue::Number(v),
                    None => RawValue::Text(n.to_string()),
                },
                Value::String(s) => RawValue::Text(s),
                other => RawValue::Text(other.to_string()),
            };
            let year = match parse_year(&entry.date) {
                Some(year) => year,
                None => {
                    page.issues.push(DataQualityIssue {
                        country_name: country.name.clone(),
                        year: None,
                        indicator,
                        kind: DataQualityError::InvalidDate(value_text(&entry.date)),
                    });
                    continue;
                }
            };
            page.observations.push(RawObservation {
                country_code: country.code.clone(),
                country_name: country.name.clone(),
                year,
                value,
            });
        }
        Ok(page)
    }
}

fn parse_year(date: &Value) -> Option<i32> {
    match date {
        Value::String(s) => s.trim().parse::<i32>().ok(),
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        _ => None,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
