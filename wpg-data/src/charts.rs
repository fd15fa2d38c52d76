//! Chart and map series derived from a filtered view.
//!
//! Everything here is serializable so a front end can render it directly.
//! Values are raw numbers; formatting is the front end's job.

use crate::dataset::{CountryYearRecord, Dataset};
use crate::filter::{selection_label, FilterSpec, FilteredView, YearFilter};
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// One line/bar group per country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySeries {
    pub country_name: String,
    pub points: Vec<YearValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthIndicator {
    PopulationGrowth,
    GdpGrowth,
}

/// Long-format point for the population vs GDP growth comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorPoint {
    pub year: i32,
    pub country_name: String,
    pub indicator: GrowthIndicator,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSlice {
    pub country_name: String,
    pub population: u64,
    /// Share of the view's summed population, in percent
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub country_name: String,
    pub year: i32,
    pub population: u64,
    pub population_growth_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub iso3: String,
    pub country_name: String,
    pub population: u64,
}

/// Group a view into per-country series of `value(record)`.
///
/// Relies on the view being ordered by `(country_name, year)`.
pub fn series_by_country<F>(view: &FilteredView<'_>, value: F) -> Vec<CountrySeries>
where
    F: Fn(&CountryYearRecord) -> f64,
{
    let mut series = Vec::new();
    for (country_name, rows) in &view.iter().chunk_by(|r| r.country_name.clone()) {
        series.push(CountrySeries {
            country_name,
            points: rows
                .map(|r| YearValue {
                    year: r.year,
                    value: value(r),
                })
                .collect(),
        });
    }
    series
}

pub fn population_by_year(view: &FilteredView<'_>) -> Vec<CountrySeries> {
    series_by_country(view, |r| r.population as f64)
}

pub fn gdp_per_capita(view: &FilteredView<'_>) -> Vec<CountrySeries> {
    series_by_country(view, CountryYearRecord::gdp_per_capita)
}

pub fn population_growth(view: &FilteredView<'_>) -> Vec<CountrySeries> {
    series_by_country(view, |r| r.population_growth_pct)
}

/// Population growth and GDP growth side by side, two points per record.
pub fn growth_comparison(view: &FilteredView<'_>) -> Vec<IndicatorPoint> {
    view.iter()
        .flat_map(|r| {
            [
                (GrowthIndicator::PopulationGrowth, r.population_growth_pct),
                (GrowthIndicator::GdpGrowth, r.gdp_growth_pct),
            ]
            .into_iter()
            .map(move |(indicator, value)| IndicatorPoint {
                year: r.year,
                country_name: r.country_name.clone(),
                indicator,
                value,
            })
        })
        .collect()
}

/// Summed population per country over the view's rows.
pub fn population_share(view: &FilteredView<'_>) -> Vec<ShareSlice> {
    let totals: Vec<(String, u64)> = view
        .iter()
        .chunk_by(|r| r.country_name.clone())
        .into_iter()
        .map(|(country_name, rows)| (country_name, rows.map(|r| r.population).sum::<u64>()))
        .collect();
    let grand_total: u64 = totals.iter().map(|(_, p)| p).sum();
    totals
        .into_iter()
        .map(|(country_name, population)| ShareSlice {
            country_name,
            population,
            share_pct: if grand_total == 0 {
                0.0
            } else {
                population as f64 / grand_total as f64 * 100.0
            },
        })
        .collect()
}

pub fn population_vs_growth(view: &FilteredView<'_>) -> Vec<ScatterPoint> {
    view.iter()
        .map(|r| ScatterPoint {
            country_name: r.country_name.clone(),
            year: r.year,
            population: r.population,
            population_growth_pct: r.population_growth_pct,
        })
        .collect()
}

/// Population per country for one year, from the full dataset.
///
/// `None` when no single year is selected. Countries without an ISO-3 code
/// are left out.
pub fn choropleth(dataset: &Dataset, year: YearFilter) -> Option<Vec<MapPoint>> {
    let YearFilter::Specific(year) = year else {
        return None;
    };
    Some(
        dataset
            .records()
            .iter()
            .filter(|r| r.year == year)
            .filter_map(|r| {
                Some(MapPoint {
                    iso3: r.iso3.clone()?,
                    country_name: r.country_name.clone(),
                    population: r.population,
                })
            })
            .collect(),
    )
}

/// Every chart of the dashboard for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    /// `All` or the selected country names
    pub selection: String,
    /// First and last year of the full dataset
    pub year_span: Option<(i32, i32)>,
    pub population_by_year: Vec<CountrySeries>,
    pub growth_comparison: Vec<IndicatorPoint>,
    pub gdp_per_capita: Vec<CountrySeries>,
    pub population_growth: Vec<CountrySeries>,
    pub population_share: Vec<ShareSlice>,
    pub population_vs_growth: Vec<ScatterPoint>,
    /// Present only when a single year is selected
    pub map: Option<Vec<MapPoint>>,
}

impl ChartBundle {
    pub fn new(dataset: &Dataset, spec: &FilterSpec, view: &FilteredView<'_>) -> Self {
        Self {
            selection: selection_label(dataset, spec),
            year_span: dataset.year_span(),
            population_by_year: population_by_year(view),
            growth_comparison: growth_comparison(view),
            gdp_per_capita: gdp_per_capita(view),
            population_growth: population_growth(view),
            population_share: population_share(view),
            population_vs_growth: population_vs_growth(view),
            map: choropleth(dataset, spec.year),
        }
    }
}
