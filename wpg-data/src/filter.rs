use crate::dataset::{CountryYearRecord, Dataset, Variation};
use serde::Serialize;
use std::collections::BTreeSet;

/// Year selection: every year, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum YearFilter {
    #[default]
    All,
    Specific(i32),
}

impl YearFilter {
    pub fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Specific(y) => *y == year,
        }
    }
}

impl From<Option<i32>> for YearFilter {
    fn from(year: Option<i32>) -> Self {
        year.map_or(YearFilter::All, YearFilter::Specific)
    }
}

/// Inclusive bounds on population growth (%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthRange {
    pub min: f64,
    pub max: f64,
}

impl GrowthRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// The full observed range of the dataset; unbounded when it is empty.
    pub fn observed(dataset: &Dataset) -> Self {
        dataset
            .growth_bounds()
            .map_or_else(GrowthRange::unbounded, |(min, max)| GrowthRange { min, max })
    }

    /// `min <= value <= max`; always false when `min > max`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Selection criteria, AND-composed.
///
/// An empty country set selects nothing. Start from [`FilterSpec::all`] to
/// get the "everything selected" default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSpec {
    pub countries: BTreeSet<String>,
    pub year: YearFilter,
    pub growth_range: GrowthRange,
    pub variation: Option<Variation>,
}

impl FilterSpec {
    /// Every country, every year, the observed growth range, any variation.
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            countries: dataset.countries(),
            year: YearFilter::All,
            growth_range: GrowthRange::observed(dataset),
            variation: None,
        }
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_year(mut self, year: YearFilter) -> Self {
        self.year = year;
        self
    }

    pub fn with_growth_range(mut self, growth_range: GrowthRange) -> Self {
        self.growth_range = growth_range;
        self
    }

    pub fn with_variation(mut self, variation: Option<Variation>) -> Self {
        self.variation = variation;
        self
    }

    pub fn matches(&self, record: &CountryYearRecord) -> bool {
        self.countries.contains(&record.country_name)
            && self.year.matches(record.year)
            && self.growth_range.contains(record.population_growth_pct)
            && self.variation.map_or(true, |v| v == record.variation)
    }
}

/// Records selected by one filter pass, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a CountryYearRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a CountryYearRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CountryYearRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Dataset {
    /// Select the records matching the given `FilterSpec`. Derived columns are never
    /// recomputed on the subset.
    pub fn filter(&self, spec: &FilterSpec) -> FilteredView<'_> {
        FilteredView {
            rows: self.records().iter().filter(|r| spec.matches(r)).collect(),
        }
    }
}

/// Values offered by the selectors, taken from the unfiltered dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub years: Vec<i32>,
    pub variations: Vec<Variation>,
    pub growth_bounds: GrowthRange,
    /// Distinct growth values, largest first
    pub growth_values: Vec<f64>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let variations: BTreeSet<Variation> =
            dataset.records().iter().map(|r| r.variation).collect();
        let mut growth_values: Vec<f64> = dataset
            .records()
            .iter()
            .map(|r| r.population_growth_pct)
            .collect();
        growth_values.sort_by(|a, b| b.total_cmp(a));
        growth_values.dedup();
        Self {
            countries: dataset.countries().into_iter().collect(),
            years: dataset.years().into_iter().collect(),
            variations: variations.into_iter().collect(),
            growth_bounds: GrowthRange::observed(dataset),
            growth_values,
        }
    }
}

/// Heading label for a country selection: `All` when every country is
/// selected, otherwise the selected names.
pub fn selection_label(dataset: &Dataset, spec: &FilterSpec) -> String {
    if spec.countries.is_empty() {
        "None".to_string()
    } else if spec.countries == dataset.countries() {
        "All".to_string()
    } else {
        spec.countries
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::three_country_output;

    #[test]
    fn test_default_spec_selects_everything() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset);
        let view = dataset.filter(&spec);
        assert_eq!(view.len(), dataset.len());
        assert_eq!(selection_label(&dataset, &spec), "All");
    }

    #[test]
    fn test_single_country() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset).with_countries(["Borduria"]);
        let view = dataset.filter(&spec);
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.country_name == "Borduria"));
        assert_eq!(selection_label(&dataset, &spec), "Borduria");

        let spec = spec.with_variation(Some(Variation::Decline));
        let view = dataset.filter(&spec);
        let years: Vec<i32> = view.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2014, 2015]);
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset).with_countries(Vec::<String>::new());
        let view = dataset.filter(&spec);
        assert!(view.is_empty());
        assert_eq!(selection_label(&dataset, &spec), "None");
    }

    #[test]
    fn test_unknown_country_matches_nothing() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset).with_countries(["Freedonia"]);
        assert!(dataset.filter(&spec).is_empty());
    }

    #[test]
    fn test_year_filter() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset).with_year(YearFilter::Specific(2015));
        let view = dataset.filter(&spec);
        let names: Vec<&str> = view.iter().map(|r| r.country_name.as_str()).collect();
        assert_eq!(names, vec!["Atlantis", "Borduria", "Carpania"]);
        assert!(view.iter().all(|r| r.year == 2015));

        let spec = spec.with_year(YearFilter::Specific(2013));
        assert!(dataset.filter(&spec).is_empty());
    }

    #[test]
    fn test_growth_range_is_inclusive() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset).with_growth_range(GrowthRange::new(-5.0, 2.0));
        let view = dataset.filter(&spec);
        let expected: Vec<&CountryYearRecord> = dataset
            .records()
            .iter()
            .filter(|r| r.population_growth_pct >= -5.0 && r.population_growth_pct <= 2.0)
            .collect();
        assert_eq!(view.rows(), expected.as_slice());
        assert!(view.iter().any(|r| r.population_growth_pct == -5.0));
        assert!(view.iter().any(|r| r.population_growth_pct == 2.0));
    }

    #[test]
    fn test_inverted_growth_range_is_empty() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset).with_growth_range(GrowthRange::new(5.0, -5.0));
        assert!(dataset.filter(&spec).is_empty());
    }

    #[test]
    fn test_observed_growth_range_keeps_extremes() {
        let dataset = three_country_output().dataset;
        let range = GrowthRange::observed(&dataset);
        assert_eq!(range, GrowthRange::new(-5.26, 10.0));
        assert!(range.contains(-5.26));
        assert!(range.contains(10.0));
    }

    #[test]
    fn test_filter_preserves_order_and_values() {
        let dataset = three_country_output().dataset;
        let spec = FilterSpec::all(&dataset).with_countries(["Carpania", "Atlantis"]);
        let view = dataset.filter(&spec);
        let keys: Vec<(&str, i32, f64)> = view
            .iter()
            .map(|r| (r.country_name.as_str(), r.year, r.population_growth_pct))
            .collect();
        // Growth is the dataset's, not recomputed from the subset.
        assert_eq!(
            keys,
            vec![
                ("Atlantis", 2014, 10.0),
                ("Atlantis", 2015, 10.0),
                ("Atlantis", 2016, 0.0),
                ("Carpania", 2014, 2.0),
                ("Carpania", 2015, 1.96),
                ("Carpania", 2016, 1.92),
            ]
        );
        assert_eq!(selection_label(&dataset, &spec), "Atlantis, Carpania");
    }

    #[test]
    fn test_year_filter_from_option() {
        assert_eq!(YearFilter::from(None), YearFilter::All);
        assert_eq!(YearFilter::from(Some(2020)), YearFilter::Specific(2020));
    }

    #[test]
    fn test_filter_options() {
        let dataset = three_country_output().dataset;
        let options = FilterOptions::from_dataset(&dataset);
        assert_eq!(options.countries, vec!["Atlantis", "Borduria", "Carpania"]);
        assert_eq!(options.years, vec![2014, 2015, 2016]);
        assert_eq!(options.variations, vec![Variation::Growth, Variation::Decline]);
        assert_eq!(options.growth_values.first(), Some(&10.0));
        assert_eq!(options.growth_values.last(), Some(&-5.26));
        assert_eq!(options.growth_values.len(), 8);
    }

    #[test]
    fn test_empty_dataset_filter() {
        let dataset = Dataset::default();
        let spec = FilterSpec::all(&dataset);
        assert_eq!(spec.growth_range, GrowthRange::unbounded());
        assert!(dataset.filter(&spec).is_empty());
    }
}
