//! Core types and World Bank API client for population and GDP series.
//!
//! The parsing side (countries, indicators, raw observations) has no network
//! dependency. The HTTP fetcher lives behind the `api` feature.

#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod country;
pub mod error;
pub mod indicator;
pub mod observation;
pub mod quality;
pub mod year_range;
