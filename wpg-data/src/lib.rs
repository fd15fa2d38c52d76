//! Data processing for population and GDP observations.
//!
//! ```text
//!  population + GDP RawObservations
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ builder  │  join on (country, year), derive per-capita & growth
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  immutable, ordered by (country_name, year)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  FilterSpec → FilteredView (borrowed, same order)
//!   └──────────┘
//!        │
//!        ▼
//!   charts / export
//! ```
//!
//! Building happens once per fetch. Filtering is a pure query and can be
//! repeated freely; it never recomputes derived columns.

pub mod builder;
pub mod charts;
pub mod dataset;
pub mod export;
pub mod filter;

#[cfg(test)]
pub(crate) mod fixtures;
