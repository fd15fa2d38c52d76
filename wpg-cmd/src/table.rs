//! Formatted table output.

use crate::args::{FilterArgs, SourceArgs};
use crate::load::load_dataset;
use std::io::{self, Write};
use wpg_data::filter::{selection_label, FilteredView};
use wpg_utils::format::{format_currency, format_currency_cents, format_pct, format_thousands};

/// Printed instead of a table when the filters match nothing.
pub const NO_DATA_NOTICE: &str = "No data found for the selected filters.";

const HEADERS: [&str; 9] = [
    "Country",
    "Year",
    "Population",
    "GDP",
    "GDP per capita",
    "GDP growth",
    "Population growth",
    "Variation",
    "ISO3",
];

pub async fn run_table(source: &SourceArgs, filter: &FilterArgs) -> anyhow::Result<()> {
    let loaded = load_dataset(source).await?;
    let spec = filter.to_spec(&loaded.dataset);
    let view = loaded.dataset.filter(&spec);
    let label = selection_label(&loaded.dataset, &spec);
    let stdout = io::stdout();
    render_table(&view, &label, &mut stdout.lock())?;
    Ok(())
}

/// Write the view as an aligned text table under a heading naming the selection.
pub fn render_table<W: Write>(view: &FilteredView<'_>, label: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "Population & GDP ({})", label)?;
    if view.is_empty() {
        writeln!(out, "{}", NO_DATA_NOTICE)?;
        return Ok(());
    }

    let rows: Vec<[String; 9]> = view
        .iter()
        .map(|r| {
            [
                r.country_name.clone(),
                r.year.to_string(),
                format_thousands(r.population),
                format_currency(r.gdp),
                format_currency_cents(r.gdp_per_capita()),
                format_pct(r.gdp_growth_pct),
                format_pct(r.population_growth_pct),
                r.variation.to_string(),
                r.iso3.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!("{:<w$}", h, w = w))
        .collect();
    writeln!(out, "{}", header.join(" | ").trim_end())?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| match i {
                // text columns left, numbers right
                0 | 7 | 8 => format!("{:<w$}", cell, w = w),
                _ => format!("{:>w$}", cell, w = w),
            })
            .collect();
        writeln!(out, "{}", cells.join(" | ").trim_end())?;
    }
    writeln!(out, "{} rows", rows.len())?;
    Ok(())
}
