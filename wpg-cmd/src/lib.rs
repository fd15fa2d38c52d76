//! Command implementations for the WPG CLI.
//!
//! Every subcommand fetches the indicator series once, builds the dataset,
//! applies the filter flags and renders the result.

use clap::Subcommand;

pub mod args;
pub mod charts;
pub mod export;
pub mod load;
pub mod summary;
pub mod table;

use args::{FilterArgs, SourceArgs};

#[derive(Subcommand)]
pub enum Command {
    /// Print the filtered dataset as a formatted table
    Table {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the filtered dataset as CSV
    Export {
        /// Output path for the CSV file
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write chart and map series for the filtered dataset as JSON
    Charts {
        /// Output path for the JSON file
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show selector options, declining countries and fetch problems
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Table { source, filter } => table::run_table(&source, &filter).await,
        Command::Export {
            output,
            source,
            filter,
        } => export::run_export(&source, &filter, &output).await,
        Command::Charts {
            output,
            source,
            filter,
        } => charts::run_charts(&source, &filter, &output).await,
        Command::Summary { source } => summary::run_summary(&source).await,
    }
}
