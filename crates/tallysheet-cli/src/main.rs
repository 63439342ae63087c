//! tallysheet CLI - Timesheet consolidation
//!
//! Reads a timesheet CSV export, consolidates duplicate entries by
//! description, applies quarter-hour rounding, and prints a summary table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tallysheet_core::{build_report, resolve_columns, ReportOptions, Renderer, RoundingMode};
use tallysheet_parser::read_sheet;
use tallysheet_render::{CsvRenderer, JsonRenderer, MarkdownRenderer, TextRenderer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tallysheet")]
#[command(author, version, about = "Timesheet consolidation", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consolidate a timesheet export and print the summary table
    Combine {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,

        /// Disable rounding entirely
        #[arg(long, conflicts_with = "round_total")]
        no_round: bool,

        /// Round only the grand total instead of every entry
        #[arg(long)]
        round_total: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve the configured columns against a file's header and exit
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,
    },
}

/// Header names of the three logical columns
#[derive(Args)]
struct ColumnArgs {
    /// Header name of the category column
    #[arg(long, default_value = "Task")]
    task_column: String,

    /// Header name of the time column
    #[arg(long, default_value = "Hours")]
    time_column: String,

    /// Header name of the description column
    #[arg(long, default_value = "Notes")]
    notes_column: String,
}

impl ColumnArgs {
    fn into_options(self, rounding: RoundingMode) -> ReportOptions {
        ReportOptions::new()
            .task_column(self.task_column)
            .time_column(self.time_column)
            .notes_column(self.notes_column)
            .rounding(rounding)
    }
}

/// Output format for the combine subcommand
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Csv,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Combine {
            file,
            columns,
            no_round,
            round_total,
            format,
            output,
        } => {
            let rounding = if no_round {
                RoundingMode::None
            } else if round_total {
                RoundingMode::TotalOnly
            } else {
                RoundingMode::PerEntry
            };
            let options = columns.into_options(rounding);

            let sheet = read_sheet(&file)?;
            tracing::debug!(rows = sheet.rows.len(), "tokenized input");

            let summary = build_report(&sheet.header, &sheet.rows, &options)?;
            tracing::debug!(
                entries = summary.entries.len(),
                total = summary.total,
                "report built"
            );

            let rendered = match format {
                Format::Text => TextRenderer::new().render(&summary)?,
                Format::Markdown => MarkdownRenderer::new().render(&summary)?,
                Format::Csv => CsvRenderer::new().render(&summary)?,
                Format::Json => JsonRenderer::new().pretty().render(&summary)?,
            };

            match output {
                Some(path) => std::fs::write(&path, rendered)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{rendered}"),
            }
        }

        Commands::Check { file, columns } => {
            let options = columns.into_options(RoundingMode::PerEntry);
            let sheet = read_sheet(&file)?;
            let resolved = resolve_columns(&sheet.header, &options)?;

            println!("{}: column {}", options.task_column, resolved.task);
            println!("{}: column {}", options.time_column, resolved.time);
            println!("{}: column {}", options.notes_column, resolved.notes);
        }
    }

    Ok(())
}
