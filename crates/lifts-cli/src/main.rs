//! Lift Results Merger CLI
//!
//! Command-line tool for merging raw weightlifting attempt data with entry
//! registrations and emitting best-lift results in competition order.

use clap::{Parser, Subcommand};
use lifts_core::{
    best_results, export_results, load_attempts, load_registrations, sort_results,
    OutputFormat, RegistrationIndex,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lifts-cli")]
#[command(about = "Weightlifting best-lift merger", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge attempts with registrations and write sorted best results
    Merge {
        /// Path to the raw results dataset (csv, json, or legacy ts)
        #[arg(short, long)]
        results: PathBuf,

        /// Path to the entry registrations dataset
        #[arg(short, long)]
        entries: PathBuf,

        /// Output file path (overwritten wholesale)
        #[arg(short, long)]
        output: PathBuf,

        /// Output format (ts, json, or csv)
        #[arg(long, default_value = "ts")]
        format: String,
    },

    /// Merge and print the sorted best results to stdout
    Show {
        /// Path to the raw results dataset
        #[arg(short, long)]
        results: PathBuf,

        /// Path to the entry registrations dataset
        #[arg(short, long)]
        entries: PathBuf,

        /// Maximum number of rows to display
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Parse and display a single input dataset
    Parse {
        /// Path to the dataset file
        #[arg(short, long)]
        file: PathBuf,

        /// Dataset kind (attempts or entries)
        #[arg(short, long, default_value = "attempts")]
        kind: String,

        /// Dump the parsed records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> lifts_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge {
            results,
            entries,
            output,
            format,
        } => cmd_merge(&results, &entries, &output, &format),
        Commands::Show {
            results,
            entries,
            limit,
        } => cmd_show(&results, &entries, limit),
        Commands::Parse { file, kind, json } => cmd_parse(&file, &kind, json),
    }
}

/// Run the full pipeline: load, index, aggregate, sort, write
fn merge_pipeline(results_path: &PathBuf, entries_path: &PathBuf) -> lifts_core::Result<(Vec<lifts_core::BestResult>, RegistrationIndex, usize)> {
    let attempts = load_attempts(results_path)?;
    let registrations = load_registrations(entries_path)?;

    let index = RegistrationIndex::build(&registrations)?;
    let aggregation = best_results(&attempts, &index);

    let mut merged = aggregation.results;
    sort_results(&mut merged);

    Ok((merged, index, aggregation.skipped_attempts))
}

fn cmd_merge(
    results_path: &PathBuf,
    entries_path: &PathBuf,
    output: &PathBuf,
    format: &str,
) -> lifts_core::Result<()> {
    let format: OutputFormat = format.parse()?;
    let (merged, index, skipped) = merge_pipeline(results_path, entries_path)?;

    // Write last so no partial output survives an upstream failure
    export_results(output, &merged, format)?;

    println!("Wrote {} results to {}", merged.len(), output.display());
    println!("Registered competitors: {}", index.len());
    if index.overwritten() > 0 {
        eprintln!(
            "Warning: {} duplicate registration(s) overwritten (last record kept)",
            index.overwritten()
        );
    }
    if skipped > 0 {
        eprintln!("Warning: {} attempt(s) skipped (lifter not registered)", skipped);
    }

    Ok(())
}

fn cmd_show(results_path: &PathBuf, entries_path: &PathBuf, limit: Option<usize>) -> lifts_core::Result<()> {
    let (merged, _, _) = merge_pipeline(results_path, entries_path)?;

    let header = ["Lifter", "Category", "Entry", "Snatch", "CJ", "Total"];
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    let row_limit = limit.unwrap_or(merged.len());
    for result in merged.iter().take(row_limit) {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            result.lifter,
            result.weight_category,
            result.entry_total,
            result.best_snatch,
            result.best_cj,
            result.best_total,
        );
    }

    if merged.len() > row_limit {
        println!("... ({} more rows)", merged.len() - row_limit);
    }

    Ok(())
}

fn cmd_parse(file: &PathBuf, kind: &str, json: bool) -> lifts_core::Result<()> {
    match kind {
        "attempts" => {
            let attempts = load_attempts(file)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&attempts)?);
                return Ok(());
            }

            println!("File: {}", file.display());
            println!("Attempts: {}", attempts.len());
            println!();
            println!("Lifter\tBodyweight\tSnatch\tCJ\tTotal");
            for attempt in attempts.iter().take(10) {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    attempt.lifter, attempt.body_weight, attempt.snatch, attempt.cj, attempt.total
                );
            }
            if attempts.len() > 10 {
                println!("... ({} more rows)", attempts.len() - 10);
            }
        }
        "entries" => {
            let registrations = load_registrations(file)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&registrations)?);
                return Ok(());
            }

            println!("File: {}", file.display());
            println!("Registrations: {}", registrations.len());
            println!();
            println!("Name\tCategory\tEntry total");
            for reg in registrations.iter().take(10) {
                println!("{}\t{}\t{}", reg.name, reg.weight_category, reg.entry_total);
            }
            if registrations.len() > 10 {
                println!("... ({} more rows)", registrations.len() - 10);
            }
        }
        other => return Err(lifts_core::Error::UnknownKind(other.to_string())),
    }

    Ok(())
}
