//! Sorting and output serialization for merged best results

use crate::category::compare_categories;
use crate::error::{Error, Result};
use crate::model::BestResult;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// TypeScript module with an embedded array literal (the legacy shape)
    Ts,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ts" => Ok(OutputFormat::Ts),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Sort results in competition order
///
/// Three levels: weight category (Female first, ascending weight, plus
/// division last), then entry total ascending, then lifter name. Equal keys
/// keep their relative order.
pub fn sort_results(results: &mut [BestResult]) {
    results.sort_by(|a, b| {
        compare_categories(&a.weight_category, &b.weight_category)
            .then_with(|| a.entry_total.cmp(&b.entry_total))
            .then_with(|| a.lifter.cmp(&b.lifter))
    });
}

/// Render the TypeScript module text for a sorted result set
///
/// The timestamp is passed in rather than read from the clock so rendering
/// stays deterministic under test; `export_results` supplies `Utc::now()`.
pub fn render_module(results: &[BestResult], generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();

    out.push_str("// Generated by lift-results-merger\n");
    out.push_str(&format!(
        "// Last updated: {}\n\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));

    out.push_str("export interface LiftResult {\n");
    out.push_str("    lifter: string;\n");
    out.push_str("    weightCategory: string;\n");
    out.push_str("    entryTotal: number;\n");
    out.push_str("    bestSnatch: number;\n");
    out.push_str("    bestCJ: number;\n");
    out.push_str("    bestTotal: number;\n");
    out.push_str("}\n\n");

    out.push_str("export const liftingResults: LiftResult[] = [\n");
    let lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "  {{ lifter: \"{}\", weightCategory: \"{}\", entryTotal: {}, bestSnatch: {}, bestCJ: {}, bestTotal: {} }}",
                escape_ts(&r.lifter),
                escape_ts(&r.weight_category),
                r.entry_total,
                r.best_snatch,
                r.best_cj,
                r.best_total,
            )
        })
        .collect();
    out.push_str(&lines.join(",\n"));
    out.push_str("\n];\n");

    out
}

/// Write results to a writer in the given format
pub fn write_results<W: Write>(writer: &mut W, results: &[BestResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Ts => {
            writer.write_all(render_module(results, Utc::now()).as_bytes())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(results)?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for result in results {
                csv_writer.serialize(result).map_err(|e| Error::Csv {
                    path: "<output>".into(),
                    source: e,
                })?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}

/// Write results to a file, replacing any previous content
///
/// This is the pipeline's only side effect and runs last, so an upstream
/// failure never leaves partial output behind.
pub fn export_results<P: AsRef<Path>>(path: P, results: &[BestResult], format: OutputFormat) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_results(&mut writer, results, format)?;
    writer.flush()?;
    Ok(())
}

/// Escape a string for a double-quoted TS literal
fn escape_ts(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
