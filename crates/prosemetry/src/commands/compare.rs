//! Compare command: side-by-side quality statistics for two files.


use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use prosemetry_core::{ComparisonRow, ProfileComparison};
use prosemetry_core::config::Config;
use tracing::{debug, instrument};

use super::{build_engine, push_line, read_prose, rule};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// The baseline file.
    pub file_a: Utf8PathBuf,

    /// The revised file; changes are reported relative to the baseline.
    pub file_b: Utf8PathBuf,
}

/// Profile two files and print their differences.
#[instrument(name = "cmd_compare", skip_all, fields(file_a = %args.file_a, file_b = %args.file_b))]
pub fn cmd_compare(args: CompareArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file_a = %args.file_a, file_b = %args.file_b, "executing compare command");

    let limit = config.input_limit();
    let first = read_prose(&args.file_a, limit)?;
    let second = read_prose(&args.file_b, limit)?;

    let comparison = build_engine(config)?
        .compare(&first, &second)
        .with_context(|| format!("failed to compare {} with {}", args.file_a, args.file_b))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print!("{}", render(&comparison));
    }
    Ok(())
}

/// Render the comparison table.
pub fn render(comparison: &ProfileComparison) -> String {
    let mut out = String::new();
    let heavy = rule('=');
    push_line(&mut out, &heavy);
    push_line(&mut out, "TEXT COMPARISON REPORT");
    push_line(&mut out, format_args!("{heavy}\n"));
    push_line(
        &mut out,
        format_args!(
            "{:<20} {:>15} {:>15} {:>15}",
            "Metric", "Text 1", "Text 2", "Change"
        ),
    );
    push_line(&mut out, rule('-'));
    for row in comparison.rows() {
        let ComparisonRow {
            label,
            delta,
            precision,
            unit,
        } = row;
        let width = 15 - unit.len();
        push_line(
            &mut out,
            format_args!(
                "{label:<20} {:>width$.precision$}{unit} {:>width$.precision$}{unit} \
                 {:>+width$.precision$}{unit}",
                delta.before, delta.after, delta.change
            ),
        );
    }
    push_line(&mut out, &heavy);
    out
}
