//! Detect command: AI-pattern report for one file.

use std::collections::BTreeSet;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use prosemetry_core::config::Config;
use prosemetry_core::features::{
    abstraction, paragraphs, passive, transitions, uniformity, vocabulary,
};
use prosemetry_core::{ALL_FEATURES, AnalysisResult, Measurements, MetricResult};
use tracing::{debug, instrument};

use super::{build_engine, push_line, read_prose, rule};

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// File to analyze (`.md` files are stripped to prose first).
    pub file: Utf8PathBuf,

    /// Add fix suggestions to each flagged feature.
    #[arg(long)]
    pub detailed: bool,

    /// Features to run (comma-separated). Omit for all features.
    #[arg(long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,
}

/// Score a file for machine-generated writing patterns.
#[instrument(name = "cmd_detect", skip_all, fields(file = %args.file))]
pub fn cmd_detect(args: DetectArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, features = ?args.features, "executing detect command");

    let text = read_prose(&args.file, config.input_limit())?;

    let mut engine = build_engine(config)?;
    if let Some(ref names) = args.features {
        engine = engine.with_features(names.as_slice())?;
    }

    let result = engine
        .detect(&text)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&result, args.detailed || config.detailed));
    }

    Ok(())
}

/// Render the text report.
pub fn render(result: &AnalysisResult, detailed: bool) -> String {
    let mut out = String::new();
    let heavy = rule('=');

    push_line(&mut out, &heavy);
    push_line(
        &mut out,
        "AI WRITING PATTERN DETECTION REPORT".if_supports_color(Stream::Stdout, |t| t.bold()),
    );
    push_line(&mut out, format_args!("{heavy}\n"));

    push_line(
        &mut out,
        format_args!(
            "Overall AI Probability: {} ({:.1}%)",
            result.tier.label().if_supports_color(Stream::Stdout, |t| t.bold()),
            result.overall_score * 100.0
        ),
    );
    push_line(&mut out, format_args!("Recommendation: {}\n", result.recommendation));

    if let Some(stats) = result.text_stats {
        push_line(&mut out, "Text Statistics:");
        push_line(&mut out, format_args!("  - Paragraphs: {}", stats.paragraphs));
        push_line(&mut out, format_args!("  - Sentences: {}", stats.sentences));
        push_line(&mut out, format_args!("  - Words: {}\n", stats.words));
    }

    push_line(&mut out, "Detailed Analysis:");
    push_line(&mut out, rule('-'));

    let present = ALL_FEATURES
        .iter()
        .filter_map(|name| result.metrics.get(*name).map(|m| (*name, m)));
    for (index, (name, metric)) in present.enumerate() {
        push_line(
            &mut out,
            format_args!(
                "\n{}. {}: {}",
                index + 1,
                title(name),
                indicator(metric.score)
            ),
        );
        push_line(&mut out, format_args!("   {}", metric.detail));
        if detailed {
            for line in suggestions(name, metric) {
                push_line(&mut out, format_args!("   -> {line}"));
            }
        }
    }

    push_line(&mut out, format_args!("\n{heavy}"));
    out
}

fn title(name: &str) -> &'static str {
    match name {
        uniformity::NAME => "Sentence Uniformity",
        transitions::NAME => "Mechanical Transitions",
        abstraction::NAME => "Abstract Language",
        vocabulary::NAME => "Vocabulary Diversity",
        passive::NAME => "Passive Voice Usage",
        paragraphs::NAME => "Paragraph Opening Patterns",
        _ => "Unknown Feature",
    }
}

/// Concern label for a feature score.
pub fn indicator(score: f64) -> String {
    if score > 0.7 {
        "HIGH CONCERN"
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string()
    } else if score > 0.4 {
        "MODERATE CONCERN"
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string()
    } else {
        "OK".if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }
}

/// Fix suggestions for one feature, empty when nothing is flagged.
fn suggestions(name: &str, metric: &MetricResult) -> Vec<String> {
    let flagged = metric.score > 0.4;
    match (name, &metric.measurements) {
        (uniformity::NAME, _) if flagged => vec![
            "Issue: Sentences are too uniform in length".to_string(),
            "Fix: Mix short (5-10), medium (15-20), and long (25-35) word sentences".to_string(),
        ],
        (transitions::NAME, Some(Measurements::Transitions(m))) if !m.found.is_empty() => {
            let distinct: BTreeSet<&str> = m.found.iter().map(String::as_str).collect();
            vec![
                format!(
                    "Found transitions: {}",
                    distinct.into_iter().collect::<Vec<_>>().join(", ")
                ),
                "Fix: Replace with implicit connections or varied transitions".to_string(),
            ]
        }
        (abstraction::NAME, Some(Measurements::Abstraction(m))) if !m.found.is_empty() => {
            let mut top: Vec<_> = m.found.iter().collect();
            top.sort_by(|a, b| b.count.cmp(&a.count));
            let listed: Vec<String> = top
                .iter()
                .take(5)
                .map(|p| format!("{} ({}x)", p.phrase, p.count))
                .collect();
            vec![
                format!("Most frequent: {}", listed.join(", ")),
                "Fix: Replace with specific concepts, named theories, concrete examples"
                    .to_string(),
            ]
        }
        (vocabulary::NAME, _) if metric.score > 0.5 => vec![
            "Issue: Low vocabulary variety".to_string(),
            "Fix: Use more varied terminology, avoid word repetition".to_string(),
        ],
        (passive::NAME, _) if flagged => vec![
            "Issue: Excessive passive constructions".to_string(),
            "Fix: Mix with active voice where appropriate".to_string(),
        ],
        (paragraphs::NAME, _) if flagged => vec![
            "Issue: Repetitive paragraph openings".to_string(),
            "Fix: Vary how paragraphs begin".to_string(),
        ],
        _ => Vec::new(),
    }
}
