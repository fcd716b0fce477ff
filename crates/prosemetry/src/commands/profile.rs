//! Profile command: descriptive quality statistics for one file.


use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use prosemetry_core::QualityProfile;
use prosemetry_core::config::Config;
use prosemetry_core::profile::WordCount;
use tracing::{debug, instrument};

use super::{build_engine, push_line, read_prose, rule};

/// Entries shown in each most-frequent list of the text report.
const SHOWN_WORDS: usize = 5;

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// File to analyze (`.md` files are stripped to prose first).
    pub file: Utf8PathBuf,
}

/// Print sentence, vocabulary, transition, voice and readability statistics.
#[instrument(name = "cmd_profile", skip_all, fields(file = %args.file))]
pub fn cmd_profile(args: ProfileArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing profile command");

    let text = read_prose(&args.file, config.input_limit())?;
    let profile = build_engine(config)?
        .profile(&text)
        .with_context(|| format!("failed to profile {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", render(&profile));
    }
    Ok(())
}

/// Qualitative label for a type-token ratio.
pub fn diversity_label(ttr: f64) -> &'static str {
    if ttr > 0.55 {
        "Excellent diversity"
    } else if ttr > 0.45 {
        "Good diversity"
    } else if ttr > 0.35 {
        "Moderate diversity"
    } else {
        "Low diversity - consider varying vocabulary"
    }
}

fn section(out: &mut String, name: &str) {
    push_line(out, format_args!("\n{}", name.if_supports_color(Stream::Stdout, |t| t.bold())));
    push_line(out, rule('-'));
}

fn word_list(out: &mut String, words: &[WordCount]) {
    for entry in words.iter().take(SHOWN_WORDS) {
        push_line(out, format_args!("  {:15} {:3}x", entry.word, entry.count));
    }
}

/// Render the text report.
pub fn render(profile: &QualityProfile) -> String {
    let mut out = String::new();
    let heavy = rule('=');
    push_line(&mut out, &heavy);
    push_line(&mut out, "TEXT QUALITY ANALYSIS REPORT");
    push_line(&mut out, &heavy);

    if let Some(ref s) = profile.sentence_stats {
        section(&mut out, "SENTENCE STATISTICS");
        push_line(&mut out, format_args!("Total Sentences: {}", s.count));
        push_line(&mut out, format_args!("Length Range: {}-{} words", s.min, s.max));
        push_line(&mut out, format_args!("Mean Length: {:.2} words", s.mean));
        push_line(&mut out, format_args!("Median Length: {:.2} words", s.median));
        push_line(&mut out, format_args!("Standard Deviation: {:.2} words", s.stdev));
        push_line(&mut out, "\nLength Distribution:");
        let d = &s.distribution;
        push_line(
            &mut out,
            format_args!("  Short (<12 words):  {:3} ({:5.1}%)", d.short, d.short_pct),
        );
        push_line(
            &mut out,
            format_args!("  Medium (12-22):     {:3} ({:5.1}%)", d.medium, d.medium_pct),
        );
        push_line(
            &mut out,
            format_args!("  Long (>22 words):   {:3} ({:5.1}%)", d.long, d.long_pct),
        );
    }

    if let Some(ref v) = profile.vocabulary {
        section(&mut out, "VOCABULARY RICHNESS");
        push_line(&mut out, format_args!("Total Words: {}", v.total_words));
        push_line(&mut out, format_args!("Unique Words: {}", v.unique_words));
        push_line(
            &mut out,
            format_args!(
                "Type-Token Ratio: {:.3} ({})",
                v.type_token_ratio,
                diversity_label(v.type_token_ratio)
            ),
        );
        push_line(&mut out, format_args!("Lexical Density: {:.3}", v.lexical_density));
        push_line(&mut out, "\nMost Frequent Words:");
        word_list(&mut out, &v.most_common);
    }

    if let Some(ref a) = profile.academic_vocabulary {
        section(&mut out, "ACADEMIC VOCABULARY");
        push_line(
            &mut out,
            format_args!(
                "Academic Words: {} ({:.2}% of total)",
                a.academic_word_count, a.percentage
            ),
        );
        if !a.top_academic_words.is_empty() {
            push_line(&mut out, "Top Academic Words Used:");
            word_list(&mut out, &a.top_academic_words);
        }
    }

    let t = &profile.transitions;
    section(&mut out, "TRANSITION WORDS");
    push_line(
        &mut out,
        format_args!(
            "Total Transitions: {} ({:.2} per 100 words)",
            t.total_transitions, t.density_per_100_words
        ),
    );
    push_line(&mut out, "By Category:");
    for c in &t.by_category {
        push_line(&mut out, format_args!("  {:15} {:3}", capitalize(&c.category), c.count));
    }

    let p = &profile.passive_voice;
    section(&mut out, "PASSIVE VOICE");
    push_line(&mut out, format_args!("Passive Constructions: {}", p.passive_constructions));
    push_line(&mut out, format_args!("Per Sentence: {:.2}", p.per_sentence));
    push_line(&mut out, format_args!("Percentage: {:.1}%", p.percentage));
    if p.percentage > 40.0 {
        push_line(
            &mut out,
            "High passive voice usage - consider more active constructions"
                .if_supports_color(Stream::Stdout, |t| t.yellow()),
        );
    } else if p.percentage < 20.0 {
        push_line(
            &mut out,
            "Good balance of voice".if_supports_color(Stream::Stdout, |t| t.green()),
        );
    }

    if let Some(ref r) = profile.readability {
        section(&mut out, "READABILITY METRICS");
        push_line(
            &mut out,
            format_args!("Average Sentence Length: {:.2} words", r.avg_sentence_length),
        );
        push_line(
            &mut out,
            format_args!("Average Word Length: {:.2} characters", r.avg_word_length),
        );
        push_line(
            &mut out,
            format_args!(
                "Complex Words: {} ({:.1}%)",
                r.complex_words, r.complex_word_pct
            ),
        );
    }

    push_line(&mut out, format_args!("\n{heavy}"));
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosemetry_core::profile as profile_text;

    #[test]
    fn diversity_bands() {
        assert_eq!(diversity_label(0.6), "Excellent diversity");
        assert_eq!(diversity_label(0.55), "Good diversity");
        assert_eq!(diversity_label(0.45), "Moderate diversity");
        assert_eq!(diversity_label(0.35), "Low diversity - consider varying vocabulary");
    }

    #[test]
    fn capitalizes_category_names() {
        assert_eq!(capitalize("adversative"), "Adversative");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn report_has_every_section() {
        let profile = profile_text(
            "The committee reviewed the proposal. However, the budget was rejected. \
             Therefore the team rewrote the plan and submitted it again next week.",
        )
        .unwrap();
        let report = render(&profile);
        for heading in [
            "SENTENCE STATISTICS",
            "VOCABULARY RICHNESS",
            "ACADEMIC VOCABULARY",
            "TRANSITION WORDS",
            "PASSIVE VOICE",
            "READABILITY METRICS",
        ] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("Total Sentences: 3"));
        assert!(report.contains("Passive Constructions: 1"));
    }

    #[test]
    fn heavy_passive_gets_a_warning() {
        let profile = profile_text(
            "The data were collected. The model was trained. The results were reported.",
        )
        .unwrap();
        assert!(render(&profile).contains("High passive voice usage"));
    }
}
