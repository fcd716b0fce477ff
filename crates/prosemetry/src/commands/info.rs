//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use prosemetry_core::ALL_FEATURES;
use prosemetry_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    detailed: bool,
    extra_transitions: usize,
    extra_abstract_phrases: usize,
    extra_academic_words: usize,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let extra = |list: &Option<Vec<String>>| list.as_ref().map_or(0, Vec::len);
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            detailed: config.detailed,
            extra_transitions: extra(&config.lexicon.transitions),
            extra_abstract_phrases: extra(&config.lexicon.abstract_phrases),
            extra_academic_words: extra(&config.lexicon.academic_words),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    features: &'static [&'static str],
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        features: ALL_FEATURES,
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }
    if !package.homepage.is_empty() {
        println!("{}: {}", "Homepage".dimmed(), package.homepage.cyan());
    }

    println!();
    println!("{}", "Features".bold().underline());
    println!("{}", full_info.features.join(", "));

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match cfg.max_input_bytes {
        Some(limit) => println!("{}: {limit} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }
    println!("{}: {}", "Detailed reports".dimmed(), cfg.detailed);
    println!(
        "{}: {} transitions, {} abstract phrases, {} academic words",
        "Lexicon additions".dimmed(),
        cfg.extra_transitions,
        cfg.extra_abstract_phrases,
        cfg.extra_academic_words,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosemetry_core::DEFAULT_MAX_INPUT_BYTES;

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(
            cmd_info(
                InfoArgs::default(),
                false,
                &Config::default(),
                &ConfigSources::default()
            )
            .is_ok()
        );
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(
            cmd_info(
                InfoArgs::default(),
                true,
                &Config::default(),
                &ConfigSources::default()
            )
            .is_ok()
        );
    }

    #[test]
    fn test_config_info_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));
        assert_eq!(info.extra_transitions, 0);
    }

    #[test]
    fn test_config_info_counts_lexicon_additions() {
        let mut config = Config::default();
        config.disable_input_limit = true;
        config.lexicon.academic_words = Some(vec!["salient".into(), "heuristic".into()]);
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert_eq!(info.max_input_bytes, None);
        assert_eq!(info.extra_academic_words, 2);
    }
}
