//! Command implementations.

use std::fmt::Display;

use anyhow::{Context, bail};
use camino::Utf8Path;
use prosemetry_core::config::Config;
use prosemetry_core::markdown::strip_to_prose;
use prosemetry_core::{Engine, Lexicon};

pub mod compare;
pub mod detect;
pub mod info;
pub mod profile;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a file as prose: size-checked, markdown stripped for `.md`, and
/// rejected when nothing but whitespace remains.
pub fn read_prose(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    let text = if path.extension() == Some("md") {
        strip_to_prose(&content)
    } else {
        content
    };
    if text.trim().is_empty() {
        bail!("input is empty: {path}");
    }
    Ok(text)
}

/// Build the analysis engine from the configured lexicon extensions.
pub fn build_engine(config: &Config) -> anyhow::Result<Engine> {
    let lexicon = Lexicon::extended(&config.lexicon);
    Engine::new(&lexicon).context("failed to build analysis engine")
}

/// Horizontal rule used by the text reports.
pub(crate) fn rule(ch: char) -> String {
    ch.to_string().repeat(70)
}

/// Append one report line.
pub(crate) fn push_line(out: &mut String, line: impl Display) {
    out.push_str(&line.to_string());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join(name)).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn oversized_input_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_temp(&dir, "big.txt", "Twelve bytes");
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_temp(&dir, "blank.txt", "  \n\n\t ");
        let err = read_prose(&path, None).unwrap_err();
        assert!(err.to_string().contains("input is empty"));
    }

    #[test]
    fn markdown_is_stripped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_temp(&dir, "notes.md", "# Title\n\nSome *text*.\n\n```\ncode\n```\n");
        assert_eq!(read_prose(&path, None).unwrap(), "Some text.");
    }

    #[test]
    fn markdown_with_only_code_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_temp(&dir, "code.md", "```\nfn main() {}\n```\n");
        assert!(read_prose(&path, None).is_err());
    }

    #[test]
    fn push_line_appends_newline() {
        let mut out = String::new();
        push_line(&mut out, "TITLE");
        push_line(&mut out, format_args!("{}-{}", 1, 2));
        assert_eq!(out, "TITLE\n1-2\n");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input_file(Utf8Path::new("/no/such/file.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.txt"));
    }

    #[test]
    fn engine_picks_up_lexicon_extensions() {
        let mut config = Config::default();
        config.lexicon.transitions = Some(vec!["to be sure".to_string()]);
        let engine = build_engine(&config).unwrap();
        let result = engine
            .detect("To be sure, one. To be sure, two. To be sure, three.")
            .unwrap();
        assert!((result.metrics["transition_overuse"].score - 0.9).abs() < f64::EPSILON);
    }
}
