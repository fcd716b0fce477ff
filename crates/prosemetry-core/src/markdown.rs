//! Markdown-to-prose stripping for `.md` inputs.
//!
//! Uses pulldown-cmark for CommonMark parsing. Block boundaries become blank
//! lines so the segmenter still sees one paragraph per prose block.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

const BLOCK_BREAK: &str = "\n\n";

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - Inline code
/// - HTML
/// - YAML frontmatter
/// - Headings (section titles are not prose)
/// - Tables
///
/// Preserves:
/// - Paragraph breaks, as blank lines
/// - Link text (the visible part)
/// - Blockquote and list item text, one block per item
/// - Emphasis/strong text (without markers)
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::BlockQuote(_))
                if skip_depth == 0 =>
            {
                block_break(&mut result);
            }

            _ => {}
        }
    }

    let trimmed_len = result.trim_end().len();
    result.truncate(trimmed_len);
    result
}

fn block_break(result: &mut String) {
    let trimmed_len = result.trim_end_matches([' ', '\t']).len();
    result.truncate(trimmed_len);
    if !result.is_empty() && !result.ends_with(BLOCK_BREAK) {
        result.push_str(BLOCK_BREAK);
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text;
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
