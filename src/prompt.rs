//! Structured prompt document parsing.
//!
//! A prompt document is free-form Markdown pasted into the prompt-of-the-day
//! editor:
//!
//! ```text
//! # **Title**
//! Summary text...
//! **Three example prompts:**
//! 1. "first invocation"
//! 2. “second invocation”
//! ```
//!
//! followed by a fenced block holding the prompt itself. Each field is
//! located on its own; a missing or malformed section only empties that field.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::PromptDocument;
use crate::text::{find_fence_from, first_fenced_block};

/// `# **Title**` heading (preferred form)
static BOLD_TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^#[ \t]*\*\*(.+?)\*\*").expect("invalid BOLD_TITLE_PATTERN regex")
});

/// `# Title` heading; `##` and deeper never match
static PLAIN_TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^#[ \t]+(\S[^\r\n]*)").expect("invalid PLAIN_TITLE_PATTERN regex")
});

/// `**Three example prompts:**`, `**Three example user prompts:**`, ...
static EXAMPLE_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\*\*[ \t]*three[ \t]+example(?:[ \t]+[^\s*]+)*?[ \t]+prompts:[ \t]*\*\*")
        .expect("invalid EXAMPLE_MARKER_PATTERN regex")
});

/// `1. "..."` with straight or typographic quotes
static EXAMPLE_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\d+\.[ \t]+["“][^"“”\r\n]*["”]"#)
        .expect("invalid EXAMPLE_LINE_PATTERN regex")
});

/// Located title heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TitleMatch<'a> {
    text: &'a str,
    /// Byte offset where the heading match ends
    end: usize,
}

/// Parse a pasted prompt document into its four fields.
///
/// Never fails; a field that cannot be located comes back empty.
pub fn parse_prompt_document(raw: &str) -> PromptDocument {
    let title = find_title(raw);
    let marker = find_example_marker(raw);

    let doc = PromptDocument {
        title: title.map(|t| t.text.to_string()).unwrap_or_default(),
        summary: extract_summary(raw, title, marker.clone()).unwrap_or_default(),
        example_prompts: extract_examples(raw, marker).unwrap_or_default(),
        prompt_code: extract_prompt_code(raw).unwrap_or_default(),
    };

    debug!(
        "Parsed prompt document: title={} summary={} examples={} code={}",
        !doc.title.is_empty(),
        !doc.summary.is_empty(),
        doc.example_prompts.len(),
        !doc.prompt_code.is_empty()
    );
    doc
}

fn find_title(text: &str) -> Option<TitleMatch<'_>> {
    if let Some(caps) = BOLD_TITLE_PATTERN.captures(text) {
        return Some(TitleMatch {
            text: caps.get(1)?.as_str().trim(),
            end: caps.get(0)?.end(),
        });
    }

    let caps = PLAIN_TITLE_PATTERN.captures(text)?;
    let heading = caps.get(1)?;
    Some(TitleMatch {
        text: heading.as_str().trim(),
        end: heading.end(),
    })
}

fn find_example_marker(text: &str) -> Option<Range<usize>> {
    EXAMPLE_MARKER_PATTERN.find(text).map(|m| m.range())
}

/// Text between the title and the example marker.
///
/// Without a title everything before the marker is taken verbatim, leading
/// preamble and whitespace included.
fn extract_summary(
    text: &str,
    title: Option<TitleMatch<'_>>,
    marker: Option<Range<usize>>,
) -> Option<String> {
    let marker = marker?;
    match title {
        Some(title) if title.end <= marker.start => {
            Some(text[title.end..marker.start].trim().to_string())
        }
        Some(_) => None,
        None => Some(text[..marker.start].to_string()),
    }
}

/// Quoted, numbered lines between the marker and the next fence.
fn extract_examples(text: &str, marker: Option<Range<usize>>) -> Option<Vec<String>> {
    let marker = marker?;
    let segment_end = find_fence_from(text, marker.end).unwrap_or(text.len());
    let segment = &text[marker.start..segment_end];

    Some(
        EXAMPLE_LINE_PATTERN
            .find_iter(segment)
            .map(|m| m.as_str().to_string())
            .collect(),
    )
}

fn extract_prompt_code(text: &str) -> Option<String> {
    first_fenced_block(text).map(|block| block.content.to_string())
}
