//! Shared text-scanning helpers for fenced Markdown blocks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening marker of a JSON-tagged fence
pub const JSON_FENCE: &str = "```json";

/// Bare triple-backtick fence
pub const FENCE: &str = "```";

/// Matches the first complete fenced block. The info string is only taken when
/// the opening fence is followed by a newline, so ```` ```code``` ```` keeps `code`.
static FENCED_BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:([\w+.#-]*)[ \t]*\r?\n)?(.*?)```")
        .expect("invalid FENCED_BLOCK_PATTERN regex")
});

/// A fenced code block located inside a larger text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Byte offset of the opening fence
    pub start: usize,
    /// Byte offset just past the closing fence
    pub end: usize,
    /// Language tag on the opening fence, if any
    pub info: Option<&'a str>,
    /// Interior content, trimmed
    pub content: &'a str,
}

/// Find the first complete fenced block in `text`.
pub fn first_fenced_block(text: &str) -> Option<FencedBlock<'_>> {
    let caps = FENCED_BLOCK_PATTERN.captures(text)?;
    let whole = caps.get(0)?;
    let info = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|tag| !tag.is_empty());
    let content = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();

    Some(FencedBlock {
        start: whole.start(),
        end: whole.end(),
        info,
        content,
    })
}

/// Byte position of the next fence marker at or after `offset`.
pub fn find_fence_from(text: &str, offset: usize) -> Option<usize> {
    text.get(offset..)?.find(FENCE).map(|pos| offset + pos)
}

/// Trim whitespace and any byte order mark left by a paste or file read.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Remove at most one leading and one trailing fence from already-trimmed text.
///
/// A ```` ```json ```` opening is preferred over a bare fence. When the closing
/// fence is missing only the opening marker goes; no other fence is searched for.
pub fn strip_outer_fence(text: &str) -> &str {
    if let Some(rest) = text.strip_prefix(JSON_FENCE) {
        if text.ends_with(FENCE) && text.len() >= JSON_FENCE.len() + FENCE.len() {
            return rest[..rest.len() - FENCE.len()].trim();
        }
        return rest.trim();
    }

    if let Some(rest) = text.strip_prefix(FENCE) {
        if text.ends_with(FENCE) && text.len() >= FENCE.len() * 2 {
            return rest[..rest.len() - FENCE.len()].trim();
        }
        return rest.trim();
    }

    text
}
