//! JSON extraction utilities for parsing LLM responses.
//!
//! Model output rarely arrives as clean JSON. The extractor handles the two
//! common shapes seen in practice:
//! 1. JSON wrapped in ```` ```json ... ``` ```` or bare ```` ``` ```` fences
//! 2. JSON surrounded by conversational prose (first opener to LAST closer)
//!
//! Localization is a plain bracket scan, not a balanced tokenizer. A stray
//! closing bracket after the real JSON body is swallowed into the result.

mod decode;

pub use decode::{ExtractError, decode_strict_json, validate_against_schema};

use std::ops::RangeInclusive;

use tracing::debug;

use crate::text::{strip_outer_fence, trim_text};

/// Top-level JSON container chosen during localization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Array,
    Object,
}

impl JsonShape {
    fn closer(self) -> char {
        match self {
            JsonShape::Array => ']',
            JsonShape::Object => '}',
        }
    }
}

/// Locate the top-level JSON container in `text`.
///
/// An array wins when its `[` comes at or before the first `{`. The span ends at
/// the last matching closer in the whole text.
pub fn localize(text: &str) -> Option<(JsonShape, RangeInclusive<usize>)> {
    let first_array = text.find('[');
    let first_object = text.find('{');

    let (shape, start) = match (first_array, first_object) {
        (Some(a), Some(o)) if a <= o => (JsonShape::Array, a),
        (Some(a), None) => (JsonShape::Array, a),
        (_, Some(o)) => (JsonShape::Object, o),
        (None, None) => return None,
    };

    let end = text.rfind(shape.closer())?;
    if end <= start {
        return None;
    }

    Some((shape, start..=end))
}

/// Extract the substring of an LLM response most likely to parse as JSON.
///
/// Never fails: when no container can be localized the trimmed, fence-stripped
/// text is returned as-is and the caller's JSON parser reports the problem.
pub fn extract_strict_json(raw: &str) -> &str {
    let trimmed = trim_text(raw);
    let unfenced = strip_outer_fence(trimmed);
    if unfenced.len() != trimmed.len() {
        debug!(
            "Stripped code fence from response ({} -> {} bytes)",
            trimmed.len(),
            unfenced.len()
        );
    }

    match localize(unfenced) {
        Some((shape, span)) => {
            debug!("Localized JSON {:?} at {:?}", shape, span);
            &unfenced[span]
        }
        None => unfenced,
    }
}
