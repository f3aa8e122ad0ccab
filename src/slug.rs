//! Slug generation for output file names.

/// Maximum length for generated slugs (file names)
const MAX_SLUG_LENGTH: usize = 30;

/// Convert a string to a URL-friendly slug (basic conversion).
///
/// Does NOT truncate - use `slugify_truncate` for length-limited slugs.
pub fn slugify(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    // Collapse consecutive dashes and trim leading/trailing dashes
    let mut result = String::new();
    let mut prev_dash = true;
    for c in slug.chars() {
        if c == '-' {
            if !prev_dash {
                result.push(c);
            }
            prev_dash = true;
        } else {
            result.push(c);
            prev_dash = false;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Convert a string to a slug no longer than `MAX_SLUG_LENGTH` bytes.
///
/// Truncates at word boundaries where possible. Falls back to `fallback` when
/// the title has no usable characters.
pub fn slugify_truncate(title: &str, fallback: &str) -> String {
    let mut result = slugify(title);

    if result.len() > MAX_SLUG_LENGTH {
        let mut cut = MAX_SLUG_LENGTH;
        while !result.is_char_boundary(cut) {
            cut -= 1;
        }
        match result[..cut].rfind('-') {
            Some(pos) if pos > 0 => result.truncate(pos),
            _ => result.truncate(cut),
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        return fallback.to_string();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Test 123!"), "test-123");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn test_slugify_truncate_long_input() {
        let long_title = "The Weekly Roundup of Generative Image Models and Agent Frameworks";
        let slug = slugify_truncate(long_title, "newsletter");
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.ends_with('-'));
        assert_eq!(slug, "the-weekly-roundup-of");
    }

    #[test]
    fn test_slugify_truncate_short_input() {
        assert_eq!(slugify_truncate("AI Weekly", "newsletter"), "ai-weekly");
    }

    #[test]
    fn test_slugify_truncate_multibyte() {
        let slug = slugify_truncate("ééééééééééééééééééééééééé", "x");
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.is_empty());
    }

    #[test]
    fn test_slugify_truncate_fallback() {
        assert_eq!(slugify_truncate("!!!", "prompt"), "prompt");
        assert_eq!(slugify_truncate("", "prompt"), "prompt");
    }
}
