use serde::{Deserialize, Serialize};

/// Structured fields pulled out of a pasted prompt document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDocument {
    pub title: String,
    pub summary: String,
    /// Full `N. "..."` lines, number and quotes included
    pub example_prompts: Vec<String>,
    pub prompt_code: String,
}

impl PromptDocument {
    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.summary.is_empty()
            && self.example_prompts.is_empty()
            && self.prompt_code.is_empty()
    }

    /// Example prompts padded with empty slots up to `min` entries.
    ///
    /// Never truncates; the editor always shows at least `min` input rows.
    pub fn padded_examples(&self, min: usize) -> Vec<String> {
        let mut examples = self.example_prompts.clone();
        if examples.len() < min {
            examples.resize(min, String::new());
        }
        examples
    }

    /// Copy every field this document actually found onto `existing`.
    ///
    /// Fields that came back empty leave the editor's current values alone.
    pub fn merge_onto(&self, existing: &mut PromptDocument) {
        if !self.title.is_empty() {
            existing.title = self.title.clone();
        }
        if !self.summary.is_empty() {
            existing.summary = self.summary.clone();
        }
        if !self.example_prompts.is_empty() {
            existing.example_prompts = self.example_prompts.clone();
        }
        if !self.prompt_code.is_empty() {
            existing.prompt_code = self.prompt_code.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PromptDocument {
        PromptDocument {
            title: "Release Notes".to_string(),
            summary: "Turns commits into notes.".to_string(),
            example_prompts: vec!["1. \"Summarize v2\"".to_string()],
            prompt_code: "You are a release writer.".to_string(),
        }
    }

    #[test]
    fn test_default_is_empty() {
        assert!(PromptDocument::default().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_padded_examples() {
        let doc = sample();
        assert_eq!(doc.padded_examples(3), vec!["1. \"Summarize v2\"", "", ""]);
        assert_eq!(doc.padded_examples(0).len(), 1);
        assert_eq!(doc.example_prompts.len(), 1);
    }

    #[test]
    fn test_merge_keeps_existing_for_missing_fields() {
        let parsed = PromptDocument {
            title: "New Title".to_string(),
            ..Default::default()
        };
        let mut editor = sample();
        parsed.merge_onto(&mut editor);

        assert_eq!(editor.title, "New Title");
        assert_eq!(editor.summary, "Turns commits into notes.");
        assert_eq!(editor.example_prompts.len(), 1);
        assert_eq!(editor.prompt_code, "You are a release writer.");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("examplePrompts").is_some());
        assert!(json.get("promptCode").is_some());
    }
}
