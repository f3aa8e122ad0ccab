use crate::models::{CheckResult, NewsletterDraft, Severity};

/// A hard validation check that runs as Rust code
pub struct CheckDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub validator: fn(&NewsletterDraft) -> CheckResult,
}

/// Collection of hard checks run before a draft is previewed
pub struct DraftChecklist {
    pub checks: Vec<CheckDefinition>,
}

impl Default for DraftChecklist {
    fn default() -> Self {
        Self {
            checks: vec![
                CheckDefinition {
                    name: "has_title",
                    description: "Draft must have a non-empty title",
                    validator: check_has_title,
                },
                CheckDefinition {
                    name: "has_sections",
                    description: "Draft must have at least one section",
                    validator: check_has_sections,
                },
                CheckDefinition {
                    name: "sections_have_bodies",
                    description: "Every section must have body text",
                    validator: check_sections_have_bodies,
                },
                CheckDefinition {
                    name: "no_empty_headings",
                    description: "Every section must have a heading",
                    validator: check_no_empty_headings,
                },
                CheckDefinition {
                    name: "images_have_prompts",
                    description: "Illustrated sections should record their image prompt",
                    validator: check_images_have_prompts,
                },
            ],
        }
    }
}

impl DraftChecklist {
    /// Run all checks against a draft
    pub fn run_all(&self, draft: &NewsletterDraft) -> Vec<CheckResult> {
        self.checks.iter().map(|check| (check.validator)(draft)).collect()
    }

    /// Failed checks that block publishing
    pub fn blocking_failures(results: &[CheckResult]) -> Vec<&CheckResult> {
        results.iter().filter(|r| r.is_blocking()).collect()
    }
}

fn check_has_title(draft: &NewsletterDraft) -> CheckResult {
    let passed = !draft.title.trim().is_empty();
    CheckResult {
        check_name: "has_title".to_string(),
        passed,
        message: if passed {
            format!("Title: {}", draft.title.trim())
        } else {
            "Draft has no title".to_string()
        },
        severity: Severity::Error,
    }
}

fn check_has_sections(draft: &NewsletterDraft) -> CheckResult {
    let passed = !draft.sections.is_empty();
    CheckResult {
        check_name: "has_sections".to_string(),
        passed,
        message: if passed {
            format!("Found {} sections", draft.sections.len())
        } else {
            "Draft has no sections".to_string()
        },
        severity: Severity::Error,
    }
}

fn check_sections_have_bodies(draft: &NewsletterDraft) -> CheckResult {
    let empty: Vec<usize> = draft
        .sections
        .iter()
        .enumerate()
        .filter(|(_, s)| s.body.trim().is_empty())
        .map(|(i, _)| i + 1)
        .collect();

    CheckResult {
        check_name: "sections_have_bodies".to_string(),
        passed: empty.is_empty(),
        message: if empty.is_empty() {
            "All sections have body text".to_string()
        } else {
            format!("Sections without body text: {:?}", empty)
        },
        severity: Severity::Error,
    }
}

fn check_no_empty_headings(draft: &NewsletterDraft) -> CheckResult {
    let count = draft
        .sections
        .iter()
        .filter(|s| s.heading.trim().is_empty())
        .count();

    CheckResult {
        check_name: "no_empty_headings".to_string(),
        passed: count == 0,
        message: if count == 0 {
            "All sections have headings".to_string()
        } else {
            format!("{} sections have no heading", count)
        },
        severity: Severity::Error,
    }
}

fn check_images_have_prompts(draft: &NewsletterDraft) -> CheckResult {
    let missing = draft
        .illustrated_sections()
        .filter(|s| s.image_prompt.as_deref().is_none_or(|p| p.trim().is_empty()))
        .count();

    CheckResult {
        check_name: "images_have_prompts".to_string(),
        passed: missing == 0,
        message: if missing == 0 {
            "All images record their prompt".to_string()
        } else {
            format!("{} images have no recorded prompt", missing)
        },
        severity: Severity::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsletterSection;

    fn section(heading: &str, body: &str) -> NewsletterSection {
        NewsletterSection {
            heading: heading.to_string(),
            body: body.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_draft_passes() {
        let draft = NewsletterDraft {
            title: "Weekly".to_string(),
            sections: vec![section("One", "Body")],
            ..Default::default()
        };
        let results = DraftChecklist::default().run_all(&draft);
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn test_empty_draft_blocks() {
        let results = DraftChecklist::default().run_all(&NewsletterDraft::default());
        let blocking = DraftChecklist::blocking_failures(&results);
        let names: Vec<&str> = blocking.iter().map(|r| r.check_name.as_str()).collect();
        assert_eq!(names, vec!["has_title", "has_sections"]);
    }

    #[test]
    fn test_missing_body_and_heading() {
        let draft = NewsletterDraft {
            title: "Weekly".to_string(),
            sections: vec![section("One", "Body"), section("", "  ")],
            ..Default::default()
        };
        let results = DraftChecklist::default().run_all(&draft);
        let blocking = DraftChecklist::blocking_failures(&results);
        assert_eq!(blocking.len(), 2);
        assert!(blocking[0].message.contains("[2]"));
    }

    #[test]
    fn test_image_without_prompt_is_a_warning() {
        let mut illustrated = section("One", "Body");
        illustrated.image_url = Some("https://img/1.png".to_string());
        let draft = NewsletterDraft {
            title: "Weekly".to_string(),
            sections: vec![illustrated],
            ..Default::default()
        };
        let results = DraftChecklist::default().run_all(&draft);
        let warning = results
            .iter()
            .find(|r| r.check_name == "images_have_prompts")
            .unwrap();
        assert!(!warning.passed);
        assert_eq!(warning.severity, Severity::Warning);
        assert!(DraftChecklist::blocking_failures(&results).is_empty());
    }
}
