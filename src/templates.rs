//! Markdown rendering for prompt documents and newsletter previews.
//!
//! Templates are embedded in the binary using include_str! and can be
//! overridden by dropping a file with the same name into a templates directory.

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::{NewsletterDraft, PromptDocument};

/// Bundled prompt document template
pub const DEFAULT_PROMPT_TEMPLATE: &str = include_str!("../templates/prompt.md.j2");

/// Bundled newsletter preview template
pub const DEFAULT_NEWSLETTER_TEMPLATE: &str = include_str!("../templates/newsletter.md.j2");

pub const PROMPT_TEMPLATE_NAME: &str = "prompt.md.j2";
pub const NEWSLETTER_TEMPLATE_NAME: &str = "newsletter.md.j2";

/// Template resolution result
#[derive(Debug)]
pub enum TemplateSource {
    /// Template loaded from a file path
    File(PathBuf),
    /// Template loaded from bundled default
    Bundled(&'static str),
}

impl TemplateSource {
    /// Get the template content
    pub fn content(&self) -> std::io::Result<String> {
        match self {
            TemplateSource::File(path) => std::fs::read_to_string(path),
            TemplateSource::Bundled(content) => Ok(content.to_string()),
        }
    }

    fn label(&self) -> String {
        match self {
            TemplateSource::File(path) => path.display().to_string(),
            TemplateSource::Bundled(_) => "<bundled>".to_string(),
        }
    }
}

/// Resolve a template, falling back to the bundled default when the
/// configured directory does not provide one.
pub fn resolve_template(templates_dir: Option<&Path>, name: &str) -> TemplateSource {
    if let Some(dir) = templates_dir {
        let path = dir.join(name);
        if path.exists() {
            debug!("Using template from {:?}", path);
            return TemplateSource::File(path);
        }
    }

    debug!("Using bundled template: {}", name);
    match name {
        NEWSLETTER_TEMPLATE_NAME => TemplateSource::Bundled(DEFAULT_NEWSLETTER_TEMPLATE),
        _ => TemplateSource::Bundled(DEFAULT_PROMPT_TEMPLATE),
    }
}

fn render<S: serde::Serialize>(source: &TemplateSource, ctx: S) -> Result<String> {
    let content = source
        .content()
        .context(format!("Failed to read template {}", source.label()))?;

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    env.render_str(&content, ctx)
        .context(format!("Failed to render template {}", source.label()))
}

/// Render a prompt document back into the Markdown layout the parser reads.
pub fn render_prompt_document(
    doc: &PromptDocument,
    templates_dir: Option<&Path>,
) -> Result<String> {
    let source = resolve_template(templates_dir, PROMPT_TEMPLATE_NAME);
    render(
        &source,
        context! {
            title => doc.title,
            summary => doc.summary,
            example_prompts => doc.example_prompts,
            prompt_code => doc.prompt_code,
        },
    )
}

/// Render a newsletter draft as a Markdown preview.
pub fn render_newsletter(
    draft: &NewsletterDraft,
    templates_dir: Option<&Path>,
) -> Result<String> {
    let source = resolve_template(templates_dir, NEWSLETTER_TEMPLATE_NAME);
    render(&source, context! { draft => draft })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsletterSection;
    use crate::prompt::parse_prompt_document;

    #[test]
    fn test_bundled_templates_not_empty() {
        assert!(!DEFAULT_PROMPT_TEMPLATE.is_empty());
        assert!(!DEFAULT_NEWSLETTER_TEMPLATE.is_empty());
    }

    #[test]
    fn test_resolve_template_bundled_fallback() {
        let source = resolve_template(Some(Path::new("nonexistent/dir")), PROMPT_TEMPLATE_NAME);
        assert!(matches!(source, TemplateSource::Bundled(_)));
        let source = resolve_template(None, NEWSLETTER_TEMPLATE_NAME);
        assert!(matches!(source, TemplateSource::Bundled(t) if t == DEFAULT_NEWSLETTER_TEMPLATE));
    }

    #[test]
    fn test_resolve_template_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROMPT_TEMPLATE_NAME), "Title: {{ title }}").unwrap();

        let doc = PromptDocument {
            title: "Custom".to_string(),
            ..Default::default()
        };
        let rendered = render_prompt_document(&doc, Some(dir.path())).unwrap();
        assert_eq!(rendered, "Title: Custom");
    }

    #[test]
    fn test_rendered_prompt_parses_back() {
        let doc = PromptDocument {
            title: "Trip Planner".to_string(),
            summary: "Plans a weekend trip.\n\nUses local events.".to_string(),
            example_prompts: vec![
                "1. \"Plan Lisbon\"".to_string(),
                "2. “Plan Kyoto”".to_string(),
            ],
            prompt_code: "You are a travel agent.\nBe concise.".to_string(),
        };

        let markdown = render_prompt_document(&doc, None).unwrap();
        assert!(markdown.starts_with("# **Trip Planner**"));
        assert_eq!(parse_prompt_document(&markdown), doc);
    }

    #[test]
    fn test_render_prompt_without_title_or_code() {
        let doc = PromptDocument {
            example_prompts: vec!["1. \"only\"".to_string()],
            ..Default::default()
        };
        let markdown = render_prompt_document(&doc, None).unwrap();
        assert!(!markdown.contains('#'));
        assert!(!markdown.contains("```"));
        assert_eq!(parse_prompt_document(&markdown), doc);
    }

    #[test]
    fn test_render_newsletter() {
        let draft = NewsletterDraft {
            title: "AI Weekly".to_string(),
            subtitle: Some("Issue 12".to_string()),
            intro: "Welcome back.".to_string(),
            sections: vec![NewsletterSection {
                heading: "Agents".to_string(),
                body: "Agents shipped.".to_string(),
                topic: Some("automation".to_string()),
                image_prompt: None,
                image_url: Some("https://img/agents.png".to_string()),
            }],
            closing: Some("See you next week.".to_string()),
        };

        let markdown = render_newsletter(&draft, None).unwrap();
        assert!(markdown.starts_with("# AI Weekly"));
        assert!(markdown.contains("_Issue 12_"));
        assert!(markdown.contains("## Agents"));
        assert!(markdown.contains("**Topic**: automation"));
        assert!(markdown.contains("![Agents](https://img/agents.png)"));
        assert!(markdown.contains("See you next week."));
    }
}
