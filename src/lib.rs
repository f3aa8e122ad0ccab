pub mod config;
pub mod extract;
pub mod models;
pub mod output;
pub mod prompt;
pub mod slug;
pub mod source;
pub mod templates;
pub mod text;

// Re-export main types
pub use config::{CliConfig, DraftChecklist, OutputConfig, OutputFormat};
pub use models::{CheckResult, NewsletterDraft, NewsletterSection, PromptDocument, Severity};
pub use output::{FileOutputWriter, OutputWriter, StdoutWriter};
pub use source::RawSource;

// Re-export the two parsing entry points
pub use extract::{ExtractError, decode_strict_json, extract_strict_json, validate_against_schema};
pub use prompt::parse_prompt_document;

// Re-export rendering and slug utilities
pub use slug::{slugify, slugify_truncate};
pub use templates::{render_newsletter, render_prompt_document};
