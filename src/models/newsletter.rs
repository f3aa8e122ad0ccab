use serde::{Deserialize, Serialize};

/// Newsletter draft as returned by the generation model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterDraft {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, alias = "introduction")]
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<NewsletterSection>,
    #[serde(default, alias = "outro")]
    pub closing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterSection {
    #[serde(default, alias = "title")]
    pub heading: String,
    #[serde(default, alias = "content")]
    pub body: String,
    /// Topic the section was generated for
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default, alias = "imagePrompt")]
    pub image_prompt: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl NewsletterDraft {
    /// Sections that carry an image
    pub fn illustrated_sections(&self) -> impl Iterator<Item = &NewsletterSection> {
        self.sections.iter().filter(|s| s.image_url.is_some())
    }
}
