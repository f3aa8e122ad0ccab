use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub parser: ParserConfig,
    pub extract: ExtractConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Minimum number of example prompt slots shown by the editor
    pub min_example_slots: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// JSON Schema every extracted value must satisfy
    pub schema: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory holding `prompt.md.j2` / `newsletter.md.j2` overrides
    pub templates_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write results into this directory instead of stdout
    pub dir: Option<PathBuf>,
    /// Format for structured results
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// File extension for structured output
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Serialize a value in this format
    pub fn to_string_pretty<T: Serialize>(self, value: &T) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_example_slots: 3,
        }
    }
}

impl CliConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Default config location: `~/.config/newsletter-forge/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("newsletter-forge").join("config.yaml"))
    }

    /// Load configuration, falling back to the user config file and then defaults
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) if p.exists() => return Self::from_file(p),
            Some(p) => debug!("Config file {:?} not found, trying user config", p),
            None => {}
        }

        match Self::default_path() {
            Some(p) if p.exists() => {
                debug!("Using config from {:?}", p);
                Self::from_file(&p)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.parser.min_example_slots, 3);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.extract.schema.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: CliConfig = serde_yaml::from_str("output:\n  format: yaml\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert_eq!(config.parser.min_example_slots, 3);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "parser:\n  min_example_slots: 5\nrender:\n  templates_dir: ./templates\n",
        )
        .unwrap();

        let config = CliConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.parser.min_example_slots, 5);
        assert_eq!(config.render.templates_dir, Some(PathBuf::from("./templates")));
    }

    #[test]
    fn test_missing_explicit_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load_or_default(Some(&dir.path().join("nope.yaml"))).is_ok());
    }

    #[test]
    fn test_output_format_serialization() {
        let value = serde_json::json!({"title": "x"});
        assert!(OutputFormat::Json.to_string_pretty(&value).unwrap().contains("\"title\""));
        assert!(OutputFormat::Yaml.to_string_pretty(&value).unwrap().contains("title: x"));
    }
}
