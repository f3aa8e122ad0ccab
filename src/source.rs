use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Where raw text comes from: a saved LLM response, a pasted document, or a pipe
#[derive(Debug, Clone)]
pub enum RawSource {
    File(PathBuf),
    Stdin,
}

impl RawSource {
    /// `-` or no path means stdin
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => RawSource::File(p),
            _ => RawSource::Stdin,
        }
    }

    /// Read the whole input as UTF-8 text
    pub async fn read(&self) -> Result<String> {
        match self {
            RawSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .context(format!("Failed to read: {:?}", path)),
            RawSource::Stdin => {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }

    /// Stem used to name output files when nothing better is known
    pub fn stem(&self) -> String {
        match self {
            RawSource::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "output".to_string()),
            RawSource::Stdin => "stdin".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert!(matches!(RawSource::from_arg(None), RawSource::Stdin));
        assert!(matches!(RawSource::from_arg(Some(PathBuf::from("-"))), RawSource::Stdin));
        assert!(matches!(
            RawSource::from_arg(Some(PathBuf::from("resp.txt"))),
            RawSource::File(_)
        ));
    }

    #[tokio::test]
    async fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.txt");
        std::fs::write(&path, "```json\n{}\n```").unwrap();

        let source = RawSource::File(path);
        assert_eq!(source.read().await.unwrap(), "```json\n{}\n```");
        assert_eq!(source.stem(), "response");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let source = RawSource::File(PathBuf::from("/definitely/not/here.txt"));
        assert!(source.read().await.is_err());
    }
}
