use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::OutputWriter;

/// File-based output writer
///
/// Writes `<slug>.<ext>` into the output directory. An existing file is never
/// overwritten; a timestamp suffix is added instead.
pub struct FileOutputWriter {
    dir: PathBuf,
}

impl FileOutputWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .context("Failed to create output directory")
    }

    async fn is_free(path: &Path) -> bool {
        !fs::try_exists(path).await.unwrap_or(true)
    }

    async fn target_path(&self, slug: &str, extension: &str) -> PathBuf {
        let path = self.dir.join(format!("{}.{}", slug, extension));
        if Self::is_free(&path).await {
            return path;
        }

        let stamped = format!("{}-{}", slug, chrono::Utc::now().format("%Y%m%d-%H%M%S"));
        let path = self.dir.join(format!("{}.{}", stamped, extension));
        if Self::is_free(&path).await {
            return path;
        }

        // Same slug written more than once within a second
        let mut counter = 1u32;
        loop {
            let path = self.dir.join(format!("{}-{}.{}", stamped, counter, extension));
            if Self::is_free(&path).await {
                return path;
            }
            counter += 1;
        }
    }
}

#[async_trait]
impl OutputWriter for FileOutputWriter {
    async fn write_document(
        &self,
        slug: &str,
        extension: &str,
        content: &str,
    ) -> Result<Option<PathBuf>> {
        self.ensure_dir().await?;

        let path = self.target_path(slug, extension).await;
        let mut body = content.trim_end().to_string();
        body.push('\n');

        fs::write(&path, body)
            .await
            .context(format!("Failed to write {:?}", path))?;

        info!("Wrote {:?}", path);
        Ok(Some(path))
    }
}
