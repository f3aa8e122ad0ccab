pub mod files;

pub use files::*;

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Trait for writing command results
#[async_trait]
pub trait OutputWriter: Send + Sync {
    /// Write one document named `slug` with file extension `extension`.
    ///
    /// Returns the path written to, if the writer produces files.
    async fn write_document(
        &self,
        slug: &str,
        extension: &str,
        content: &str,
    ) -> Result<Option<PathBuf>>;
}

/// Writer that prints to stdout
pub struct StdoutWriter;

#[async_trait]
impl OutputWriter for StdoutWriter {
    async fn write_document(
        &self,
        _slug: &str,
        _extension: &str,
        content: &str,
    ) -> Result<Option<PathBuf>> {
        println!("{}", content.trim_end());
        Ok(None)
    }
}
