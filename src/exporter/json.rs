// file: src/exporter/json.rs
// description: json document writer for converted tables

use crate::error::{ConvertError, Result};
use crate::models::Document;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)
            .map_err(|source| ConvertError::file_operation(&output_dir, source))?;
        Ok(Self { output_dir })
    }

    /// Two-space indentation, non-ASCII written literally, no trailing newline.
    pub fn render(document: &Document) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }

    pub fn write(&self, file_name: &str, document: &Document) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let rendered = Self::render(document)?;

        fs::write(&path, rendered.as_bytes())
            .map_err(|source| ConvertError::file_operation(&path, source))?;

        debug!("Wrote {} records to {}", document.len(), path.display());
        Ok(path)
    }
}
