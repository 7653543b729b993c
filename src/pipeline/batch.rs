// file: src/pipeline/batch.rs
// description: converts every matching file in the input directory, one at a time
// reference: scan, convert and export stages wired into a best-effort batch

use super::progress::BatchObserver;
use super::report::{BatchReport, ConvertedFile};
use crate::config::{Config, PathsConfig};
use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::exporter::JsonExporter;
use crate::repository::{FileScanner, ScannedFile};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

pub const OUTPUT_EXTENSION: &str = "json";

pub struct BatchConverter {
    paths: PathsConfig,
    converter: Converter,
}

impl BatchConverter {
    pub fn new(config: &Config) -> Self {
        Self {
            paths: config.paths.clone(),
            converter: Converter::new(config.records.clone()),
        }
    }

    pub fn with_dirs(mut self, input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        self.paths.input_dir = input_dir.into();
        self.paths.output_dir = output_dir.into();
        self
    }

    pub fn run(&self) -> Result<BatchReport> {
        self.run_with(&mut ())
    }

    /// Per-file failures land in the report and never stop the batch. Only a
    /// missing output directory or an unreadable input directory is an error.
    pub fn run_with<O: BatchObserver>(&self, observer: &mut O) -> Result<BatchReport> {
        let start = Instant::now();
        let exporter = JsonExporter::new(&self.paths.output_dir)?;
        let files = FileScanner::new(&self.paths.extension).scan_directory(&self.paths.input_dir)?;

        let mut report = BatchReport::default();

        for file in &files {
            observer.on_start(file);

            match self.convert_file(&exporter, file) {
                Ok(converted) => {
                    info!(
                        "Converted {} ({} records) to {}",
                        file.file_name,
                        converted.records,
                        converted.output.display()
                    );
                    observer.on_converted(file, &converted);
                    report.record_success(converted);
                }
                Err(e) => {
                    info!("Skipping {}: {}", file.file_name, e);
                    observer.on_failed(file, &e);
                    report.record_failure(file.file_name.clone(), &e);
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        observer.on_finish(&report);
        Ok(report)
    }

    fn convert_file(&self, exporter: &JsonExporter, file: &ScannedFile) -> Result<ConvertedFile> {
        let bytes =
            fs::read(&file.path).map_err(|source| ConvertError::file_operation(&file.path, source))?;

        let document = self.converter.convert(&bytes)?;
        let output = exporter.write(&file.output_name(OUTPUT_EXTENSION), &document)?;

        Ok(ConvertedFile {
            source: file.path.clone(),
            output,
            records: document.len(),
        })
    }
}
