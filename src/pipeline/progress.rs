// file: src/pipeline/progress.rs
// description: per-file progress hooks and console notices for batch runs
// reference: uses colored helpers from utils::logging for user facing output

use super::report::{BatchReport, ConvertedFile};
use crate::error::ConvertError;
use crate::repository::ScannedFile;
use crate::utils::logging::{format_error, format_info, format_success};
use std::io::Write;

/// Hooks invoked by the batch driver as each file moves from unprocessed to
/// written or skipped. All methods default to no-ops.
pub trait BatchObserver {
    fn on_start(&mut self, _file: &ScannedFile) {}

    fn on_converted(&mut self, _file: &ScannedFile, _converted: &ConvertedFile) {}

    fn on_failed(&mut self, _file: &ScannedFile, _error: &ConvertError) {}

    fn on_finish(&mut self, _report: &BatchReport) {}
}

impl BatchObserver for () {}

/// Writes one line per event. Write errors on the sink are ignored.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BatchObserver for ConsoleReporter<W> {
    fn on_start(&mut self, file: &ScannedFile) {
        let _ = writeln!(self.out, "Converting {} to JSON...", file.file_name);
    }

    fn on_converted(&mut self, _file: &ScannedFile, converted: &ConvertedFile) {
        let name = converted
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| converted.output.display().to_string());
        let _ = writeln!(self.out, "{}", format_success(&format!("Created {}", name)));
    }

    fn on_failed(&mut self, file: &ScannedFile, error: &ConvertError) {
        let _ = writeln!(
            self.out,
            "{}",
            format_error(&format!("Error processing {}: {}", file.file_name, error))
        );
    }

    fn on_finish(&mut self, report: &BatchReport) {
        let stats = report.stats();
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Conversion complete!");
        let _ = writeln!(
            self.out,
            "{}",
            format_info(&format!(
                "{} converted, {} failed, {} records",
                stats.files_converted, stats.files_failed, stats.records_written
            ))
        );
    }
}
