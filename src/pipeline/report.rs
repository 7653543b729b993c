// file: src/pipeline/report.rs
// description: outcome summary of a batch conversion run
// reference: per-file results and aggregate statistics

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    pub files_converted: usize,
    pub files_failed: usize,
    pub records_written: usize,
    pub duration_ms: u64,
}

impl BatchStats {
    pub fn success_rate(&self) -> f64 {
        let total = self.files_converted + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_converted as f64 / total as f64) * 100.0
    }

    pub fn records_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.records_written as f64 * 1000.0 / self.duration_ms as f64
    }
}

/// Everything a caller needs to check a run without reading console text.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failures: Vec<FileFailure>,
    pub duration_ms: u64,
}

impl BatchReport {
    pub fn record_success(&mut self, file: ConvertedFile) {
        self.converted.push(file);
    }

    pub fn record_failure(&mut self, file_name: impl Into<String>, error: impl ToString) {
        self.failures.push(FileFailure {
            file_name: file_name.into(),
            error: error.to_string(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn stats(&self) -> BatchStats {
        BatchStats {
            files_converted: self.converted.len(),
            files_failed: self.failures.len(),
            records_written: self.converted.iter().map(|f| f.records).sum(),
            duration_ms: self.duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_stats_calculations() {
        let stats = BatchStats {
            files_converted: 9,
            files_failed: 1,
            records_written: 500,
            duration_ms: 250,
        };

        assert_eq!(stats.success_rate(), 90.0);
        assert_eq!(stats.records_per_second(), 2000.0);
    }

    #[test]
    fn test_batch_stats_empty() {
        let stats = BatchStats::default();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.records_per_second(), 0.0);
    }

    #[test]
    fn test_report_aggregates() {
        let mut report = BatchReport::default();
        report.record_success(ConvertedFile {
            source: PathBuf::from("csv/a.csv"),
            output: PathBuf::from("json/a.json"),
            records: 3,
        });
        report.record_success(ConvertedFile {
            source: PathBuf::from("csv/b.csv"),
            output: PathBuf::from("json/b.json"),
            records: 4,
        });
        report.record_failure("c.csv", "Malformed input: missing header row");

        let stats = report.stats();
        assert!(!report.is_clean());
        assert_eq!(stats.files_converted, 2);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.records_written, 7);
        assert_eq!(report.failures[0].file_name, "c.csv");
    }
}
