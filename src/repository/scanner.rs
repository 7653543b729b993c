// file: src/repository/scanner.rs
// description: input directory listing filtered by file extension
// reference: https://docs.rs/walkdir

use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    suffix: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub file_name: String,
    /// File name with the matched extension removed.
    pub stem: String,
}

impl ScannedFile {
    pub fn output_name(&self, extension: &str) -> String {
        format!("{}.{}", self.stem, extension)
    }
}

impl FileScanner {
    pub fn new(extension: &str) -> Self {
        Self {
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    /// Lists regular files directly inside `root` whose name ends with the
    /// configured extension, sorted by file name.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself is unreadable; nothing to convert.
                Err(e) if e.depth() == 0 => {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                    return Err(ConvertError::file_operation(root, source));
                }
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                debug!("Skipping non UTF-8 file name: {}", entry.path().display());
                continue;
            };

            let Some(stem) = self.strip_suffix(&file_name) else {
                debug!("Skipping file: {}", entry.path().display());
                continue;
            };

            files.push(ScannedFile {
                path: entry.path().to_path_buf(),
                stem: stem.to_string(),
                file_name,
            });
        }

        info!("Found {} files matching *{}", files.len(), self.suffix);
        Ok(files)
    }

    fn strip_suffix<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name.strip_suffix(self.suffix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.csv"), "x\n1\n").unwrap();
        fs::write(temp.path().join("a.csv"), "x\n").unwrap();
        fs::write(temp.path().join("notes.txt"), "skip").unwrap();
        fs::write(temp.path().join("upper.CSV"), "skip").unwrap();
        fs::create_dir(temp.path().join("nested.csv")).unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("deep.csv"), "x\n").unwrap();

        let scanner = FileScanner::new("csv");
        let files = scanner.scan_directory(temp.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
        assert_eq!(files[1].stem, "b");
        assert_eq!(files[1].path, temp.path().join("b.csv"));
    }

    #[test]
    fn test_output_name() {
        let file = ScannedFile {
            path: PathBuf::from("csv/report.2024.csv"),
            file_name: "report.2024.csv".to_string(),
            stem: "report.2024".to_string(),
        };
        assert_eq!(file.output_name("json"), "report.2024.json");
    }

    #[test]
    fn test_bare_extension_name_matches_with_empty_stem() {
        assert_eq!(FileScanner::new(".csv").strip_suffix(".csv"), Some(""));
        assert_eq!(FileScanner::new("csv").strip_suffix("data.csv"), Some("data"));
        assert_eq!(FileScanner::new("csv").strip_suffix("datacsv"), None);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let temp = TempDir::new().unwrap();
        let scanner = FileScanner::new("csv");
        assert!(scanner.scan_directory(&temp.path().join("absent")).is_err());
    }
}
