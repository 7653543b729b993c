// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod assets;
pub mod config;
pub mod converter;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use assets::IconGenerator;
pub use config::{Config, IconConfig, PathsConfig, RecordConfig};
pub use converter::{Converter, TableReader};
pub use error::{ConvertError, Result};
pub use exporter::JsonExporter;
pub use models::{Document, PageInfo, QueryStats, Record, Row};
pub use pipeline::{
    BatchConverter, BatchObserver, BatchReport, BatchStats, ConsoleReporter, ConvertedFile,
    FileFailure,
};
pub use repository::{FileScanner, ScannedFile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _converter = Converter::new(config.records.clone());
        let _batch = BatchConverter::new(&config);
        let _icons = IconGenerator::new(config.icons);
    }
}
