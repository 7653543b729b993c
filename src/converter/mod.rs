// file: src/converter/mod.rs
// description: turns one delimited table into a NocoDB list response document
// reference: row transform stage of the conversion pipeline

pub mod identity;
pub mod reader;

pub use identity::{generate_record_hash, generate_record_id};
pub use reader::TableReader;

use crate::config::RecordConfig;
use crate::error::Result;
use crate::models::{Document, Record, Row};
use std::io::Read;
use tracing::debug;

/// Pure transform from table bytes to a [`Document`]. Reading and writing
/// files is left to the caller.
pub struct Converter {
    settings: RecordConfig,
    reader: TableReader,
}

impl Converter {
    pub fn new(settings: RecordConfig) -> Self {
        Self {
            settings,
            reader: TableReader::new(),
        }
    }

    /// Fails with `MalformedInput` when the bytes are not UTF-8 or carry no
    /// header row.
    pub fn convert(&self, bytes: &[u8]) -> Result<Document> {
        let rows = self.reader.read_bytes(bytes)?;
        Ok(self.convert_rows(rows))
    }

    pub fn convert_reader<R: Read>(&self, mut input: R) -> Result<Document> {
        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer)?;
        self.convert(&buffer)
    }

    pub fn convert_rows(&self, rows: Vec<Row>) -> Document {
        let list: Vec<Record> = rows
            .into_iter()
            .zip(1u64..)
            .map(|(columns, id)| self.build_record(id, columns))
            .collect();

        debug!("Built {} records", list.len());
        Document::new(list, &self.settings)
    }

    fn build_record(&self, id: u64, columns: Row) -> Record {
        Record {
            id,
            nc_record_id: generate_record_id(),
            nc_record_hash: generate_record_hash(),
            columns,
            created_at: self.settings.created_at.clone(),
            updated_at: self.settings.updated_at.clone(),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(RecordConfig::default())
    }
}
