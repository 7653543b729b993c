// file: src/models/record.rs
// description: converted table row with synthetic NocoDB identity fields
// reference: NocoDB list response record layout

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const ID_KEY: &str = "Id";
pub const RECORD_ID_KEY: &str = "ncRecordId";
pub const RECORD_HASH_KEY: &str = "ncRecordHash";
pub const CREATED_AT_KEY: &str = "CreatedAt";
pub const UPDATED_AT_KEY: &str = "UpdatedAt";

const RESERVED_KEYS: [&str; 5] = [
    ID_KEY,
    RECORD_ID_KEY,
    RECORD_HASH_KEY,
    CREATED_AT_KEY,
    UPDATED_AT_KEY,
];

/// Column name to cell value, in header order. `None` marks a blank cell.
pub type Row = IndexMap<String, Option<String>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u64,
    pub nc_record_id: String,
    pub nc_record_hash: String,
    pub columns: Row,
    pub created_at: String,
    pub updated_at: String,
}

impl Record {
    /// Cell value for `column`; `None` when the column is absent or blank.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.columns.get(column).and_then(|v| v.as_deref())
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    fn shadowed_count(&self) -> usize {
        self.columns
            .keys()
            .filter(|k| RESERVED_KEYS.contains(&k.as_str()))
            .count()
    }
}

// Key order is Id, ncRecordId, ncRecordHash, columns, CreatedAt, UpdatedAt.
// Synthetic values always win; a source column named like one of those keys
// is left out of the output.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = RESERVED_KEYS.len() + self.columns.len() - self.shadowed_count();
        let mut map = serializer.serialize_map(Some(len))?;

        map.serialize_entry(ID_KEY, &self.id)?;
        map.serialize_entry(RECORD_ID_KEY, &self.nc_record_id)?;
        map.serialize_entry(RECORD_HASH_KEY, &self.nc_record_hash)?;

        for (column, value) in &self.columns {
            if !RESERVED_KEYS.contains(&column.as_str()) {
                map.serialize_entry(column, value)?;
            }
        }

        map.serialize_entry(CREATED_AT_KEY, &self.created_at)?;
        map.serialize_entry(UPDATED_AT_KEY, &self.updated_at)?;
        map.end()
    }
}
