// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod record;

pub use document::{Document, PageInfo, QueryStats};
pub use record::{Record, Row};
