// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod batch;
mod progress;
mod report;

pub use batch::{BatchConverter, OUTPUT_EXTENSION};
pub use progress::{BatchObserver, ConsoleReporter};
pub use report::{BatchReport, BatchStats, ConvertedFile, FileFailure};
