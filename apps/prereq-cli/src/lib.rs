//! Prerequisite extraction CLI
//!
//! Runs the heuristic extractor over literal text, stdin, or a JSON batch of
//! course-catalog records and prints candidate suggestions as JSON.

pub mod batch;

pub use batch::{extract_one, parse_records, run_batch, CatalogRecord, Extraction, RecordOutput};
