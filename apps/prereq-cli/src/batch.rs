//! Catalog-record batches: JSON in, JSON out

use prereq_engine::{suggestion_tree, PrereqExtractor, SequentialIds};
use serde::{Deserialize, Serialize};
use shared_types::{ParsedPrerequisites, RequirementNode};

/// One course-catalog record as exported from the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    #[serde(default)]
    pub prerequisites: String,
    #[serde(default)]
    pub corequisites: Option<String>,
}

/// Either the raw candidate bundle or the editor suggestion tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extraction {
    Parsed(ParsedPrerequisites),
    Tree(Option<RequirementNode>),
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordOutput {
    pub id: String,
    pub parsed: Extraction,
}

/// Extract one prerequisite/corequisite pair
pub fn extract_one(
    engine: &PrereqExtractor,
    prerequisites: &str,
    corequisites: Option<&str>,
    tree_ids: Option<&mut SequentialIds>,
) -> Extraction {
    let parsed = engine.extract(prerequisites, corequisites);
    match tree_ids {
        Some(ids) => Extraction::Tree(suggestion_tree(&parsed, ids)),
        None => Extraction::Parsed(parsed),
    }
}

/// Extract every record in order. With `trees` set, node IDs come from one
/// counter so they are unique across the batch.
pub fn run_batch(
    engine: &PrereqExtractor,
    records: &[CatalogRecord],
    trees: bool,
) -> Vec<RecordOutput> {
    let mut ids = SequentialIds::default();
    let outputs: Vec<RecordOutput> = records
        .iter()
        .map(|record| RecordOutput {
            id: record.id.clone(),
            parsed: extract_one(
                engine,
                &record.prerequisites,
                record.corequisites.as_deref(),
                trees.then_some(&mut ids),
            ),
        })
        .collect();

    tracing::info!(records = outputs.len(), "batch extraction complete");
    outputs
}

/// Parse a JSON array of catalog records
pub fn parse_records(json: &str) -> serde_json::Result<Vec<CatalogRecord>> {
    serde_json::from_str(json)
}
