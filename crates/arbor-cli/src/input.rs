//! JSON input documents and their extractor configurations.
//!
//! The CLI accepts the same tree in two shapes, distinguished by the JSON
//! top level: an object is a nested tree, an array is a flat record list
//! linked by a parent-id field. Both feed the same engine; only the
//! extractor configuration differs.

use serde::Deserialize;

use arbor::{ArborError, LayoutBuilder, LayoutEngine};

use crate::error::CliError;

/// A tree in nested form: each node carries its children inline.
#[derive(Debug, Deserialize)]
pub struct NestedNode {
    pub id: String,
    #[serde(default)]
    pub children: Vec<NestedNode>,
}

/// One record of a tree in flat form. The root is the first record with no
/// parent.
#[derive(Debug, Deserialize)]
pub struct FlatRecord {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
}

/// The accepted input shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TreeDocument {
    Nested(NestedNode),
    Flat(Vec<FlatRecord>),
}

/// Extractors over the nested shape: children live inline on the node.
pub fn nested_engine() -> Result<LayoutEngine<NestedNode, NestedNode>, ArborError> {
    LayoutBuilder::new()
        .with_root(|tree: &NestedNode| tree)
        .with_children(|node: &NestedNode, _: &NestedNode| node.children.iter().collect())
        .with_id(|node: &NestedNode| node.id.clone())
        .build()
}

/// Extractors over the flat shape: children are resolved by scanning the
/// record list for matching parent ids, in record order.
pub fn flat_engine(
    records: &[FlatRecord],
) -> Result<LayoutEngine<Vec<FlatRecord>, FlatRecord>, CliError> {
    let root_index = records
        .iter()
        .position(|record| record.parent.is_none())
        .ok_or(CliError::MissingRoot)?;

    let engine = LayoutBuilder::new()
        .with_root(move |records: &Vec<FlatRecord>| &records[root_index])
        .with_children(|record: &FlatRecord, records: &Vec<FlatRecord>| {
            records
                .iter()
                .filter(|candidate| candidate.parent.as_deref() == Some(record.id.as_str()))
                .collect()
        })
        .with_id(|record: &FlatRecord| record.id.clone())
        .build()?;

    Ok(engine)
}
