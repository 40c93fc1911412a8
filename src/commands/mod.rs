//! CLI commands for grapho

pub mod dispatch;
pub mod mst;
pub mod path;

use std::path::Path;
use std::time::Instant;

use grapho_core::error::Result;
use grapho_core::graph::GraphDocument;
use grapho_core::trace_time;

/// Load a graph document, logging how long parsing took
pub fn load_document(path: &Path) -> Result<GraphDocument> {
    let start = Instant::now();
    let doc = GraphDocument::load(path)?;
    trace_time!(
        start,
        "load_document",
        nodes = doc.nodes.len(),
        edges = doc.edges.len()
    );
    Ok(doc)
}
