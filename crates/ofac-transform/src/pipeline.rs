//! The two-phase run: index once, then stream over parties.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use ofac_ingest::{SourceIndex, index_document, load_document};
use ofac_model::Element;
use tracing::{debug, info};

use crate::assembler::RecordAssembler;
use crate::error::{Result, TransformError};
use crate::options::TransformOptions;
use crate::stats::TransformStats;
use crate::writer::JsonlWriter;

/// Assemble and write a record for every party in `index`.
pub fn transform_index<W: Write>(
    index: &SourceIndex<'_>,
    options: &TransformOptions,
    sink: W,
) -> Result<TransformStats> {
    let start = Instant::now();
    let mut stats = TransformStats::default();
    let mut assembler = RecordAssembler::new(index, options);
    let mut writer = JsonlWriter::new(sink);
    let mut seen_ids: HashSet<String> = HashSet::new();

    for party in index.graph.parties() {
        stats.processed += 1;
        let Some(record) = assembler.assemble(party) else {
            stats.record_skipped();
            continue;
        };
        if !seen_ids.insert(record.record_id().to_string()) {
            stats.repeated_ids += 1;
            debug!(record_id = record.record_id(), "stable identifier already written");
        }
        writer.write_record(&record)?;
        stats.record_emitted(&record);
    }

    let (_, digest) = writer.finish()?;
    stats.output_sha256 = digest;
    stats.unmapped_feature_codes = assembler.missing().feature_types();
    stats.unmapped_document_codes = assembler.missing().document_types();
    stats.duration = start.elapsed();
    info!(
        processed = stats.processed,
        emitted = stats.emitted,
        skipped = stats.skipped,
        repeated_ids = stats.repeated_ids,
        features = stats.features,
        relationships = stats.relationships,
        identifiers = stats.identifiers,
        duration_ms = stats.duration.as_millis(),
        "transform complete"
    );
    Ok(stats)
}

/// Index `root` and transform it into `sink`.
pub fn transform_document<W: Write>(
    root: &Element,
    options: &TransformOptions,
    sink: W,
) -> Result<TransformStats> {
    let index = index_document(root);
    transform_index(&index, options, sink)
}

/// Read the export at `input` and write JSONL to `output`.
///
/// The output file is only created once the input has parsed, and it is
/// closed on every return path.
pub fn transform_file(
    input: &Path,
    output: &Path,
    options: &TransformOptions,
) -> Result<TransformStats> {
    info!(path = %input.display(), "loading source document");
    let document = load_document(input)?;
    let file = File::create(output).map_err(|source| TransformError::Output {
        path: output.to_path_buf(),
        source,
    })?;
    transform_document(document.root(), options, BufWriter::new(file))
}
