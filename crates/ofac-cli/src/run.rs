//! One transpiler run, from input path to written JSONL.

use std::path::Path;

use anyhow::{Context, Result, bail};
use ofac_transform::{TransformOptions, TransformStats, transform_file};
use tracing::info_span;

/// Transform the export at `input` into `output`.
///
/// # Errors
///
/// Fails when `input` is not a readable file, when it does not parse, or
/// when `output` cannot be written.
pub fn run_transform(
    input: &Path,
    output: &Path,
    options: &TransformOptions,
) -> Result<TransformStats> {
    let span = info_span!(
        "transform",
        input = %input.display(),
        output = %output.display(),
        data_source = %options.data_source
    );
    let _guard = span.enter();
    if !input.is_file() {
        bail!("input file not found: {}", input.display());
    }
    transform_file(input, output, options)
        .with_context(|| format!("transform {}", input.display()))
}
