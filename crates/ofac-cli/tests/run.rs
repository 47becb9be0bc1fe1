//! Tests for a full transpiler run.

use std::fs;
use std::path::{Path, PathBuf};

use ofac_cli::run::run_transform;
use ofac_transform::TransformOptions;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../ofac-transform/tests/fixtures/sample_advanced.xml")
}

#[test]
fn writes_one_line_per_emitted_record() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ofac_strict.jsonl");

    let stats = run_transform(&fixture(), &output, &TransformOptions::default()).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents.lines().count(), stats.emitted);
    assert_eq!(stats.emitted, 3);
    assert_eq!(stats.output_sha256.len(), 64);
    assert!(contents.lines().all(|line| line.starts_with(r#"{"DATA_SOURCE":"OFAC_ADVANCED""#)));
}

#[test]
fn data_source_reaches_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("custom.jsonl");
    let options = TransformOptions::new().with_data_source("SANCTIONS_TEST");

    run_transform(&fixture(), &output, &options).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.lines().all(|line| line.contains(r#""DATA_SOURCE":"SANCTIONS_TEST""#)));
    assert!(!contents.contains("OFAC_ADVANCED"));
}

#[test]
fn missing_input_is_reported_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.xml");
    let output = dir.path().join("out.jsonl");

    let error = run_transform(&input, &output, &TransformOptions::default()).unwrap_err();

    assert!(error.to_string().contains("input file not found"), "{error}");
    assert!(!output.exists());
}

#[test]
fn parse_failure_carries_input_context() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    fs::write(&input, "<Sanctions><DistinctParty></Sanctions>").unwrap();
    let output = dir.path().join("out.jsonl");

    let error = run_transform(&input, &output, &TransformOptions::default()).unwrap_err();

    assert!(format!("{error:#}").starts_with("transform "), "{error:#}");
    assert!(!output.exists());
}
