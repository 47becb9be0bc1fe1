//! Tests for the end-to-end transform over the sample export.

use std::collections::HashSet;
use std::path::PathBuf;

use ofac_ingest::{IngestError, parse_str};
use ofac_transform::{
    TransformError, TransformOptions, TransformStats, transform_document, transform_file,
};
use serde_json::{Value, json};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_advanced.xml")
}

fn fixture() -> String {
    std::fs::read_to_string(fixture_path()).unwrap()
}

fn run(xml: &str, options: &TransformOptions) -> (String, TransformStats) {
    let document = parse_str(xml).unwrap();
    let mut output = Vec::new();
    let stats = transform_document(document.root(), options, &mut output).unwrap();
    (String::from_utf8(output).unwrap(), stats)
}

#[test]
fn emits_one_line_per_complete_party() {
    let (output, stats) = run(&fixture(), &TransformOptions::default());
    let records: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let ids: Vec<&str> = records
        .iter()
        .map(|record| record["RECORD_ID"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1001", "1002", "1003"]);
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());

    assert_eq!(stats.processed, 5);
    assert_eq!(stats.emitted, 3);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.repeated_ids, 0);
    assert_eq!(stats.features, 21);
    assert_eq!(stats.relationships, 2);
    assert_eq!(stats.identifiers, 5);
    assert_eq!(stats.unmapped_feature_codes, vec![99002]);
    assert_eq!(stats.unmapped_document_codes, vec![99501]);
}

#[test]
fn person_record_carries_every_feature_family() {
    let (output, _) = run(&fixture(), &TransformOptions::default());
    let person: Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
    assert_eq!(
        person,
        json!({
            "DATA_SOURCE": "OFAC_ADVANCED",
            "RECORD_ID": "1001",
            "FEATURES": [
                {"RECORD_TYPE": "PERSON"},
                {"NAME_FIRST": "Ivan", "NAME_LAST": "Petrov", "NAME_FULL": "Ivan Petrov", "NAME_TYPE": "PRIMARY"},
                {"NAME_FIRST": "Ivan", "NAME_LAST": "Petroff", "NAME_FULL": "Ivan Petroff", "NAME_TYPE": "AKA"},
                {"DATE_OF_BIRTH": "1960-01-05"},
                {"NATIONALITY": "CU"},
                {"PASSPORT_NUMBER": "123456789", "PASSPORT_COUNTRY": "US"},
                {"ADDR_FULL": "Calle 23, Havana"},
                {"OTHER_ID_TYPE": "DIGITAL_CURRENCY_ADDRESS_ZZZ", "OTHER_ID_NUMBER": "0xDEADBEEF"},
                {"EMAIL_ADDRESS": "ivan@example.ru"},
                {"PASSPORT_NUMBER": "X1", "PASSPORT_COUNTRY": "UK"},
                {"OTHER_ID_TYPE": "SEAFARER_S_BOOK", "OTHER_ID_NUMBER": "SB-9"},
                {"REL_ANCHOR_DOMAIN": "OFAC_ADVANCED", "REL_ANCHOR_KEY": "1001"},
                {"REL_POINTER_DOMAIN": "OFAC_ADVANCED", "REL_POINTER_KEY": "1002", "REL_POINTER_ROLE": "CONTROLLED_BY"},
                {"REL_POINTER_DOMAIN": "OFAC_ADVANCED", "REL_POINTER_KEY": "1003", "REL_POINTER_ROLE": "FORMER_PLAYING_A_ROLE_IN"}
            ],
            "SANCTIONS_LIST": "SDN; Non-SDN CMIC",
            "SANCTIONS_DATE": "2014-03-20",
            "SANCTIONS_PROGRAMS": "UKRAINE-EO13661; CMIC-EO13959",
            "SANCTIONS_TYPE": "Block",
            "IS_PRIMARY": true,
            "DATA_QUALITY_SCORE": 2,
            "SANCTIONS_REMARKS": "Linked To: SEA STAR; Linked To: ACME TRADING LLC"
        })
    );
}

#[test]
fn vessel_payload_keeps_the_first_tonnage() {
    let (output, _) = run(&fixture(), &TransformOptions::default());
    let vessel = output.lines().nth(1).unwrap();
    insta::assert_snapshot!(vessel, @r#"{"DATA_SOURCE":"OFAC_ADVANCED","RECORD_ID":"1002","FEATURES":[{"RECORD_TYPE":"VESSEL"},{"NAME_FULL":"SEA STAR","NAME_TYPE":"PRIMARY"},{"OTHER_ID_TYPE":"IMO","OTHER_ID_NUMBER":"9187629"},{"REL_ANCHOR_DOMAIN":"OFAC_ADVANCED","REL_ANCHOR_KEY":"1002"}],"VESSEL_TONNAGE":"1000","VESSEL_FLAG":"Panama","SANCTIONS_REMARKS":"Linked To: 9999"}"#);
}

#[test]
fn mapped_payload_date_wins_over_sanctions_entries() {
    let (output, _) = run(&fixture(), &TransformOptions::default());
    let organization = output.lines().nth(2).unwrap();
    insta::assert_snapshot!(organization, @r#"{"DATA_SOURCE":"OFAC_ADVANCED","RECORD_ID":"1003","FEATURES":[{"RECORD_TYPE":"ORGANIZATION"},{"NAME_FULL":"ACME TRADING LLC","NAME_TYPE":"PRIMARY"},{"REL_ANCHOR_DOMAIN":"OFAC_ADVANCED","REL_ANCHOR_KEY":"1003"}],"SANCTIONS_DATE":"2021-06-03","SANCTIONS_LIST":"Non-SDN CMIC","SANCTIONS_PROGRAMS":"CMIC-EO13959","IS_PRIMARY":false}"#);
}

#[test]
fn identical_input_gives_identical_output() {
    let xml = fixture();
    let (first, first_stats) = run(&xml, &TransformOptions::default());
    let (second, second_stats) = run(&xml, &TransformOptions::default());
    assert_eq!(first, second);
    assert_eq!(first_stats.output_sha256, second_stats.output_sha256);
    assert_eq!(first_stats.output_sha256.len(), 64);
}

#[test]
fn data_source_applies_to_records_and_relationships() {
    let options = TransformOptions::new().with_data_source("OFAC_TEST");
    let (output, _) = run(&fixture(), &options);
    let person: Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
    assert_eq!(person["DATA_SOURCE"], "OFAC_TEST");
    let domains: Vec<&Value> = person["FEATURES"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|feature| {
            feature
                .get("REL_ANCHOR_DOMAIN")
                .or_else(|| feature.get("REL_POINTER_DOMAIN"))
        })
        .collect();
    assert_eq!(domains, vec!["OFAC_TEST", "OFAC_TEST", "OFAC_TEST"]);
}

#[test]
fn transform_file_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.jsonl");
    let stats = transform_file(&fixture_path(), &output, &TransformOptions::default()).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), stats.emitted);
    assert!(written.ends_with('\n'));
    let (in_memory, in_memory_stats) = run(&fixture(), &TransformOptions::default());
    assert_eq!(written, in_memory);
    assert_eq!(stats.output_sha256, in_memory_stats.output_sha256);
}

#[test]
fn repeated_stable_identifiers_are_written_and_counted() {
    let xml = r#"<Sanctions>
  <DistinctParties>
    <DistinctParty FixedRef="1"><Profile ID="10" PartySubTypeID="3"/></DistinctParty>
    <DistinctParty FixedRef="1"><Profile ID="11" PartySubTypeID="3"/></DistinctParty>
    <DistinctParty FixedRef="2"><Profile ID="12" PartySubTypeID="3"/></DistinctParty>
  </DistinctParties>
</Sanctions>"#;
    let (output, stats) = run(xml, &TransformOptions::default());
    let ids: Vec<String> = output
        .lines()
        .map(|line| {
            let record: Value = serde_json::from_str(line).unwrap();
            record["RECORD_ID"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ids, vec!["1", "1", "2"]);
    assert_eq!((stats.emitted, stats.repeated_ids), (3, 1));
}

#[test]
fn malformed_input_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    let output = dir.path().join("out.jsonl");
    std::fs::write(&input, "<Sanctions><DistinctParties></Sanctions>").unwrap();

    let error = transform_file(&input, &output, &TransformOptions::default()).unwrap_err();
    assert!(matches!(error, TransformError::Ingest(IngestError::Xml { .. })));
    assert!(!output.exists());
}
