//! Tests for the pieces an adapter builds on: text parsing, file input and
//! the serialised shape of results.

use std::io::Write;

use pagesim::{
    compare, load_reference_file, parse_reference_string, simulate, ComparisonResult, Error,
    InvalidInput, Outcome, PageRef, Policy, MAX_REFERENCE_LEN,
};
use serde::Deserialize;
use tempfile::NamedTempFile;

/// Mirror of the `SimulationResult` wire shape, field for field.
#[derive(Debug, Deserialize)]
struct WireSimulation {
    policy: Policy,
    frames: usize,
    faults: usize,
    hits: usize,
    states: Vec<Vec<Option<u32>>>,
    results: Vec<Outcome>,
}

#[test]
fn test_load_reference_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "7 0 1 2 0 3").unwrap();
    writeln!(file, "0, 4, 2, 3, 0, 3, 2").unwrap();

    let pages = load_reference_file(file.path()).unwrap();
    assert_eq!(pages.len(), 13);

    let result = simulate(Policy::Optimal, &pages, 4).unwrap();
    assert_eq!(result.fault_count(), 6);
}

#[test]
fn test_load_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = load_reference_file(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to read"));
    assert!(message.contains("missing.txt"));
    assert!(err.downcast_ref::<Error>().is_none());
}

#[test]
fn test_load_blank_file_keeps_input_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, " , ").unwrap();

    let err = load_reference_file(file.path()).unwrap_err();
    let err = err.downcast_ref::<Error>().unwrap();
    assert_eq!(err.reason(), &InvalidInput::EmptyReferenceString);
}

#[test]
fn test_mixed_page_tokens() {
    let pages = parse_reference_string("A 1 B 1 A").unwrap();
    assert_eq!(pages[0], PageRef::from("A"));
    assert_eq!(pages[1], PageRef::Number(1));

    let faults = compare(&pages, 2).unwrap();
    assert_eq!(faults.optimal, 4);
    assert_eq!(faults.fifo, 4);
}

#[test]
fn test_oversized_input_rejected() {
    let text = vec!["1"; MAX_REFERENCE_LEN + 1].join(",");
    let err = parse_reference_string(&text).unwrap_err();
    assert!(matches!(
        err.reason(),
        InvalidInput::TooManyReferences { .. }
    ));
}

#[test]
fn test_simulation_wire_shape() {
    let result = simulate(Policy::Fifo, &[1u32, 2, 1, 3], 2).unwrap();

    let bytes = bincode::serialize(&result).unwrap();
    let wire: WireSimulation = bincode::deserialize(&bytes).unwrap();

    assert_eq!(wire.policy, Policy::Fifo);
    assert_eq!(wire.frames, 2);
    assert_eq!(wire.faults, 3);
    assert_eq!(wire.hits, 1);
    assert_eq!(
        wire.results,
        vec![Outcome::Fault, Outcome::Fault, Outcome::Hit, Outcome::Fault]
    );
    assert_eq!(wire.states[0], vec![Some(1), None]);
    assert_eq!(wire.states[3], vec![Some(2), Some(3)]);
}

#[test]
fn test_comparison_wire_round_trip() {
    let result = compare(&[1, 2, 3, 1, 4, 5], 3).unwrap();

    let bytes = bincode::serialize(&result).unwrap();
    let decoded: ComparisonResult = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, result);
}
