use std::fs;

use tempfile::tempdir;

use textcheck::{journal, search};

#[test]
fn test_busiest_file_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");

    fs::write(&input, "3\n08:00 12:00\n09:30 11:00\n10:00 10:30\n").unwrap();
    journal::process_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "3\n10:00 10:30\n");
}

#[test]
fn test_busiest_empty_journal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");

    fs::write(&input, "0\n").unwrap();
    journal::process_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "0\n00:00 00:00\n");
}

#[test]
fn test_busiest_rejects_malformed_journal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");

    fs::write(&input, "2\n08:00 12:00\n").unwrap();
    assert!(journal::process_file(&input, &output).is_err());
}

#[test]
fn test_busiest_missing_input_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("does-not-exist.txt");
    let output = dir.path().join("output.txt");

    assert!(journal::process_file(&input, &output).is_err());
}

#[test]
fn test_find_file_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");

    fs::write(&input, "big dog\na big dog and a big \t dog\n").unwrap();
    search::process_file(&input, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "a @big dog and a @big \t dog\n"
    );
}

#[test]
fn test_find_phrase_line_strips_carriage_return() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");

    fs::write(&input, "cat\r\nthe cat\n").unwrap();
    search::process_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "the @cat\n");
}

#[test]
fn test_find_input_without_text() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");

    // The whole file is the phrase; there is no text to annotate
    fs::write(&input, "lonely phrase").unwrap();
    search::process_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}
