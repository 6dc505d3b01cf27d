//! Integration tests for the converter library surface.

use std::fs;

use pretty_assertions::assert_eq;

use crlfix::{normalize_bytes, CancelToken, ConvertConfig, Converter, Outcome, ScanMode};

fn rewrite_converter() -> Converter {
    Converter::new(ConvertConfig::new(ScanMode::Rewrite), CancelToken::new())
}

#[test]
fn end_to_end_rewrite_matches_normalize_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    let original = b"head\r\nbody\nempty\r\n\r\ntail".to_vec();
    fs::write(&path, &original).unwrap();

    assert_eq!(rewrite_converter().process(&path).unwrap(), Outcome::Converted);

    let (expected, found) = normalize_bytes(&original);
    assert!(found);
    assert_eq!(fs::read(&path).unwrap(), expected);
}

#[test]
fn conversion_leaves_no_extra_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"x\r\n").unwrap();

    rewrite_converter().process(&path).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn long_lines_spanning_many_read_buffers_convert_correctly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.txt");
    let mut original = vec![b'x'; 100_000];
    original.extend_from_slice(b"\r\n");
    original.extend(vec![b'y'; 50_000]);
    fs::write(&path, &original).unwrap();

    assert_eq!(rewrite_converter().process(&path).unwrap(), Outcome::Converted);

    let converted = fs::read(&path).unwrap();
    assert_eq!(converted.len(), original.len() - 1);
    assert_eq!(&converted[..100_000], &original[..100_000]);
    assert_eq!(converted[100_000], b'\n');
    assert_eq!(&converted[100_001..], &original[100_002..]);
}

#[test]
fn report_mode_never_creates_a_scratch_copy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"x\r\ny\r\n").unwrap();

    let converter = Converter::new(ConvertConfig::new(ScanMode::Report), CancelToken::new());
    assert_eq!(converter.process(&path).unwrap(), Outcome::Found);

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read(&path).unwrap(), b"x\r\ny\r\n".to_vec());
}

#[test]
fn unterminated_final_line_survives_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"one\r\nlast line without newline").unwrap();

    rewrite_converter().process(&path).unwrap();
    assert_eq!(
        fs::read(&path).unwrap(),
        b"one\nlast line without newline".to_vec()
    );
}

#[test]
fn trailing_lone_cr_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"one\r\ntwo\r").unwrap();

    rewrite_converter().process(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"one\ntwo\r".to_vec());
}
