// File and URI round-trips for tee copying, on real temporary files.
use std::fs;
use std::io::Read;

use siphon::{BytesInput, ErrorKind, FileInput, FileOutput, Tee, UriInput};
use url::Url;

fn read_to_string(mut stream: Box<dyn Read>) -> String {
    let mut text = String::new();
    stream.read_to_string(&mut text).expect("read");
    text
}

#[test]
fn copies_literal_to_file_byte_for_byte() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target_path = temp.path().join("greeting.txt");
    let message = "Hello, друг!";

    let tee = Tee::new(BytesInput::from(message), FileOutput::new(&target_path));
    let result = read_to_string(tee.stream().expect("stream"));

    assert_eq!(result, message);
    assert!(result.starts_with("Hello, "));
    assert!(result.ends_with("друг!"));
    assert_eq!(fs::read(&target_path).expect("read file"), message.as_bytes());
}

#[test]
fn copies_file_to_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source_path = temp.path().join("source.bin");
    let target_path = temp.path().join("target.bin");
    let payload: Vec<u8> = (0..4096u32).map(|n| (n % 256) as u8).collect();
    fs::write(&source_path, &payload).expect("write source");

    let tee = Tee::new(FileInput::new(&source_path), FileOutput::new(&target_path));
    assert_eq!(tee.copy().expect("copy"), payload.len() as u64);
    assert_eq!(fs::read(&target_path).expect("read target"), payload);
}

#[test]
fn copies_from_file_uri_to_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source_path = temp.path().join("uri-source.txt");
    let target_path = temp.path().join("uri-target.txt");
    let message = "Hello, товарищ path #1 äÄ üÜ öÖ and ß";
    fs::write(&source_path, message.as_bytes()).expect("write source");

    let url = Url::from_file_path(&source_path).expect("file url");
    let tee = Tee::new(UriInput::new(url), FileOutput::new(&target_path));
    let result = read_to_string(tee.stream().expect("stream"));

    assert_eq!(result, message);
    assert_eq!(
        fs::read(&target_path).expect("read target"),
        message.as_bytes()
    );
}

#[test]
fn empty_source_produces_empty_target() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target_path = temp.path().join("empty.bin");

    let tee = Tee::new(BytesInput::new(Vec::new()), FileOutput::new(&target_path));
    let result = read_to_string(tee.stream().expect("stream"));

    assert!(result.is_empty());
    assert_eq!(fs::metadata(&target_path).expect("metadata").len(), 0);
}

#[test]
fn tee_chains_as_an_input() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first_path = temp.path().join("first.txt");
    let second_path = temp.path().join("second.txt");

    let first = Tee::new(BytesInput::from("chained"), FileOutput::new(&first_path));
    let second = Tee::new(first, FileOutput::new(&second_path));
    let result = read_to_string(second.stream().expect("stream"));

    assert_eq!(result, "chained");
    assert_eq!(fs::read(&first_path).expect("first"), b"chained");
    assert_eq!(fs::read(&second_path).expect("second"), b"chained");
}

#[test]
fn open_source_failure_carries_the_phase() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target_path = temp.path().join("never-written.bin");

    let tee = Tee::new(
        FileInput::new(temp.path().join("missing.bin")),
        FileOutput::new(&target_path),
    );
    let err = tee.copy().expect_err("should fail");

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.phase(), Some(siphon::Phase::OpenSource));
    assert!(!target_path.exists());
}
