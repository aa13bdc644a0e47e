use std::fs::File;

use tempfile::tempdir;

use super::*;
use crate::errors::MorphError;

#[test]
fn test_build_sample() {
    let dict = sample_dictionary();
    assert_eq!(dict.num_lexemes(), 6);
    assert_eq!(dict.lexeme(0).unwrap().normal_form(), "книга");
    assert_eq!(dict.lexeme(0).unwrap().forms().len(), 14);
    assert_eq!(dict.lookup("книги").len(), 4);
    assert_eq!(dict.lookup("мати").len(), 2);
    assert!(dict.lookup("КНИГИ").is_empty());
}

#[test]
fn test_from_path_zstd() {
    let dict = sample_dictionary();
    let dir = tempdir().unwrap();
    let path = dir.path().join("uk.dic.zst");

    let mut encoder = zstd::Encoder::new(File::create(&path).unwrap(), 3).unwrap();
    dict.write(&mut encoder).unwrap();
    encoder.finish().unwrap();

    let loaded = Dictionary::from_path(&path).unwrap();
    assert_eq!(loaded.num_lexemes(), dict.num_lexemes());
    assert_eq!(loaded.lookup("столом"), dict.lookup("столом"));
    assert_eq!(loaded.lexeme(5), dict.lexeme(5));
}

#[test]
fn test_from_path_plain() {
    let dict = sample_dictionary();
    let dir = tempdir().unwrap();
    let path = dir.path().join("uk.dic");
    dict.write(File::create(&path).unwrap()).unwrap();

    let loaded = Dictionary::from_path(&path).unwrap();
    assert_eq!(loaded.lookup("читаю"), dict.lookup("читаю"));
}

#[test]
fn test_from_path_directory() {
    let dir = tempdir().unwrap();
    let result = Dictionary::from_path(dir.path());
    assert!(matches!(result, Err(MorphError::InvalidArgument(_))));
}

#[test]
fn test_read_corrupted_archive() {
    let dict = sample_dictionary();
    let mut buf = vec![];
    dict.write(&mut buf).unwrap();
    buf.truncate(buf.len() / 2);

    let result = Dictionary::read(buf.as_slice());
    assert!(matches!(result, Err(MorphError::InvalidState(_))));
}
