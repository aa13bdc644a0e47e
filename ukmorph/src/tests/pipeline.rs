use std::fs;

use tempfile::tempdir;

use super::*;
use crate::cache::CacheStrategy;
use crate::errors::MorphError;
use crate::pipeline::conllu::parse_conllu;
use crate::pipeline::{Pipeline, TreebankPipeline};

#[test]
fn test_parse_sample() {
    let doc = parse_conllu(UK_SAMPLE_CONLLU.as_bytes()).unwrap();
    assert_eq!(doc.sentences.len(), 3);
    assert_eq!(doc.sentences[0].words.len(), 5);
    // range 4-5 and empty node 4.1 are skipped
    assert_eq!(doc.sentences[2].words.len(), 7);
    assert!(doc.words().all(|w| w.text != "є" && w.text != "нема й"));
}

#[test]
fn test_model_from_sample() {
    let model = sample_model();
    assert_eq!(model.num_forms(), 12);

    let word = model.annotate("Книга").unwrap();
    assert_eq!(word.text, "Книга");
    assert_eq!(word.lemma, "книга");
    assert_eq!(word.upos, "NOUN");
    assert!(model.annotate("зошит").is_none());
}

#[test]
fn test_model_write_read() {
    let model = sample_model();
    let mut buf = vec![];
    model.write(&mut buf).unwrap();

    let loaded = TreebankModel::read(buf.as_slice()).unwrap();
    assert_eq!(loaded.num_forms(), model.num_forms());
    assert_eq!(loaded.annotate("столі"), model.annotate("столі"));
}

#[test]
fn test_model_bad_magic() {
    let mut buf = vec![];
    sample_dictionary().write(&mut buf).unwrap();
    let result = TreebankModel::read(buf.as_slice());
    assert!(matches!(result, Err(MorphError::InvalidArgument(_))));
}

#[test]
fn test_treebank_pipeline() {
    let mut pipeline = TreebankPipeline::new(sample_model());
    let doc = pipeline.process("Книга лежить на столі. Зошит!").unwrap();
    assert_eq!(doc.sentences.len(), 2);

    let first = doc.first_word().unwrap();
    assert_eq!(first.feats, "Animacy=Inan|Case=Nom|Gender=Fem|Number=Sing");

    let unknown = &doc.sentences[1].words;
    assert_eq!(unknown[0].lemma, "зошит");
    assert_eq!(unknown[0].upos, "X");
    assert_eq!(unknown[0].feats, "_");
    assert_eq!(unknown[1].upos, "PUNCT");
}

#[test]
fn test_load_cached_local() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("uk_sample.conllu");
    fs::write(&source, UK_SAMPLE_CONLLU).unwrap();

    let model = TreebankModel::load_cached(&source, CacheStrategy::Local).unwrap();
    assert_eq!(model.num_forms(), 12);

    let cache_dir = dir.path().join(".cache");
    let cached: Vec<_> = fs::read_dir(&cache_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "treebank"))
        .collect();
    assert_eq!(cached.len(), 1);

    // Replace the cached model; an unchanged source must be served from the cache.
    let other = TreebankModel::from_conllu(
        "1\tзошит\tзошит\tNOUN\t_\tCase=Nom\t0\troot\t_\t_\n".as_bytes(),
    )
    .unwrap();
    other.write(fs::File::create(&cached[0]).unwrap()).unwrap();

    let model = TreebankModel::load_cached(&source, CacheStrategy::Local).unwrap();
    assert_eq!(model.num_forms(), 1);
    assert!(model.annotate("зошит").is_some());
}

#[test]
fn test_load_cached_recovers_from_corruption() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("uk_sample.conllu");
    fs::write(&source, UK_SAMPLE_CONLLU).unwrap();

    TreebankModel::load_cached(&source, CacheStrategy::Local).unwrap();
    for entry in fs::read_dir(dir.path().join(".cache")).unwrap() {
        fs::write(entry.unwrap().path(), b"garbage").unwrap();
    }

    let model = TreebankModel::load_cached(&source, CacheStrategy::Local).unwrap();
    assert_eq!(model.num_forms(), 12);
}

#[test]
fn test_load_cached_missing_source() {
    let dir = tempdir().unwrap();
    let result = TreebankModel::load_cached(dir.path().join("absent.conllu"), CacheStrategy::Local);
    assert!(matches!(result, Err(MorphError::InvalidArgument(_))));
}
