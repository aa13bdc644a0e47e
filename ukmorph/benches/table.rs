//! 表の生成のベンチマーク
//!
//! テスト用のパラダイム辞書とツリーバンクを使用して、2つの解析器による
//! 表の生成速度を計測します。

use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ukmorph::dictionary::DictionaryBuilder;
use ukmorph::pipeline::{TreebankModel, TreebankPipeline};
use ukmorph::{MorphAnalyzer, MorphologyTable, PipelineAnalyzer};

const DUMP: &str = include_str!("../src/tests/resources/opencorpora.txt");
const TREEBANK: &str = include_str!("../src/tests/resources/uk_sample.conllu");

const WORDS: &[&str] = &[
    "книга", "книгою", "столі", "читаю", "читала", "мати", "матері", "сирота", "ґудзик",
];

fn bench_table(c: &mut Criterion) {
    let dict = DictionaryBuilder::from_reader(DUMP.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to build the dictionary: {}", e));
    let model = TreebankModel::from_conllu(TREEBANK.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to compile the treebank: {}", e));

    let mut group = c.benchmark_group("Table Generation");
    group.throughput(Throughput::Elements(WORDS.len() as u64));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    let mut with_forms = MorphologyTable::new(MorphAnalyzer::new(dict));
    group.bench_function(BenchmarkId::new("Dictionary", "Forms"), |b| {
        b.iter(|| with_forms.generate_table(WORDS).unwrap());
    });

    let mut without_forms = with_forms.show_forms(false);
    group.bench_function(BenchmarkId::new("Dictionary", "NoForms"), |b| {
        b.iter(|| without_forms.generate_table(WORDS).unwrap());
    });

    let mut treebank = MorphologyTable::new(PipelineAnalyzer::new(TreebankPipeline::new(model)));
    group.bench_function(BenchmarkId::new("Treebank", "Words"), |b| {
        b.iter(|| treebank.generate_table(WORDS).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_table);
criterion_main!(benches);
