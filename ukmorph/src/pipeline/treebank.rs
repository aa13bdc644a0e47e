//! CoNLL-Uツリーバンクから構築した語彙モデルによるパイプライン
//!
//! モデルは、小文字化した語形ごとに最も頻度の高い(見出し語、UPOS、FEATS)の
//! 組を保持します。頻度が同じ場合は先に出現した組を採用します。

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use hashbrown::HashMap;
use rkyv::rancor::Error;
use rkyv::{Archive, Deserialize, Serialize};

use crate::archive::{read_archive, serialization_failed, validation_failed, write_archive};
use crate::cache::{compute_metadata_hash, CacheStrategy};
use crate::errors::{MorphError, Result};
use crate::pipeline::conllu::parse_conllu;
use crate::pipeline::{Document, Pipeline, Sentence, UdWord};
use crate::tagset::ud::UNSPECIFIED;

/// 語彙モデルファイルを識別するマジックバイト。
pub const MODEL_MAGIC: &[u8] = b"UkmorphTreebank 0.1\n";

/// 文末記号
const SENTENCE_TERMINALS: &[char] = &['.', '!', '?', '…'];

/// 語形の注釈
#[derive(Archive, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
struct Entry {
    form: String,
    lemma: String,
    upos: String,
    feats: String,
}

#[derive(Archive, Serialize, Deserialize)]
struct ModelData {
    entries: Vec<Entry>,
}

/// ツリーバンクから構築された語彙モデル
pub struct TreebankModel {
    data: ModelData,
    index: HashMap<String, usize>,
}

impl TreebankModel {
    fn from_data(data: ModelData) -> Self {
        let index = data
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.form.clone(), i))
            .collect();
        Self { data, index }
    }

    /// CoNLL-U形式のツリーバンクからモデルを構築します。
    ///
    /// # 引数
    ///
    /// * `rdr` - CoNLL-Uテキストのリーダー
    ///
    /// # エラー
    ///
    /// CoNLL-Uの読み込みに失敗した場合にエラーを返します。
    pub fn from_conllu<R: Read>(rdr: R) -> Result<Self> {
        let doc = parse_conllu(rdr)?;

        // (annotation, count, first seen position) per form
        let mut counts: HashMap<String, Vec<(Entry, usize, usize)>> = HashMap::new();
        for (pos, word) in doc.words().enumerate() {
            let form = word.text.to_lowercase();
            let entry = Entry {
                form: form.clone(),
                lemma: word.lemma.clone(),
                upos: word.upos.clone(),
                feats: word.feats.clone(),
            };
            let candidates = counts.entry(form).or_default();
            match candidates.iter_mut().find(|(e, _, _)| *e == entry) {
                Some((_, count, _)) => *count += 1,
                None => candidates.push((entry, 1, pos)),
            }
        }

        let mut entries: Vec<Entry> = counts
            .into_values()
            .filter_map(|candidates| {
                candidates
                    .into_iter()
                    .min_by_key(|&(_, count, first)| (std::cmp::Reverse(count), first))
                    .map(|(entry, _, _)| entry)
            })
            .collect();
        entries.sort_by(|a, b| a.form.cmp(&b.form));
        log::info!("[ukmorph] Compiled a treebank model of {} forms", entries.len());

        Ok(Self::from_data(ModelData { entries }))
    }

    /// 語形の数を返します。
    pub fn num_forms(&self) -> usize {
        self.data.entries.len()
    }

    /// 語形の注釈を返します。検索は大文字小文字を区別しません。
    ///
    /// 返される語の表層形は入力の`text`です。
    pub fn annotate(&self, text: &str) -> Option<UdWord> {
        let &i = self.index.get(text.to_lowercase().as_str())?;
        let entry = &self.data.entries[i];
        Some(UdWord::new(text, &entry.lemma, &entry.upos, &entry.feats))
    }

    /// モデルを`rkyv`フォーマットでライターにシリアライズします。
    pub fn write<W: Write>(&self, wtr: W) -> Result<()> {
        let bytes = rkyv::to_bytes::<Error>(&self.data).map_err(serialization_failed)?;
        write_archive(wtr, MODEL_MAGIC, &bytes)
    }

    /// リーダーからモデルを読み込みます。
    ///
    /// # エラー
    ///
    /// マジックナンバーが一致しない場合、またはアーカイブの検証に失敗した場合に
    /// エラーを返します。
    pub fn read<R: Read>(rdr: R) -> Result<Self> {
        let archive = read_archive(rdr, MODEL_MAGIC, "treebank model")?;
        let data = rkyv::from_bytes::<ModelData, Error>(&archive)
            .map_err(|e| validation_failed("treebank model", e))?;
        Ok(Self::from_data(data))
    }

    /// ファイルパスからコンパイル済みモデルを読み込みます。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MorphError::invalid_argument("path", format!("Failed to open model file: {}", e))
        })?;
        Self::read(BufReader::new(file))
    }

    /// ツリーバンクからモデルを読み込み、コンパイル結果をキャッシュします。
    ///
    /// キャッシュ名はツリーバンクファイルのメタデータから計算されます。
    /// 対応するキャッシュが存在すればそれを読み込み、存在しない(または壊れている)
    /// 場合はツリーバンクをコンパイルしてキャッシュに書き込みます。
    /// 書き込みは一時ファイルの永続化により原子的に行われます。
    ///
    /// # 引数
    ///
    /// * `source` - CoNLL-U形式のツリーバンクファイルへのパス
    /// * `strategy` - キャッシュディレクトリの決定方法
    ///
    /// # エラー
    ///
    /// ツリーバンクを読み込めない場合、またはキャッシュディレクトリに
    /// 書き込めない場合にエラーを返します。
    pub fn load_cached<P: AsRef<Path>>(source: P, strategy: CacheStrategy) -> Result<Self> {
        let source = source.as_ref();
        let file = File::open(source).map_err(|e| {
            MorphError::invalid_argument("source", format!("Failed to open treebank: {}", e))
        })?;
        let meta = file.metadata()?;
        if meta.is_dir() {
            return Err(MorphError::invalid_argument(
                "source",
                format!("The path '{}' is a directory, but a file was expected.", source.display()),
            ));
        }

        let cache_dir = strategy.cache_dir(source)?;
        let cache_path = cache_dir.join(format!("{}.treebank", compute_metadata_hash(&meta)));

        if cache_path.exists() {
            match Self::from_path(&cache_path) {
                Ok(model) => {
                    log::debug!("[ukmorph] Loaded cached model {}", cache_path.display());
                    return Ok(model);
                }
                Err(e) => {
                    log::warn!(
                        "[ukmorph] Ignoring unreadable cache {}: {}",
                        cache_path.display(),
                        e
                    );
                }
            }
        }

        log::info!("[ukmorph] Compiling {} (first run)", source.display());
        let model = Self::from_conllu(BufReader::new(file))?;

        let mut temp_file = tempfile::NamedTempFile::new_in(&cache_dir)?;
        model.write(&mut temp_file)?;
        temp_file.persist(&cache_path)?;
        log::info!("[ukmorph] Cached the compiled model at {}", cache_path.display());

        Ok(model)
    }
}

/// 語彙モデルによる解析パイプライン
///
/// 入力テキストを文と語に分割し、各語にモデルの注釈を付けます。
/// モデルに無い語は、見出し語を小文字化した表層形とし、UPOSを記号なら`PUNCT`、
/// それ以外なら`X`とします。
pub struct TreebankPipeline {
    model: TreebankModel,
}

impl TreebankPipeline {
    /// 新しいパイプラインを作成します。
    pub fn new(model: TreebankModel) -> Self {
        Self { model }
    }

    /// モデルへの参照を返します。
    pub fn model(&self) -> &TreebankModel {
        &self.model
    }

    fn annotate(&self, token: &str) -> UdWord {
        self.model.annotate(token).unwrap_or_else(|| {
            let upos = if token.chars().any(is_word_char) { "X" } else { "PUNCT" };
            UdWord::new(token, token.to_lowercase(), upos, UNSPECIFIED)
        })
    }
}

impl Pipeline for TreebankPipeline {
    fn process(&mut self, text: &str) -> Result<Document> {
        let sentences = split_sentences(text)
            .into_iter()
            .map(|tokens| Sentence {
                words: tokens.iter().map(|t| self.annotate(t)).collect(),
            })
            .collect();
        Ok(Document { sentences })
    }
}

#[inline(always)]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '’' | 'ʼ')
}

/// テキストを文ごとのトークン列に分割します。
///
/// 語は英数字とアポストロフィの連続で、語中のハイフンも含みます。
/// それ以外の空白でない文字は1文字で1トークンになり、文末記号は文を終えます。
pub(crate) fn split_sentences(text: &str) -> Vec<Vec<String>> {
    let mut sentences = vec![];
    let mut tokens: Vec<String> = vec![];
    let mut word = String::new();

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let joins_word = is_word_char(c)
            || (c == '-' && !word.is_empty() && chars.peek().is_some_and(|&n| is_word_char(n)));
        if joins_word {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
        if c.is_whitespace() {
            continue;
        }
        tokens.push(c.to_string());
        if SENTENCE_TERMINALS.contains(&c) && !chars.peek().is_some_and(|n| SENTENCE_TERMINALS.contains(n)) {
            sentences.push(std::mem::take(&mut tokens));
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }
    if !tokens.is_empty() {
        sentences.push(tokens);
    }
    sentences
}
