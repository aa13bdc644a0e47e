//! 形態素解析のためのパラダイム辞書モジュール。
//!
//! 辞書は語彙素(レキシーム)の集合です。各語彙素は、見出し語(正規形)を先頭とする
//! 語形とOpenCorpora形式のタグ文字列の列を保持します。
//!
//! # 辞書の読み込み方法
//!
//! - [`Dictionary::from_path`]: ファイルパスから辞書を読み込む(`.zst`は透過的に展開)
//! - [`Dictionary::read`]: リーダーから辞書を読み込む
//!
//! # 辞書のビルド
//!
//! [`DictionaryBuilder`]を使用して、OpenCorpora形式のテキストダンプから辞書を構築できます。
pub mod builder;

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use hashbrown::HashMap;
use rkyv::rancor::Error;
use rkyv::{Archive, Deserialize, Serialize};

use crate::archive::{read_archive, serialization_failed, validation_failed, write_archive};
use crate::errors::{MorphError, Result};

pub use crate::dictionary::builder::DictionaryBuilder;

/// 辞書ファイルを識別するマジックバイト。
///
/// "0.1"はファイルフォーマットのバージョンであり、クレートのバージョンとは独立しています。
pub const MODEL_MAGIC: &[u8] = b"UkmorphDictionary 0.1\n";

/// 語彙素内の1つの語形。
#[derive(Archive, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LexemeForm {
    /// 小文字化された語形
    pub word: String,
    /// OpenCorpora形式のタグ文字列
    pub tag: String,
}

/// 語彙素。先頭の語形が正規形です。
#[derive(Archive, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    forms: Vec<LexemeForm>,
}

impl Lexeme {
    pub(crate) fn new(forms: Vec<LexemeForm>) -> Self {
        debug_assert!(!forms.is_empty());
        Self { forms }
    }

    /// 正規形(見出し語)を返します。
    #[inline(always)]
    pub fn normal_form(&self) -> &str {
        &self.forms[0].word
    }

    /// すべての語形を辞書順に返します。
    #[inline(always)]
    pub fn forms(&self) -> &[LexemeForm] {
        &self.forms
    }
}

/// 語形から語彙素内の位置への参照。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormRef {
    /// 語彙素のID
    pub lexeme_id: u32,
    /// 語彙素内の語形の位置
    pub form_id: u32,
}

/// シリアライズされる辞書データ。
#[derive(Archive, Serialize, Deserialize)]
struct DictionaryData {
    lexemes: Vec<Lexeme>,
}

/// 形態素解析のための読み取り専用辞書。
///
/// 読み込み時に、小文字化された語形から[`FormRef`]への索引を構築します。
pub struct Dictionary {
    data: DictionaryData,
    index: HashMap<String, Vec<FormRef>>,
}

impl Dictionary {
    /// 語彙素の列から辞書を作成します。
    pub(crate) fn from_lexemes(lexemes: Vec<Lexeme>) -> Result<Self> {
        Self::from_data(DictionaryData { lexemes })
    }

    fn from_data(data: DictionaryData) -> Result<Self> {
        let mut index: HashMap<String, Vec<FormRef>> = HashMap::new();
        for (lexeme_id, lexeme) in data.lexemes.iter().enumerate() {
            let lexeme_id = u32::try_from(lexeme_id)
                .map_err(|_| MorphError::invalid_argument("lexemes", "too many lexemes"))?;
            for (form_id, form) in lexeme.forms.iter().enumerate() {
                let form_id = u32::try_from(form_id)
                    .map_err(|_| MorphError::invalid_argument("lexemes", "too many forms"))?;
                index
                    .entry(form.word.clone())
                    .or_default()
                    .push(FormRef { lexeme_id, form_id });
            }
        }
        Ok(Self { data, index })
    }

    /// 語彙素の数を返します。
    pub fn num_lexemes(&self) -> usize {
        self.data.lexemes.len()
    }

    /// 指定IDの語彙素を返します。
    pub fn lexeme(&self, lexeme_id: u32) -> Option<&Lexeme> {
        self.data.lexemes.get(usize::try_from(lexeme_id).ok()?)
    }

    /// 参照先の語形を返します。
    pub fn form(&self, form_ref: FormRef) -> Option<&LexemeForm> {
        self.lexeme(form_ref.lexeme_id)?
            .forms
            .get(usize::try_from(form_ref.form_id).ok()?)
    }

    /// 小文字化された語形に一致する参照を、語彙素ID・語形位置の順に返します。
    ///
    /// # 引数
    ///
    /// * `word` - 小文字化済みの語形
    pub fn lookup(&self, word: &str) -> &[FormRef] {
        self.index.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 辞書データを`rkyv`フォーマットでライターにシリアライズします。
    ///
    /// 出力はマジックバイト、16バイト境界へのパディング、`rkyv`アーカイブの順です。
    ///
    /// # エラー
    ///
    /// 書き込みまたはシリアライズに失敗した場合にエラーを返します。
    pub fn write<W>(&self, wtr: W) -> Result<()>
    where
        W: Write,
    {
        let bytes = rkyv::to_bytes::<Error>(&self.data).map_err(serialization_failed)?;
        write_archive(wtr, MODEL_MAGIC, &bytes)
    }

    /// リーダーから辞書を読み込みます。
    ///
    /// すべての内容をメモリに読み込み、アーカイブを検証してから索引を構築します。
    ///
    /// # エラー
    ///
    /// この関数は以下の場合にエラーを返します:
    /// - データを読み込めない場合。
    /// - マジックナンバーが一致しない場合。
    /// - アーカイブの検証に失敗した場合。
    pub fn read<R: Read>(rdr: R) -> Result<Self> {
        let archive = read_archive(rdr, MODEL_MAGIC, "dictionary")?;
        let data = rkyv::from_bytes::<DictionaryData, Error>(&archive)
            .map_err(|e| validation_failed("dictionary", e))?;
        log::debug!("[ukmorph] Loaded {} lexemes", data.lexemes.len());

        Self::from_data(data)
    }

    /// ファイルパスから辞書を読み込みます。
    ///
    /// 拡張子が`.zst`の場合は、Zstandard圧縮として透過的に展開します。
    ///
    /// # 引数
    ///
    /// * `path` - 辞書ファイルへのパス
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合、または[`Dictionary::read`]が失敗した場合にエラーを返します。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(MorphError::invalid_argument(
                "path",
                format!("The path '{}' is a directory, but a file was expected.", path.display()),
            ));
        }
        let file = File::open(path).map_err(|e| {
            MorphError::invalid_argument("path", format!("Failed to open dictionary file: {}", e))
        })?;

        if path.extension().is_some_and(|ext| ext == "zst") {
            Self::read(zstd::Decoder::new(file)?)
        } else {
            Self::read(BufReader::new(file))
        }
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("num_lexemes", &self.num_lexemes())
            .field("num_forms", &self.index.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_lexemes(vec![
            Lexeme::new(vec![
                LexemeForm { word: "мати".into(), tag: "NOUN,anim,femn sing,nomn".into() },
                LexemeForm { word: "матері".into(), tag: "NOUN,anim,femn sing,gent".into() },
            ]),
            Lexeme::new(vec![
                LexemeForm { word: "мати".into(), tag: "INFN,impf,tran".into() },
            ]),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_order() {
        let dict = sample();
        assert_eq!(
            dict.lookup("мати"),
            &[
                FormRef { lexeme_id: 0, form_id: 0 },
                FormRef { lexeme_id: 1, form_id: 0 },
            ]
        );
        assert!(dict.lookup("мама").is_empty());
    }

    #[test]
    fn test_form_and_lexeme() {
        let dict = sample();
        let form = dict.form(FormRef { lexeme_id: 0, form_id: 1 }).unwrap();
        assert_eq!(form.word, "матері");
        assert_eq!(dict.lexeme(0).unwrap().normal_form(), "мати");
        assert!(dict.lexeme(2).is_none());
        assert!(dict.form(FormRef { lexeme_id: 1, form_id: 1 }).is_none());
    }

    #[test]
    fn test_write_read() {
        let dict = sample();
        let mut buf = vec![];
        dict.write(&mut buf).unwrap();
        assert!(buf.starts_with(MODEL_MAGIC));

        let loaded = Dictionary::read(buf.as_slice()).unwrap();
        assert_eq!(loaded.num_lexemes(), 2);
        assert_eq!(loaded.lookup("матері"), dict.lookup("матері"));
        assert_eq!(loaded.lexeme(1), dict.lexeme(1));
    }

    #[test]
    fn test_read_bad_magic() {
        let result = Dictionary::read(&b"UkmorphTreebank 0.1\n\0\0\0\0\0\0\0\0\0\0"[..]);
        assert!(matches!(result, Err(MorphError::InvalidArgument(_))));
    }

    #[test]
    fn test_read_truncated() {
        let result = Dictionary::read(&b"Ukmorph"[..]);
        assert!(matches!(result, Err(MorphError::InvalidArgument(_))));
    }
}
