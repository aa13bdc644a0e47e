//! 辞書構築のためのビルダー
//!
//! このモジュールは、OpenCorpora形式のテキストダンプから[`Dictionary`]を
//! 構築するためのビルダーを提供します。
//!
//! ダンプは空行で区切られたブロックの列です。各ブロックは省略可能な数値の
//! 語彙素ID行で始まり、`語形<TAB>タグ`の行が続きます。ブロックの最初の語形が
//! 正規形になります。
//!
//! ```text
//! 1
//! КНИГА	NOUN,inan,femn sing,nomn
//! КНИГИ	NOUN,inan,femn sing,gent
//!
//! 2
//! ЧИТАТИ	INFN,impf,tran
//! ```

use std::io::{BufRead, BufReader, Read};

use hashbrown::HashSet;

use crate::dictionary::{Dictionary, Lexeme, LexemeForm};
use crate::errors::{MorphError, Result};

/// テキストダンプから[`Dictionary`]を構築するビルダー
pub struct DictionaryBuilder {}

impl DictionaryBuilder {
    /// OpenCorpora形式のテキストダンプから辞書を構築します。
    ///
    /// 語形は小文字化して格納されます。同一語彙素内で語形とタグが完全に
    /// 重複する行は警告を出して読み飛ばします。
    ///
    /// # 引数
    ///
    /// * `rdr` - テキストダンプのリーダー
    ///
    /// # 戻り値
    ///
    /// 構築された辞書
    ///
    /// # エラー
    ///
    /// この関数は以下の場合にエラーを返します:
    /// - 行が`語形<TAB>タグ`の形式でない場合(行番号を含みます)。
    /// - 語彙素が1つも含まれていない場合。
    ///
    /// # 例
    ///
    /// ```
    /// use ukmorph::dictionary::DictionaryBuilder;
    ///
    /// let dump = "1\nКНИГА\tNOUN,inan,femn sing,nomn\nКНИГИ\tNOUN,inan,femn sing,gent\n";
    /// let dict = DictionaryBuilder::from_reader(dump.as_bytes())?;
    /// assert_eq!(dict.num_lexemes(), 1);
    /// assert_eq!(dict.lookup("книги").len(), 1);
    /// # Ok::<(), ukmorph::errors::MorphError>(())
    /// ```
    pub fn from_reader<R>(rdr: R) -> Result<Dictionary>
    where
        R: Read,
    {
        let buf = BufReader::new(rdr);

        let mut lexemes = vec![];
        let mut forms: Vec<LexemeForm> = vec![];
        let mut seen: HashSet<(String, String)> = HashSet::new();

        for (i, line) in buf.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            let lineno = i + 1;

            if line.trim().is_empty() {
                Self::finish_lexeme(&mut lexemes, &mut forms, &mut seen);
                continue;
            }

            let Some((word, tag)) = line.split_once('\t') else {
                if line.trim().chars().all(|c| c.is_ascii_digit()) {
                    // A lexeme id line also starts a new block.
                    Self::finish_lexeme(&mut lexemes, &mut forms, &mut seen);
                    continue;
                }
                return Err(MorphError::invalid_format(
                    "rdr",
                    format!("line {}: expected `form<TAB>tag`, got {:?}", lineno, line),
                ));
            };

            let word = word.trim().to_lowercase();
            let tag = tag.trim().to_string();
            if word.is_empty() || tag.is_empty() {
                return Err(MorphError::invalid_format(
                    "rdr",
                    format!("line {}: empty form or tag", lineno),
                ));
            }

            if !seen.insert((word.clone(), tag.clone())) {
                log::warn!("[ukmorph] line {}: duplicate form {:?} with tag {:?}", lineno, word, tag);
                continue;
            }
            forms.push(LexemeForm { word, tag });
        }
        Self::finish_lexeme(&mut lexemes, &mut forms, &mut seen);

        if lexemes.is_empty() {
            return Err(MorphError::invalid_argument(
                "rdr",
                "The dictionary source contains no lexemes.",
            ));
        }
        log::info!("[ukmorph] Built a dictionary of {} lexemes", lexemes.len());

        Dictionary::from_lexemes(lexemes)
    }

    fn finish_lexeme(
        lexemes: &mut Vec<Lexeme>,
        forms: &mut Vec<LexemeForm>,
        seen: &mut HashSet<(String, String)>,
    ) {
        seen.clear();
        if !forms.is_empty() {
            lexemes.push(Lexeme::new(std::mem::take(forms)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_without_ids() {
        let dump = "СТІЛ\tNOUN,inan,masc sing,nomn\nСТОЛА\tNOUN,inan,masc sing,gent\n\n\
                    НА\tPREP\n";
        let dict = DictionaryBuilder::from_reader(dump.as_bytes()).unwrap();
        assert_eq!(dict.num_lexemes(), 2);
        assert_eq!(dict.lexeme(0).unwrap().normal_form(), "стіл");
        assert_eq!(dict.lexeme(1).unwrap().forms().len(), 1);
    }

    #[test]
    fn test_id_line_starts_block() {
        let dump = "1\nНА\tPREP\n2\nВ\tPREP\n";
        let dict = DictionaryBuilder::from_reader(dump.as_bytes()).unwrap();
        assert_eq!(dict.num_lexemes(), 2);
    }

    #[test]
    fn test_crlf() {
        let dump = "1\r\nНА\tPREP\r\n\r\n";
        let dict = DictionaryBuilder::from_reader(dump.as_bytes()).unwrap();
        assert_eq!(dict.lexeme(0).unwrap().forms()[0].tag, "PREP");
    }

    #[test]
    fn test_duplicates_skipped() {
        let dump = "НА\tPREP\nНА\tPREP\nна\tPREP\n";
        let dict = DictionaryBuilder::from_reader(dump.as_bytes()).unwrap();
        assert_eq!(dict.lexeme(0).unwrap().forms().len(), 1);
    }

    #[test]
    fn test_malformed_line() {
        let dump = "1\nНА\tPREP\nкнига NOUN\n";
        let err = DictionaryBuilder::from_reader(dump.as_bytes()).unwrap_err();
        assert!(matches!(err, MorphError::InvalidFormat(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_empty_source() {
        let result = DictionaryBuilder::from_reader("\n\n1\n".as_bytes());
        assert!(matches!(result, Err(MorphError::InvalidArgument(_))));
    }
}
