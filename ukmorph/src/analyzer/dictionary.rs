use hashbrown::HashSet;

use crate::analyzer::{check_word, Analysis, Analyzer};
use crate::dictionary::Dictionary;
use crate::errors::{MorphError, Result};
use crate::localize::{Localizer, OPENCORPORA};
use crate::tag::{Tag, WordForm};
use crate::tagset::opencorpora::parse_tag;

/// 辞書に無い語に付けられる品詞
pub const UNKNOWN_POS: &str = "UNKN";

/// 辞書による1つの解析候補
///
/// 辞書を借用する軽量なビューです。語彙素の語形は[`Parse::lexeme`]で列挙します。
#[derive(Debug, Clone)]
pub struct Parse<'d> {
    dict: &'d Dictionary,
    word: String,
    normal_form: String,
    tag: Tag,
    lexeme_id: Option<u32>,
}

impl<'d> Parse<'d> {
    /// 解析された(小文字化済みの)語形を返します。
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 正規形を返します。
    pub fn normal_form(&self) -> &str {
        &self.normal_form
    }

    /// 語形のタグを返します。
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// 辞書に無い語の解析候補であれば`true`を返します。
    pub fn is_unknown(&self) -> bool {
        self.lexeme_id.is_none()
    }

    /// 正規形を共有するすべての語形を辞書順に返します。
    ///
    /// 辞書に無い語では、その語自身のみを返します。
    pub fn lexeme(&self) -> Vec<WordForm> {
        let Some(lexeme) = self.lexeme_id.and_then(|id| self.dict.lexeme(id)) else {
            return vec![WordForm::new(self.word.clone(), self.tag.clone())];
        };
        lexeme
            .forms()
            .iter()
            .map(|f| WordForm::new(f.word.clone(), parse_tag(&f.tag)))
            .collect()
    }
}

/// パラダイム辞書による解析器
///
/// 検索は大文字小文字を区別しません。解析候補は語彙素ID、語形位置の順に並び、
/// 同じ語彙素内で同じタグを持つ候補は1つにまとめられます。
pub struct MorphAnalyzer {
    dict: Dictionary,
}

impl MorphAnalyzer {
    /// 新しい解析器を作成します。
    pub fn new(dict: Dictionary) -> Self {
        Self { dict }
    }

    /// 辞書への参照を返します。
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// 語のすべての解析候補を順位順に返します。
    ///
    /// 辞書に無い語には、タグ`UNKN`、正規形が小文字化した語そのものである
    /// 候補を1つ返します。
    ///
    /// # 引数
    ///
    /// * `word` - 解析する語
    ///
    /// # エラー
    ///
    /// 語が空の場合にエラーを返します。
    pub fn parse(&self, word: &str) -> Result<Vec<Parse<'_>>> {
        check_word(word)?;
        let word = word.trim().to_lowercase();

        let refs = self.dict.lookup(&word);
        if refs.is_empty() {
            log::debug!("[ukmorph] {:?} is not in the dictionary", word);
            return Ok(vec![Parse {
                dict: &self.dict,
                normal_form: word.clone(),
                word,
                tag: Tag::new().with_pos(UNKNOWN_POS),
                lexeme_id: None,
            }]);
        }

        let mut seen = HashSet::new();
        let mut parses = vec![];
        for &form_ref in refs {
            let (Some(lexeme), Some(form)) =
                (self.dict.lexeme(form_ref.lexeme_id), self.dict.form(form_ref))
            else {
                continue;
            };
            if !seen.insert((form_ref.lexeme_id, form.tag.as_str())) {
                continue;
            }
            parses.push(Parse {
                dict: &self.dict,
                word: word.clone(),
                normal_form: lexeme.normal_form().to_string(),
                tag: parse_tag(&form.tag),
                lexeme_id: Some(form_ref.lexeme_id),
            });
        }
        Ok(parses)
    }
}

impl Analyzer for MorphAnalyzer {
    fn analyze(&mut self, word: &str) -> Result<Analysis> {
        let parses = self.parse(word)?;
        // parse() always yields at least one candidate
        let Some(best) = parses.into_iter().next() else {
            return Err(MorphError::EmptyAnalysis(word.to_string()));
        };
        log::debug!("[ukmorph] {} -> {}", word, best.normal_form());

        Ok(Analysis {
            word: word.to_string(),
            lemma: best.normal_form.clone(),
            lemma_tag: best.tag.clone(),
            lexeme: best.lexeme(),
            tag: best.tag,
        })
    }

    fn localizer(&self) -> &Localizer {
        &OPENCORPORA
    }
}
