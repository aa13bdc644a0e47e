//! 解析器アダプター
//!
//! 表の生成は[`Analyzer`]トレイトのみに依存します。
//!
//! - [`MorphAnalyzer`]: パラダイム辞書による解析器(OpenCorpora系タグ)
//! - [`PipelineAnalyzer`]: [`Pipeline`](crate::pipeline::Pipeline)による解析器(UD系タグ)
mod dictionary;
mod pipeline;

use crate::errors::{MorphError, Result};
use crate::localize::Localizer;
use crate::tag::{Tag, WordForm};

pub use crate::analyzer::dictionary::{MorphAnalyzer, Parse};
pub use crate::analyzer::pipeline::PipelineAnalyzer;

/// 1語の解析結果
///
/// 最上位の解析候補の内容です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// 入力された語
    pub word: String,
    /// 見出し語(正規形)
    pub lemma: String,
    /// 入力語のタグ
    pub tag: Tag,
    /// 見出し語のタグ
    pub lemma_tag: Tag,
    /// 見出し語を共有するすべての語形。解析器が列挙できない場合は空
    pub lexeme: Vec<WordForm>,
}

/// 1語を解析する解析器
///
/// 解析器は一度だけ構築され、すべての語に再利用されます。
pub trait Analyzer {
    /// 語を解析して最上位の解析結果を返します。
    ///
    /// # エラー
    ///
    /// 語が空の場合、または基礎となる解析器が失敗した場合にエラーを返します。
    fn analyze(&mut self, word: &str) -> Result<Analysis>;

    /// この解析器のタグ体系に対応するローカライザーを返します。
    fn localizer(&self) -> &Localizer;
}

impl<A: Analyzer + ?Sized> Analyzer for &mut A {
    fn analyze(&mut self, word: &str) -> Result<Analysis> {
        (**self).analyze(word)
    }

    fn localizer(&self) -> &Localizer {
        (**self).localizer()
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyze(&mut self, word: &str) -> Result<Analysis> {
        (**self).analyze(word)
    }

    fn localizer(&self) -> &Localizer {
        (**self).localizer()
    }
}

/// 空の語を拒否します。
pub(crate) fn check_word(word: &str) -> Result<()> {
    if word.trim().is_empty() {
        return Err(MorphError::invalid_argument("word", "The word must not be empty."));
    }
    Ok(())
}
