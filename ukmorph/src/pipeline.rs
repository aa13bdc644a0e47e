//! Universal Dependencies形式の解析パイプライン
//!
//! パイプラインはテキストを受け取り、文と語の列を返します。各語は
//! 表層形、見出し語、UPOS、`FEATS`を持ちます。
//!
//! # 実装
//!
//! - [`TreebankPipeline`]: CoNLL-Uツリーバンクから構築した語彙モデルによる解析
//! - [`CommandPipeline`]: CoNLL-Uを出力する外部タガー(例: `udpipe`)の呼び出し
pub mod command;
pub mod conllu;
pub mod treebank;

use crate::errors::Result;
use crate::tag::Tag;
use crate::tagset::ud::{self, parse_feats};

pub use crate::pipeline::command::CommandPipeline;
pub use crate::pipeline::treebank::{TreebankModel, TreebankPipeline};

/// 解析済みの1語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdWord {
    /// 表層形
    pub text: String,
    /// 見出し語。未指定の場合は`_`
    pub lemma: String,
    /// 品詞(UPOS)。未指定の場合は`_`
    pub upos: String,
    /// `Key=Value`のパイプ区切りの特徴量。未指定の場合は`_`
    pub feats: String,
}

impl UdWord {
    /// 新しい語を作成します。
    pub fn new<T, L, U, F>(text: T, lemma: L, upos: U, feats: F) -> Self
    where
        T: Into<String>,
        L: Into<String>,
        U: Into<String>,
        F: Into<String>,
    {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            upos: upos.into(),
            feats: feats.into(),
        }
    }

    /// UPOSと`FEATS`から共通のタグを作成します。
    pub fn tag(&self) -> Tag {
        parse_feats(&self.upos, &self.feats)
    }

    /// 見出し語を返します。未指定の場合は表層形を返します。
    pub fn lemma_or_text(&self) -> &str {
        let lemma = self.lemma.trim();
        if lemma.is_empty() || lemma == ud::UNSPECIFIED {
            &self.text
        } else {
            &self.lemma
        }
    }
}

/// 1つの文
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    /// 文中の語
    pub words: Vec<UdWord>,
}

/// パイプラインの出力
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// 文の列
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// 最初の文の最初の語を返します。
    pub fn first_word(&self) -> Option<&UdWord> {
        self.sentences.iter().flat_map(|s| s.words.iter()).next()
    }

    /// すべての語を出現順に返します。
    pub fn words(&self) -> impl Iterator<Item = &UdWord> {
        self.sentences.iter().flat_map(|s| s.words.iter())
    }
}

/// テキストを解析するパイプライン
pub trait Pipeline {
    /// テキストを解析して文と語の列を返します。
    ///
    /// # エラー
    ///
    /// 解析器が失敗した場合にエラーを返します。
    fn process(&mut self, text: &str) -> Result<Document>;
}

impl<P: Pipeline + ?Sized> Pipeline for &mut P {
    fn process(&mut self, text: &str) -> Result<Document> {
        (**self).process(text)
    }
}

impl<P: Pipeline + ?Sized> Pipeline for Box<P> {
    fn process(&mut self, text: &str) -> Result<Document> {
        (**self).process(text)
    }
}
