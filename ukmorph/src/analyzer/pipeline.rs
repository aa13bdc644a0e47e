use crate::analyzer::{check_word, Analysis, Analyzer};
use crate::errors::{MorphError, Result};
use crate::localize::{Localizer, UNIVERSAL};
use crate::pipeline::Pipeline;

/// [`Pipeline`]による解析器
///
/// 最上位の解析結果は、最初の文の最初の語です。見出し語のタグは、
/// 見出し語を改めてパイプラインで解析して得ます。パイプラインは語形を
/// 列挙できないため、語彙素は常に空です。
pub struct PipelineAnalyzer<P> {
    pipeline: P,
}

impl<P: Pipeline> PipelineAnalyzer<P> {
    /// 新しい解析器を作成します。
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// パイプラインへの参照を返します。
    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// 解析器を分解してパイプラインを返します。
    pub fn into_inner(self) -> P {
        self.pipeline
    }
}

impl<P: Pipeline> Analyzer for PipelineAnalyzer<P> {
    fn analyze(&mut self, word: &str) -> Result<Analysis> {
        check_word(word)?;

        let doc = self.pipeline.process(word)?;
        let best = doc
            .first_word()
            .ok_or_else(|| MorphError::EmptyAnalysis(word.to_string()))?;
        let lemma = best.lemma_or_text().to_string();
        let tag = best.tag();
        log::debug!("[ukmorph] {} -> {} ({})", word, lemma, best.upos);

        let lemma_doc = self.pipeline.process(&lemma)?;
        let lemma_tag = lemma_doc
            .first_word()
            .ok_or_else(|| MorphError::EmptyAnalysis(lemma.clone()))?
            .tag();

        Ok(Analysis {
            word: word.to_string(),
            lemma,
            tag,
            lemma_tag,
            lexeme: vec![],
        })
    }

    fn localizer(&self) -> &Localizer {
        &UNIVERSAL
    }
}
