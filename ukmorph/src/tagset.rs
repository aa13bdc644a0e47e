//! 解析器固有のタグ文字列のパーサー
//!
//! - [`opencorpora`]: 辞書解析器が使用するOpenCorpora形式のグラミーム列
//! - [`ud`]: パイプラインが出力するUniversal Dependenciesの`FEATS`列
//!
//! どちらも共通の[`Tag`](crate::tag::Tag)を生成します。

pub mod opencorpora;
pub mod ud;
