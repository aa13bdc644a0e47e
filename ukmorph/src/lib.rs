//! # ukmorph
//!
//! ukmorphは、ウクライナ語の語を形態素解析し、その結果をウクライナ語で
//! ローカライズされたグリッド形式の表として出力するライブラリです。
//!
//! ## 概要
//!
//! 入力語ごとに、見出し語、品詞、6つの文法カテゴリ(格、数、性、相、時制、人称)を
//! 表示します。見出し語を共有する語形(パラダイム)を列挙することもできます。
//!
//! ## 主な機能
//!
//! - **パラダイム辞書による解析**: OpenCorpora形式のダンプから構築した辞書を使用
//! - **UDパイプラインによる解析**: ツリーバンクから学習した語彙、または外部のCoNLL-U出力タガーを使用
//! - **タグのローカライズ**: 2つのタグ体系をウクライナ語の表示名に変換
//! - **グリッド形式の表**: Unicodeの表示幅で揃えたテキスト表
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ukmorph::dictionary::DictionaryBuilder;
//! use ukmorph::{MorphAnalyzer, MorphologyTable};
//!
//! let dump = "1
//! книга\tNOUN,inan,femn sing,nomn
//! книги\tNOUN,inan,femn sing,gent
//! ";
//! let dict = DictionaryBuilder::from_reader(dump.as_bytes())?;
//!
//! let mut table = MorphologyTable::new(MorphAnalyzer::new(dict)).show_forms(false);
//! let text = table.generate_table(["Книга"])?;
//!
//! let lines: Vec<&str> = text.lines().collect();
//! assert_eq!(lines.len(), 7);
//! assert!(lines[3].starts_with("| Книга           | книга "));
//! assert!(lines[3].contains("| Іменник "));
//! assert!(lines[3].contains("| Називний "));
//! assert!(lines[5].starts_with("|                 | +    "));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// 解析器アダプター
pub mod analyzer;

/// マジックバイト付きアーカイブの読み書き
mod archive;

/// 辞書キャッシュの配置
pub mod cache;

/// パラダイム辞書とビルダー
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// タグのローカライズ
pub mod localize;

/// UDパイプライン
pub mod pipeline;

/// 表の描画
pub mod render;

/// 表の生成
pub mod table;

/// 共通のタグ表現
pub mod tag;

/// タグ体系ごとのパーサー
pub mod tagset;


// Re-exports
pub use analyzer::{Analyzer, MorphAnalyzer, PipelineAnalyzer};
pub use cache::CacheStrategy;
pub use dictionary::Dictionary;
pub use pipeline::Pipeline;
pub use table::MorphologyTable;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
