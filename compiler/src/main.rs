//! ukmorph 辞書コンパイラのメインエントリーポイント
//!
//! このモジュールは、解析器が使用するバイナリファイルを構築するサブコマンドを提供します。
//! パラダイム辞書のビルドと、ツリーバンクからの語彙モデルのコンパイルを統合したCLIツールです。

mod build;
mod treebank;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{build::BuildError, treebank::TreebankError};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// テキストダンプからパラダイム辞書を構築します
    ///
    /// OpenCorpora形式のダンプからzstd圧縮されたバイナリ辞書を生成します。
    Build(build::Args),

    /// ツリーバンクから語彙モデルをコンパイルします
    ///
    /// CoNLL-U形式のツリーバンクから、語形ごとに最頻の注釈を持つモデルを生成します。
    Treebank(treebank::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// 辞書ビルド中のエラー
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// モデルのコンパイル中のエラー
    #[error(transparent)]
    TreebankError(#[from] TreebankError),
    /// ログ出力の初期化エラー
    #[error("Failed to install the log subscriber: {0}")]
    Logging(String),
}

/// 標準エラー出力へのログ出力を初期化する
///
/// 出力レベルは環境変数`RUST_LOG`で指定します。
///
/// # エラー
///
/// グローバルなサブスクライバーが既に設定されている場合、`CompileError::Logging`を返します。
fn init_logging() -> Result<(), CompileError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CompileError::Logging(e.to_string()))
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
///
/// # エラー
///
/// 各サブコマンドの実行中にエラーが発生した場合、そのエラーが返されます。
fn main() -> Result<(), CompileError> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => Ok(build::run(args)?),
        Command::Treebank(args) => Ok(treebank::run(args)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        let _ = init_logging();
        assert!(matches!(init_logging(), Err(CompileError::Logging(_))));
    }
}
