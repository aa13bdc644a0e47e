//! パラダイム辞書のビルドモジュール
//!
//! このモジュールは、OpenCorpora形式のテキストダンプから
//! zstd圧縮されたバイナリ形式の辞書を構築する機能を提供します。

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use ukmorph::dictionary::{Dictionary, DictionaryBuilder};
use ukmorph::errors::MorphError;

use clap::Parser;

/// ビルドコマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "build",
    about = "A program to build the paradigm dictionary."
)]
pub struct Args {
    /// OpenCorpora-style dictionary dump (blocks of `form<TAB>tag` lines).
    #[clap(short = 'd', long)]
    dump_in: PathBuf,

    /// File to which the binary dictionary is output (in zstd).
    #[clap(short = 'o', long)]
    dict_out: PathBuf,

    /// Zstandard compression level.
    #[clap(long, default_value = "19")]
    level: i32,
}

/// ビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 辞書構築エラー
    #[error("Dictionary building failed: {0}")]
    Morph(#[from] MorphError),
}

/// ビルドコマンドを実行する
///
/// ダンプから辞書を構築し、zstd圧縮したバイナリ形式で出力します。
///
/// # エラー
///
/// ファイルの読み書きや辞書構築に失敗した場合、`BuildError`を返します。
pub fn run(args: Args) -> Result<(), BuildError> {
    println!("Compiling the paradigm dictionary...");
    let dict = build_dictionary(&args.dump_in)?;
    println!("{} lexemes", dict.num_lexemes());

    println!("Writing the paradigm dictionary...");
    let file = File::create(&args.dict_out)?;
    let mut encoder = zstd::Encoder::new(file, args.level)?;
    dict.write(&mut encoder)?;
    encoder.finish()?;

    println!("Successfully built the dictionary to {}", args.dict_out.display());
    Ok(())
}

/// ダンプファイルから辞書を構築する
///
/// CLIに依存しないコアのビルドロジックです。
pub fn build_dictionary(dump: &Path) -> Result<Dictionary, BuildError> {
    let dict = DictionaryBuilder::from_reader(BufReader::new(File::open(dump)?))?;
    Ok(dict)
}
