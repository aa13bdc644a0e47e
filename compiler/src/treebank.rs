//! ツリーバンクモデルのコンパイルモジュール
//!
//! CoNLL-U形式のツリーバンクから語彙モデルを構築し、
//! `TreebankModel::from_path`で読み込めるファイルに出力します。

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use ukmorph::errors::MorphError;
use ukmorph::pipeline::TreebankModel;

use clap::Parser;

/// treebankコマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "treebank",
    about = "A program to compile a CoNLL-U treebank into a lexicon model."
)]
pub struct Args {
    /// Treebank in CoNLL-U format.
    #[clap(short = 'i', long)]
    conllu_in: PathBuf,

    /// File to which the compiled model is output.
    #[clap(short = 'o', long)]
    model_out: PathBuf,
}

/// コンパイル処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum TreebankError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// モデル構築エラー
    #[error("Model compilation failed: {0}")]
    Morph(#[from] MorphError),
}

/// treebankコマンドを実行する
///
/// # エラー
///
/// ファイルの読み書きやCoNLL-Uの解析に失敗した場合、`TreebankError`を返します。
pub fn run(args: Args) -> Result<(), TreebankError> {
    println!("Compiling the treebank...");
    let model = TreebankModel::from_conllu(BufReader::new(File::open(&args.conllu_in)?))?;
    println!("{} forms", model.num_forms());

    println!("Writing the model...");
    model.write(BufWriter::new(File::create(&args.model_out)?))?;

    println!("Successfully compiled the model to {}", args.model_out.display());
    Ok(())
}
