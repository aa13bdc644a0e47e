//! 形態論テーブルを出力するユーティリティ
//!
//! このバイナリは、コマンドライン引数または標準入力から読み込んだウクライナ語の語を
//! 解析し、ローカライズされたグリッド形式の表を標準出力に出力します。

use std::error::Error;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

use ukmorph::pipeline::{CommandPipeline, TreebankModel, TreebankPipeline};
use ukmorph::{Analyzer, CacheStrategy, Dictionary, MorphAnalyzer, MorphologyTable, PipelineAnalyzer};

use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

/// ツリーバンクモデルのキャッシュ配置
#[derive(Clone, Copy, Debug)]
enum CacheMode {
    Local,
    GlobalCache,
    GlobalData,
}

/// `CacheMode` の `FromStr` 実装
impl FromStr for CacheMode {
    type Err = &'static str;

    /// 文字列からキャッシュ配置をパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"local"、"global-cache"、"global-data"のいずれか）
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "local" => Ok(Self::Local),
            "global-cache" => Ok(Self::GlobalCache),
            "global-data" => Ok(Self::GlobalData),
            _ => Err("Could not parse a cache mode"),
        }
    }
}

impl From<CacheMode> for CacheStrategy {
    fn from(mode: CacheMode) -> Self {
        match mode {
            CacheMode::Local => CacheStrategy::Local,
            CacheMode::GlobalCache => CacheStrategy::GlobalCache,
            CacheMode::GlobalData => CacheStrategy::GlobalData,
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(
    name = "ukmorph-table",
    about = "Prints a morphology table of Ukrainian words",
    group(ArgGroup::new("backend").required(true).args(["dict", "treebank", "command"]))
)]
struct Args {
    /// Paradigm dictionary compiled by `compiler build` (.dic or .dic.zst).
    #[clap(short = 'i', long)]
    dict: Option<PathBuf>,

    /// CoNLL-U treebank used as a lexicon (compiled and cached on first use).
    #[clap(short = 't', long)]
    treebank: Option<PathBuf>,

    /// External tagger that reads text on stdin and writes CoNLL-U to stdout.
    #[clap(short = 'c', long)]
    command: Option<String>,

    /// Argument passed to the external tagger. Can be repeated.
    #[clap(short = 'a', long = "arg", requires = "command", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Does not list the other forms of each lemma.
    #[clap(long)]
    no_forms: bool,

    /// Cache location of the compiled treebank. Choices are local, global-cache, and global-data.
    #[clap(long, default_value = "global-cache")]
    cache: CacheMode,

    /// Words to analyze. Reads whitespace-separated words from stdin if omitted.
    words: Vec<String>,
}

/// 引数で指定された解析器を構築する
fn build_analyzer(args: &Args) -> Result<Box<dyn Analyzer>, Box<dyn Error>> {
    if let Some(path) = &args.dict {
        eprintln!("Loading the dictionary...");
        let dict = Dictionary::from_path(path)?;
        return Ok(Box::new(MorphAnalyzer::new(dict)));
    }
    if let Some(path) = &args.treebank {
        eprintln!("Loading the treebank model...");
        let model = TreebankModel::load_cached(path, args.cache.into())?;
        return Ok(Box::new(PipelineAnalyzer::new(TreebankPipeline::new(model))));
    }
    if let Some(program) = &args.command {
        let pipeline = CommandPipeline::new(program, &args.args);
        return Ok(Box::new(PipelineAnalyzer::new(pipeline)));
    }
    Err("one of --dict, --treebank or --command is required".into())
}

/// メイン関数
///
/// 解析器を構築し、入力された語の表を標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e as Box<dyn Error>)?;

    let args = Args::parse();

    let analyzer = build_analyzer(&args)?;
    let mut table = MorphologyTable::new(analyzer).show_forms(!args.no_forms);

    let words = if args.words.is_empty() {
        let mut text = String::new();
        std::io::stdin().lock().read_to_string(&mut text)?;
        text.split_whitespace().map(str::to_string).collect()
    } else {
        args.words.clone()
    };

    eprintln!("Analyzing {} words...", words.len());
    let text = table.generate_table(&words)?;

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}
