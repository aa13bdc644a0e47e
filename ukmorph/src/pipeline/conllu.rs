//! CoNLL-U形式の読み込み
//!
//! 各行はタブで区切られた10列(ID、FORM、LEMMA、UPOS、XPOS、FEATS、HEAD、
//! DEPREL、DEPS、MISC)です。`#`で始まる行はコメント、空行は文の終わりを表します。
//! 複数語トークンの範囲行(`1-2`)と空ノード(`1.1`)は読み飛ばします。

use std::io::{BufRead, BufReader, Read};

use crate::errors::{MorphError, Result};
use crate::pipeline::{Document, Sentence, UdWord};

/// CoNLL-Uの列数
const NUM_COLUMNS: usize = 10;

/// CoNLL-U形式のテキストを読み込みます。
///
/// # 引数
///
/// * `rdr` - CoNLL-Uテキストのリーダー
///
/// # 戻り値
///
/// 読み込まれた文の列
///
/// # エラー
///
/// 列数が10でない行がある場合、行番号を含む[`MorphError::InvalidFormat`]を返します。
///
/// # 例
///
/// ```
/// use ukmorph::pipeline::conllu::parse_conllu;
///
/// let text = "# text = Книга.\n\
///             1\tКнига\tкнига\tNOUN\t_\tCase=Nom\t0\troot\t_\tSpaceAfter=No\n\
///             2\t.\t.\tPUNCT\t_\t_\t1\tpunct\t_\t_\n\n";
/// let doc = parse_conllu(text.as_bytes())?;
/// assert_eq!(doc.sentences.len(), 1);
/// assert_eq!(doc.sentences[0].words[0].lemma, "книга");
/// # Ok::<(), ukmorph::errors::MorphError>(())
/// ```
pub fn parse_conllu<R>(rdr: R) -> Result<Document>
where
    R: Read,
{
    let buf = BufReader::new(rdr);

    let mut sentences = vec![];
    let mut words = vec![];
    for (i, line) in buf.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !words.is_empty() {
                sentences.push(Sentence { words: std::mem::take(&mut words) });
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() != NUM_COLUMNS {
            return Err(MorphError::invalid_format(
                "rdr",
                format!(
                    "line {}: expected {} tab-separated columns, got {}",
                    i + 1,
                    NUM_COLUMNS,
                    cols.len()
                ),
            ));
        }

        let id = cols[0];
        if id.contains('-') || id.contains('.') {
            continue;
        }
        words.push(UdWord::new(cols[1], cols[2], cols[3], cols[5]));
    }
    if !words.is_empty() {
        sentences.push(Sentence { words });
    }

    Ok(Document { sentences })
}
