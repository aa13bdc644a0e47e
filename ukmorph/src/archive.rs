//! マジックバイト付き`rkyv`アーカイブのファイル形式
//!
//! ファイルはマジックバイト、16バイト境界までの`0xFF`パディング、
//! `rkyv`アーカイブの順に並びます。

use std::io::{Read, Write};

use rkyv::util::AlignedVec;

use crate::errors::{MorphError, Result};

const RKYV_ALIGNMENT: usize = 16;

/// マジックバイトの後ろに置くパディングの長さ
pub(crate) const fn padding_len(magic: &[u8]) -> usize {
    (RKYV_ALIGNMENT - (magic.len() % RKYV_ALIGNMENT)) % RKYV_ALIGNMENT
}

/// シリアライズ済みのアーカイブを書き込みます。
///
/// # 引数
///
/// * `wtr` - 出力先
/// * `magic` - ファイル形式を識別するマジックバイト
/// * `archive` - `rkyv`でシリアライズされたバイト列
pub(crate) fn write_archive<W: Write>(mut wtr: W, magic: &[u8], archive: &[u8]) -> Result<()> {
    wtr.write_all(magic)?;
    wtr.write_all(&vec![0xFF; padding_len(magic)])?;
    wtr.write_all(archive)?;
    wtr.flush()?;
    Ok(())
}

/// マジックバイトを検証し、アーカイブ部分を整列済みバッファに読み込みます。
///
/// # 引数
///
/// * `rdr` - 入力元
/// * `magic` - 期待するマジックバイト
/// * `kind` - エラーメッセージに使うファイルの種類
///
/// # エラー
///
/// 入力がマジックバイトより短い場合、またはマジックバイトが一致しない場合に
/// [`MorphError::InvalidArgument`]を返します。
pub(crate) fn read_archive<R: Read>(mut rdr: R, magic: &[u8], kind: &str) -> Result<AlignedVec> {
    let mut header = vec![0; magic.len()];
    rdr.read_exact(&mut header).map_err(|_| {
        MorphError::invalid_argument("rdr", format!("{} file too small or corrupted.", kind))
    })?;
    if header != magic {
        return Err(MorphError::invalid_argument(
            "rdr",
            format!("The magic number of the input {} mismatches.", kind),
        ));
    }

    let mut padding = vec![0; padding_len(magic)];
    rdr.read_exact(&mut padding)?;

    let mut buffer = Vec::new();
    rdr.read_to_end(&mut buffer)?;

    let mut aligned: AlignedVec = AlignedVec::with_capacity(buffer.len());
    aligned.extend_from_slice(&buffer);
    Ok(aligned)
}

/// シリアライズの失敗を[`MorphError::InvalidState`]に変換します。
pub(crate) fn serialization_failed(e: rkyv::rancor::Error) -> MorphError {
    MorphError::invalid_state("rkyv serialization failed", e.to_string())
}

/// 検証の失敗を[`MorphError::InvalidState`]に変換します。
pub(crate) fn validation_failed(kind: &str, e: rkyv::rancor::Error) -> MorphError {
    MorphError::invalid_state(
        format!(
            "rkyv validation failed. The {} file may be corrupted or incompatible.",
            kind
        ),
        e.to_string(),
    )
}
