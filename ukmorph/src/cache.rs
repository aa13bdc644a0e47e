//! コンパイル済みモデルのキャッシュ
//!
//! ツリーバンクから構築した語彙モデルは、初回実行時に一度だけコンパイルされ、
//! キャッシュディレクトリに保存されます。キャッシュファイル名は入力ファイルの
//! メタデータから計算したハッシュです。

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use sha2::{Digest, Sha256};

use crate::errors::{MorphError, Result};

/// グローバルキャッシュディレクトリのパス。
///
/// ユーザー固有のシステムキャッシュディレクトリ内の`ukmorph`サブディレクトリを指します。
/// - Linux: `$XDG_CACHE_HOME/ukmorph` または `$HOME/.cache/ukmorph`
/// - macOS: `$HOME/Library/Caches/ukmorph`
/// - Windows: `{FOLDERID_LocalAppData}/ukmorph`
pub static GLOBAL_CACHE_DIR: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    let path = dirs::cache_dir()?.join("ukmorph");
    fs::create_dir_all(&path).ok()?;

    Some(path)
});

/// グローバルデータディレクトリのパス。
///
/// ユーザー固有のローカルデータディレクトリ内の`ukmorph`サブディレクトリを指します。
/// - Linux: `$XDG_DATA_HOME/ukmorph` または `$HOME/.local/share/ukmorph`
/// - macOS: `$HOME/Library/Application Support/ukmorph`
/// - Windows: `{FOLDERID_LocalAppData}/ukmorph`
pub static GLOBAL_DATA_DIR: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    let path = dirs::data_local_dir()?.join("ukmorph");
    fs::create_dir_all(&path).ok()?;

    Some(path)
});

/// コンパイル済みモデルのキャッシング戦略を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheStrategy {
    /// 入力ファイルと同じディレクトリに`.cache`サブディレクトリを作成します。
    ///
    /// 親ディレクトリが書き込み可能でない場合は失敗します。
    Local,

    /// 共有のユーザー固有キャッシュディレクトリ([`GLOBAL_CACHE_DIR`])を使用します。
    #[default]
    GlobalCache,

    /// 共有のユーザー固有データディレクトリ([`GLOBAL_DATA_DIR`])を使用します。
    GlobalData,
}

impl CacheStrategy {
    /// 入力ファイルに対するキャッシュディレクトリを決定し、作成します。
    ///
    /// # 引数
    ///
    /// * `source` - キャッシュ対象の入力ファイルへのパス
    ///
    /// # エラー
    ///
    /// ディレクトリを決定できない、または作成できない場合にエラーを返します。
    pub fn cache_dir(self, source: &Path) -> Result<PathBuf> {
        match self {
            CacheStrategy::Local => {
                let parent = source.parent().ok_or_else(|| {
                    MorphError::invalid_argument(
                        "source",
                        "Input path must have a parent directory for the Local cache strategy.",
                    )
                })?;
                let local_cache = parent.join(".cache");
                fs::create_dir_all(&local_cache)?;
                Ok(local_cache)
            }
            CacheStrategy::GlobalCache => GLOBAL_CACHE_DIR.clone().ok_or_else(|| {
                MorphError::invalid_state("Could not determine system cache directory.", "")
            }),
            CacheStrategy::GlobalData => GLOBAL_DATA_DIR.clone().ok_or_else(|| {
                MorphError::invalid_state("Could not determine local data directory.", "")
            }),
        }
    }
}

/// ファイルメタデータからハッシュを計算します。
///
/// ファイルが置き換えられるとハッシュも変わるため、古いキャッシュは使用されません。
///
/// # 戻り値
///
/// メタデータのSHA256ハッシュの16進数表現文字列。
pub(crate) fn compute_metadata_hash(meta: &Metadata) -> String {
    let mut hasher = Sha256::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        hasher.update(meta.dev().to_le_bytes());
        hasher.update(meta.ino().to_le_bytes());
        hasher.update(meta.size().to_le_bytes());
        hasher.update(meta.mtime().to_le_bytes());
        hasher.update(meta.mtime_nsec().to_le_bytes());
    }
    #[cfg(not(unix))]
    {
        hasher.update(meta.len().to_le_bytes());
        if let Ok(modified) = meta.modified() {
            if let Ok(since) = modified.duration_since(std::time::UNIX_EPOCH) {
                hasher.update(since.as_nanos().to_le_bytes());
            }
        }
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("uk.conllu");
        let cache_dir = CacheStrategy::Local.cache_dir(&source).unwrap();
        assert_eq!(cache_dir, dir.path().join(".cache"));
        assert!(cache_dir.is_dir());
    }

    #[test]
    fn test_metadata_hash_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "книга").unwrap();
        let before = compute_metadata_hash(&fs::metadata(&path).unwrap());
        assert_eq!(before.len(), 64);
        fs::write(&path, "книга стіл").unwrap();
        let after = compute_metadata_hash(&fs::metadata(&path).unwrap());
        assert_ne!(before, after);
    }
}
