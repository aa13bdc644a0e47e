//! Universal Dependenciesの`FEATS`列のパーサー
//!
//! `FEATS`は`Case=Nom|Gender=Fem|Number=Sing`のような`Key=Value`の
//! パイプ区切りの列です。値が無い場合は`_`で表されます。

use crate::tag::{Category, Tag};

/// 未指定を表すCoNLL-Uの記号
pub const UNSPECIFIED: &str = "_";

/// 特徴量のキーに対応するカテゴリを返します。
pub fn category_of(key: &str) -> Option<Category> {
    match key {
        "Case" => Some(Category::Case),
        "Number" => Some(Category::Number),
        "Gender" => Some(Category::Gender),
        "Aspect" => Some(Category::Aspect),
        "Tense" => Some(Category::Tense),
        "Person" => Some(Category::Person),
        _ => None,
    }
}

/// UPOSと`FEATS`から[`Tag`]を作成します。
///
/// 認識されないキーは無視され、`=`を含まない項目は読み飛ばされます。
/// `Gender=Fem,Masc`のような複数値はそのまま保持されます。
///
/// # 引数
///
/// * `upos` - 品詞(UPOS)。空文字列または`_`は品詞なしとして扱われます。
/// * `feats` - `FEATS`列。空文字列または`_`は特徴量なしとして扱われます。
///
/// # 例
///
/// ```
/// use ukmorph::tag::Category;
/// use ukmorph::tagset::ud::parse_feats;
///
/// let tag = parse_feats("NOUN", "Animacy=Inan|Case=Nom|Gender=Fem|Number=Sing");
/// assert_eq!(tag.pos(), Some("NOUN"));
/// assert_eq!(tag.get(Category::Case), Some("Nom"));
/// assert_eq!(tag.get(Category::Gender), Some("Fem"));
/// ```
pub fn parse_feats(upos: &str, feats: &str) -> Tag {
    let mut tag = Tag::new();
    if !is_unspecified(upos) {
        tag.set_pos(upos);
    }
    if is_unspecified(feats) {
        return tag;
    }

    for feat in feats.split('|') {
        let Some((key, value)) = feat.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if let Some(category) = category_of(key) {
            tag.set(category, value);
        }
    }
    tag
}

#[inline(always)]
fn is_unspecified(field: &str) -> bool {
    let field = field.trim();
    field.is_empty() || field == UNSPECIFIED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_feats() {
        let tag = parse_feats(
            "VERB",
            "Aspect=Imp|Mood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin",
        );
        assert_eq!(tag.get(Category::Aspect), Some("Imp"));
        assert_eq!(tag.get(Category::Number), Some("Sing"));
        assert_eq!(tag.get(Category::Person), Some("3"));
        assert_eq!(tag.get(Category::Tense), Some("Pres"));
        assert_eq!(tag.get(Category::Case), None);
    }

    #[test]
    fn test_parse_unspecified() {
        assert!(parse_feats("_", "_").is_empty());
        assert!(parse_feats("", "").is_empty());
        let tag = parse_feats("PUNCT", "_");
        assert_eq!(tag.pos(), Some("PUNCT"));
        for category in Category::ALL {
            assert_eq!(tag.get(category), None);
        }
    }

    #[test]
    fn test_parse_malformed_items() {
        let tag = parse_feats("NOUN", "Case|Number=|Gender=Fem,Masc||Foo=Bar");
        assert_eq!(tag.get(Category::Case), None);
        assert_eq!(tag.get(Category::Number), None);
        assert_eq!(tag.get(Category::Gender), Some("Fem,Masc"));
    }
}
