//! OpenCorpora形式のタグ文字列のパーサー
//!
//! タグ文字列は`"NOUN,inan,femn sing,nomn"`のように、カンマまたは空白で
//! 区切られたグラミームの列です。先頭のグラミームが品詞を表し、
//! 残りは所属する集合によってカテゴリに振り分けられます。

use crate::tag::{Category, Tag};

/// 格のグラミーム
const CASES: &[&str] = &[
    "nomn", "gent", "gen1", "gen2", "datv", "accs", "acc2", "ablt", "loct", "loc1", "loc2",
    "voct",
];

/// 数のグラミーム
const NUMBERS: &[&str] = &["sing", "plur"];

/// 性のグラミーム
const GENDERS: &[&str] = &["masc", "femn", "neut", "ms-f", "Com"];

/// 相のグラミーム
const ASPECTS: &[&str] = &["perf", "impf"];

/// 時制のグラミーム
const TENSES: &[&str] = &["past", "pres", "futr"];

/// 人称のグラミーム
const PERSONS: &[&str] = &["1per", "2per", "3per"];

/// 品詞以外のグラミームが属するカテゴリを返します。
///
/// 有生性や他動性など、表に現れないグラミームには`None`を返します。
pub fn classify(grammeme: &str) -> Option<Category> {
    let sets = [
        (Category::Case, CASES),
        (Category::Number, NUMBERS),
        (Category::Gender, GENDERS),
        (Category::Aspect, ASPECTS),
        (Category::Tense, TENSES),
        (Category::Person, PERSONS),
    ];
    sets.into_iter()
        .find(|(_, set)| set.contains(&grammeme))
        .map(|(category, _)| category)
}

/// OpenCorpora形式のタグ文字列を[`Tag`]に変換します。
///
/// # 引数
///
/// * `raw` - タグ文字列
///
/// # 戻り値
///
/// 変換されたタグ。空の文字列からは空のタグが得られます。
///
/// # 例
///
/// ```
/// use ukmorph::tag::Category;
/// use ukmorph::tagset::opencorpora::parse_tag;
///
/// let tag = parse_tag("NOUN,inan,femn sing,nomn");
/// assert_eq!(tag.pos(), Some("NOUN"));
/// assert_eq!(tag.get(Category::Gender), Some("femn"));
/// assert_eq!(tag.get(Category::Number), Some("sing"));
/// assert_eq!(tag.get(Category::Case), Some("nomn"));
/// ```
pub fn parse_tag(raw: &str) -> Tag {
    let mut grammemes = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|g| !g.is_empty());

    let mut tag = Tag::new();
    let Some(pos) = grammemes.next() else {
        return tag;
    };
    tag.set_pos(pos);

    for grammeme in grammemes {
        if let Some(category) = classify(grammeme) {
            tag.set(category, grammeme);
        }
    }
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb() {
        let tag = parse_tag("VERB,impf,tran sing,3per,pres,indc");
        assert_eq!(tag.pos(), Some("VERB"));
        assert_eq!(tag.get(Category::Aspect), Some("impf"));
        assert_eq!(tag.get(Category::Number), Some("sing"));
        assert_eq!(tag.get(Category::Person), Some("3per"));
        assert_eq!(tag.get(Category::Tense), Some("pres"));
        assert_eq!(tag.get(Category::Case), None);
        assert_eq!(tag.get(Category::Gender), None);
    }

    #[test]
    fn test_parse_rare_grammemes() {
        let tag = parse_tag("NOUN,anim,ms-f sing,loc2");
        assert_eq!(tag.get(Category::Gender), Some("ms-f"));
        assert_eq!(tag.get(Category::Case), Some("loc2"));
    }

    #[test]
    fn test_parse_pos_only() {
        let tag = parse_tag("CONJ");
        assert_eq!(tag.pos(), Some("CONJ"));
        for category in Category::ALL {
            assert_eq!(tag.get(category), None);
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_tag("").is_empty());
        assert!(parse_tag("  ").is_empty());
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("anim"), None);
        assert_eq!(classify("tran"), None);
        assert_eq!(classify("gen2"), Some(Category::Case));
    }
}
