//! 文法タグの共通表現
//!
//! 2種類の解析器(OpenCorpora系の辞書解析器とUniversal Dependencies系の
//! パイプライン)はどちらも、このモジュールの[`Tag`]に変換されます。

use std::fmt;

/// 表に表示される6つの文法カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 格
    Case,
    /// 数
    Number,
    /// 性
    Gender,
    /// 相
    Aspect,
    /// 時制
    Tense,
    /// 人称
    Person,
}

impl Category {
    /// 表の列順に並んだすべてのカテゴリ
    pub const ALL: [Category; 6] = [
        Category::Case,
        Category::Number,
        Category::Gender,
        Category::Aspect,
        Category::Tense,
        Category::Person,
    ];

    /// [`Category::ALL`]内での位置を返します。
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// カテゴリの名前を返します。
    pub const fn name(self) -> &'static str {
        match self {
            Category::Case => "case",
            Category::Number => "number",
            Category::Gender => "gender",
            Category::Aspect => "aspect",
            Category::Tense => "tense",
            Category::Person => "person",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 1つの語形を記述する文法タグ
///
/// 各フィールドは解析器固有の生のコード(`nomn`、`Nom`など)を保持します。
/// どのフィールドも欠落している可能性があります。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pos: Option<String>,
    values: [Option<String>; 6],
}

impl Tag {
    /// すべてのフィールドが欠落した空のタグを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 品詞コードを設定したタグを返します。
    pub fn with_pos<S: Into<String>>(mut self, pos: S) -> Self {
        self.set_pos(pos);
        self
    }

    /// 指定カテゴリの値を設定したタグを返します。
    ///
    /// # 例
    ///
    /// ```
    /// use ukmorph::tag::{Category, Tag};
    ///
    /// let tag = Tag::new().with_pos("NOUN").with(Category::Case, "nomn");
    /// assert_eq!(tag.pos(), Some("NOUN"));
    /// assert_eq!(tag.get(Category::Case), Some("nomn"));
    /// assert_eq!(tag.get(Category::Tense), None);
    /// ```
    pub fn with<S: Into<String>>(mut self, category: Category, value: S) -> Self {
        self.set(category, value);
        self
    }

    /// 品詞コードを設定します。
    pub fn set_pos<S: Into<String>>(&mut self, pos: S) {
        self.pos = Some(pos.into());
    }

    /// 指定カテゴリの値を設定します。既存の値は上書きされます。
    pub fn set<S: Into<String>>(&mut self, category: Category, value: S) {
        self.values[category.index()] = Some(value.into());
    }

    /// 品詞コードを返します。
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    /// 指定カテゴリの生のコードを返します。
    #[inline(always)]
    pub fn get(&self, category: Category) -> Option<&str> {
        self.values[category.index()].as_deref()
    }

    /// 品詞もカテゴリ値も持たない場合に`true`を返します。
    pub fn is_empty(&self) -> bool {
        self.pos.is_none() && self.values.iter().all(Option::is_none)
    }
}

/// 語形とその文法タグ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForm {
    /// 語形の表層文字列
    pub word: String,
    /// 語形のタグ
    pub tag: Tag,
}

impl WordForm {
    /// 新しい語形を作成します。
    pub fn new<S: Into<String>>(word: S, tag: Tag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag() {
        let tag = Tag::new();
        assert!(tag.is_empty());
        for category in Category::ALL {
            assert_eq!(tag.get(category), None);
        }
        assert_eq!(tag.pos(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut tag = Tag::new().with(Category::Number, "sing");
        tag.set(Category::Number, "plur");
        assert_eq!(tag.get(Category::Number), Some("plur"));
        assert!(!tag.is_empty());
    }

    #[test]
    fn test_category_order() {
        let indices: Vec<_> = Category::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }
}
