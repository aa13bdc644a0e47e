//! タグのローカライズ
//!
//! 解析器の内部コードをウクライナ語の表示名に変換します。
//! 対応表は静的で、プロセス内で一度だけ構築されます。
//! 対応表に無いコードはエラーにせず、そのまま表示されます。

use std::sync::LazyLock;

use hashbrown::HashMap;

use crate::tag::{Category, Tag};

/// カテゴリ値が欠落している場合のプレースホルダー
pub const PLACEHOLDER: &str = "-";

/// OpenCorpora系タグ用のローカライザー
///
/// 辞書解析器([`MorphAnalyzer`](crate::analyzer::MorphAnalyzer))が使用します。
pub static OPENCORPORA: LazyLock<Localizer> = LazyLock::new(|| {
    Localizer::from_tables(
        "opencorpora",
        [
            &[
                ("nomn", "Називний"),
                ("gent", "Родовий"),
                ("datv", "Давальний"),
                ("accs", "Знахідний"),
                ("ablt", "Орудний"),
                ("loct", "Місцевий"),
                ("voct", "Кличний"),
            ],
            &[("sing", "Однина"), ("plur", "Множина")],
            &[
                ("masc", "Чоловічий"),
                ("femn", "Жіночий"),
                ("neut", "Середній"),
                ("Com", "Спільний"),
            ],
            &[("perf", "Доконаний"), ("impf", "Недоконаний")],
            &[("past", "Минулий"), ("pres", "Теперішній"), ("futr", "Майбутній")],
            &[("1per", "1-ша"), ("2per", "2-га"), ("3per", "3-тя")],
        ],
        &[
            ("NOUN", "Іменник"),
            ("VERB", "Дієслово"),
            ("INFN", "Інфінітив"),
            ("ADJF", "Прикметник (повний)"),
            ("ADJS", "Прикметник (скорочений)"),
            ("PRTF", "Дієприкметник (повний)"),
            ("PRTS", "Дієприкметник (скорочений)"),
            ("GRND", "Дієприслівник"),
            ("NUMR", "Числівник"),
            ("ADVB", "Прислівник"),
            ("CONJ", "Сполучник"),
            ("PRCL", "Частка"),
            ("INTJ", "Вигук"),
            ("PREP", "Прийменник"),
            ("NPRO", "Займенник"),
        ],
    )
});

/// Universal Dependencies系タグ用のローカライザー
///
/// パイプライン解析器([`PipelineAnalyzer`](crate::analyzer::PipelineAnalyzer))が使用します。
pub static UNIVERSAL: LazyLock<Localizer> = LazyLock::new(|| {
    Localizer::from_tables(
        "universal",
        [
            &[
                ("Nom", "Називний"),
                ("Gen", "Родовий"),
                ("Dat", "Давальний"),
                ("Acc", "Знахідний"),
                ("Ins", "Орудний"),
                ("Loc", "Місцевий"),
                ("Voc", "Кличний"),
            ],
            &[("Sing", "Однина"), ("Plur", "Множина")],
            &[
                ("Masc", "Чоловічий"),
                ("Fem", "Жіночий"),
                ("Neut", "Середній"),
                ("Com", "Спільний"),
            ],
            &[("Perf", "Доконаний"), ("Imp", "Недоконаний")],
            &[("Past", "Минулий"), ("Pres", "Теперішній"), ("Fut", "Майбутній")],
            &[("1", "1-ша"), ("2", "2-га"), ("3", "3-тя")],
        ],
        &[
            ("NOUN", "Іменник"),
            ("VERB", "Дієслово"),
            ("ADJ", "Прикметник"),
            ("ADV", "Прислівник"),
            ("PRON", "Займенник"),
            ("NUM", "Числівник"),
            ("CONJ", "Сполучник"),
            ("PART", "Частка"),
            ("INTJ", "Вигук"),
            ("ADP", "Прийменник"),
            ("PROPN", "Іменник власний"),
        ],
    )
});

type Table = &'static [(&'static str, &'static str)];

/// ローカライズされた6つのカテゴリ値
///
/// 値は表の列順(格、数、性、相、時制、人称)に並びます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedTag {
    values: [String; 6],
}

impl LocalizedTag {
    /// 指定カテゴリの表示文字列を返します。
    pub fn get(&self, category: Category) -> &str {
        &self.values[category.index()]
    }

    /// 格の表示文字列
    pub fn case(&self) -> &str {
        self.get(Category::Case)
    }

    /// 数の表示文字列
    pub fn number(&self) -> &str {
        self.get(Category::Number)
    }

    /// 性の表示文字列
    pub fn gender(&self) -> &str {
        self.get(Category::Gender)
    }

    /// 相の表示文字列
    pub fn aspect(&self) -> &str {
        self.get(Category::Aspect)
    }

    /// 時制の表示文字列
    pub fn tense(&self) -> &str {
        self.get(Category::Tense)
    }

    /// 人称の表示文字列
    pub fn person(&self) -> &str {
        self.get(Category::Person)
    }

    /// 列順の配列に変換します。
    pub fn into_array(self) -> [String; 6] {
        self.values
    }
}

/// 1つのタグ体系に対するローカライザー
///
/// 6つのカテゴリ別の対応表と、品詞の対応表を保持します。
pub struct Localizer {
    name: &'static str,
    categories: [HashMap<&'static str, &'static str>; 6],
    pos: HashMap<&'static str, &'static str>,
}

impl Localizer {
    /// 静的な対応表からローカライザーを構築します。
    ///
    /// # 引数
    ///
    /// * `name` - タグ体系の名前
    /// * `categories` - [`Category::ALL`]の順に並んだカテゴリ別の対応表
    /// * `pos` - 品詞の対応表
    pub fn from_tables(name: &'static str, categories: [Table; 6], pos: Table) -> Self {
        Self {
            name,
            categories: categories.map(|table| table.iter().copied().collect()),
            pos: pos.iter().copied().collect(),
        }
    }

    /// タグ体系の名前を返します。
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 1つのカテゴリ値をローカライズします。
    ///
    /// 対応表にあるコードは表示名に、無いコードはそのまま、
    /// 欠落または空のコードは[`PLACEHOLDER`]になります。
    pub fn localize_value(&self, category: Category, code: Option<&str>) -> String {
        match code.filter(|c| !c.is_empty()) {
            Some(code) => self.categories[category.index()]
                .get(code)
                .copied()
                .unwrap_or(code)
                .to_string(),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// タグの6つのカテゴリ値をローカライズします。
    ///
    /// この関数は全域的であり、すべてのフィールドが欠落したタグに対しても
    /// 6つの文字列を返します。
    ///
    /// # 例
    ///
    /// ```
    /// use ukmorph::localize::UNIVERSAL;
    /// use ukmorph::tagset::ud::parse_feats;
    ///
    /// let tag = parse_feats("NOUN", "Case=Nom|Gender=Fem|Number=Sing");
    /// let localized = UNIVERSAL.localize(&tag);
    /// assert_eq!(localized.case(), "Називний");
    /// assert_eq!(localized.number(), "Однина");
    /// assert_eq!(localized.gender(), "Жіночий");
    /// assert_eq!(localized.aspect(), "-");
    /// ```
    pub fn localize(&self, tag: &Tag) -> LocalizedTag {
        LocalizedTag {
            values: Category::ALL.map(|category| self.localize_value(category, tag.get(category))),
        }
    }

    /// 品詞をローカライズします。
    ///
    /// 対応表に無いコードはそのまま返し、欠落または空の場合は空文字列を返します。
    pub fn localize_pos(&self, tag: &Tag) -> String {
        match tag.pos().filter(|p| !p.is_empty()) {
            Some(pos) => self.pos.get(pos).copied().unwrap_or(pos).to_string(),
            None => String::new(),
        }
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tagset::opencorpora::parse_tag;

    #[test]
    fn test_localize_all_absent() {
        for localizer in [&*OPENCORPORA, &*UNIVERSAL] {
            let localized = localizer.localize(&Tag::new());
            assert_eq!(localized.into_array(), ["-", "-", "-", "-", "-", "-"].map(String::from));
            assert_eq!(localizer.localize_pos(&Tag::new()), "");
        }
    }

    #[test]
    fn test_localize_opencorpora_verb() {
        let tag = parse_tag("VERB,perf,tran masc,sing,past,indc");
        let localized = OPENCORPORA.localize(&tag);
        assert_eq!(localized.case(), "-");
        assert_eq!(localized.number(), "Однина");
        assert_eq!(localized.gender(), "Чоловічий");
        assert_eq!(localized.aspect(), "Доконаний");
        assert_eq!(localized.tense(), "Минулий");
        assert_eq!(localized.person(), "-");
        assert_eq!(OPENCORPORA.localize_pos(&tag), "Дієслово");
    }

    #[test]
    fn test_localize_person() {
        let tag = Tag::new().with(Category::Person, "2per");
        assert_eq!(OPENCORPORA.localize(&tag).person(), "2-га");
        let tag = Tag::new().with(Category::Person, "3");
        assert_eq!(UNIVERSAL.localize(&tag).person(), "3-тя");
    }

    #[test]
    fn test_unmapped_codes_are_verbatim() {
        let tag = Tag::new()
            .with_pos("CCONJ")
            .with(Category::Case, "Par")
            .with(Category::Gender, "Fem,Masc");
        let localized = UNIVERSAL.localize(&tag);
        assert_eq!(localized.case(), "Par");
        assert_eq!(localized.gender(), "Fem,Masc");
        assert_eq!(localized.number(), "-");
        assert_eq!(UNIVERSAL.localize_pos(&tag), "CCONJ");
    }

    #[test]
    fn test_empty_codes_are_placeholders() {
        let tag = Tag::new().with_pos("").with(Category::Case, "");
        assert_eq!(UNIVERSAL.localize(&tag).case(), "-");
        assert_eq!(UNIVERSAL.localize_pos(&tag), "");
    }

    #[test]
    fn test_vocabularies_do_not_mix() {
        let tag = Tag::new().with(Category::Case, "nomn");
        assert_eq!(UNIVERSAL.localize(&tag).case(), "nomn");
        assert_eq!(OPENCORPORA.localize(&tag).case(), "Називний");
    }
}
