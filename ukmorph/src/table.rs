//! 形態論テーブルの生成
//!
//! 入力語ごとに次の行を生成します。
//!
//! 1. 入力語の行: 入力語、見出し語、品詞、語形としての入力語、入力語の文法カテゴリ
//! 2. 見出し語の行: 見出し語の欄に`+`、語形としての見出し語と見出し語の文法カテゴリ
//! 3. 語形の行: 語形の列挙が有効な場合、見出し語を共有する語形ごとに1行
//!
//! 文法カテゴリはすべて解析器のローカライザーでウクライナ語の表示名に変換されます。
use crate::analyzer::Analyzer;
use crate::errors::Result;
use crate::localize::Localizer;
use crate::render::{Grid, Render};
use crate::tag::Tag;

/// 表の列数
pub const NUM_COLUMNS: usize = 10;

/// 表の1行
pub type Row = [String; NUM_COLUMNS];

/// 表のヘッダー行
pub const HEADERS: [&str; NUM_COLUMNS] = [
    "Введене слово",
    "Лема",
    "Частина мови",
    "Форма слова",
    "Відмінок",
    "Число",
    "Рід",
    "Вид",
    "Час",
    "Особа",
];

/// 見出し語の行の「見出し語」欄に入る記号
pub const LEMMA_MARKER: &str = "+";

/// 形態論テーブルの生成器
///
/// 解析器は一度だけ構築され、すべての語に再利用されます。
///
/// # 例
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use ukmorph::dictionary::DictionaryBuilder;
/// use ukmorph::{MorphAnalyzer, MorphologyTable};
///
/// let dump = "1\nкнига\tNOUN,inan,femn sing,nomn\nкниги\tNOUN,inan,femn sing,gent\n";
/// let dict = DictionaryBuilder::from_reader(dump.as_bytes())?;
///
/// let mut table = MorphologyTable::new(MorphAnalyzer::new(dict));
/// let rows = table.rows(["книги"])?;
/// assert_eq!(rows.len(), 4);
/// assert_eq!(rows[0][1], "книга");
/// assert_eq!(rows[0][4], "Родовий");
/// assert_eq!(rows[1][1], "+");
/// # Ok(())
/// # }
/// ```
pub struct MorphologyTable<A> {
    analyzer: A,
    show_forms: bool,
}

impl<A: Analyzer> MorphologyTable<A> {
    /// 新しい生成器を作成します。語形の列挙はデフォルトで有効です。
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            show_forms: true,
        }
    }

    /// 見出し語を共有する語形を列挙するかどうかを設定します。
    pub fn show_forms(mut self, yes: bool) -> Self {
        self.show_forms = yes;
        self
    }

    /// 解析器への参照を返します。
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// 生成器を分解して解析器を返します。
    pub fn into_inner(self) -> A {
        self.analyzer
    }

    /// 語の列から表の行を生成します。
    ///
    /// 語形の列挙が無効な場合は1語につき2行、有効な場合は2行に語彙素の
    /// 語形数を加えた行を、入力順に返します。
    ///
    /// # エラー
    ///
    /// いずれかの語の解析に失敗した場合、その時点でエラーを返します。
    pub fn rows<I, S>(&mut self, words: I) -> Result<Vec<Row>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = vec![];
        for word in words {
            let word = word.as_ref();
            let analysis = self.analyzer.analyze(word)?;
            let localizer = self.analyzer.localizer();

            rows.push(row(
                localizer,
                word,
                &analysis.lemma,
                localizer.localize_pos(&analysis.tag),
                word,
                &analysis.tag,
            ));
            rows.push(row(
                localizer,
                "",
                LEMMA_MARKER,
                String::new(),
                &analysis.lemma,
                &analysis.lemma_tag,
            ));
            if self.show_forms {
                for form in &analysis.lexeme {
                    rows.push(row(localizer, "", "", String::new(), &form.word, &form.tag));
                }
            }
        }
        Ok(rows)
    }

    /// 語の列からグリッド形式の表を生成します。
    ///
    /// 語の列が空の場合は、ヘッダーのみの表を返します。
    ///
    /// # エラー
    ///
    /// いずれかの語の解析に失敗した場合にエラーを返します。
    pub fn generate_table<I, S>(&mut self, words: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generate_table_with(&Grid, words)
    }

    /// 指定のレンダラーで表を生成します。
    ///
    /// レンダラーには常に[`HEADERS`]が渡されます。
    pub fn generate_table_with<R, I, S>(&mut self, renderer: &R, words: I) -> Result<String>
    where
        R: Render + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = self.rows(words)?;
        log::debug!("[ukmorph] Rendering {} rows", rows.len());
        Ok(renderer.render(&HEADERS, &rows))
    }
}

fn row(localizer: &Localizer, input: &str, lemma: &str, pos: String, form: &str, tag: &Tag) -> Row {
    let [case, number, gender, aspect, tense, person] = localizer.localize(tag).into_array();
    [
        input.to_string(),
        lemma.to_string(),
        pos,
        form.to_string(),
        case,
        number,
        gender,
        aspect,
        tense,
        person,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::analyzer::Analysis;
    use crate::localize::UNIVERSAL;
    use crate::tag::WordForm;
    use crate::tagset::ud::parse_feats;

    struct Fixed {
        forms: usize,
    }

    impl Analyzer for Fixed {
        fn analyze(&mut self, word: &str) -> Result<Analysis> {
            let tag = parse_feats("NOUN", "Case=Nom|Number=Sing");
            Ok(Analysis {
                word: word.to_string(),
                lemma: word.to_string(),
                tag: tag.clone(),
                lemma_tag: tag.clone(),
                lexeme: (0..self.forms)
                    .map(|i| WordForm::new(format!("{word}{i}"), tag.clone()))
                    .collect(),
            })
        }

        fn localizer(&self) -> &Localizer {
            &UNIVERSAL
        }
    }

    #[test]
    fn test_row_count() {
        let mut table = MorphologyTable::new(Fixed { forms: 3 });
        assert_eq!(table.rows(["a", "b"]).unwrap().len(), 10);

        let mut table = table.show_forms(false);
        assert_eq!(table.rows(["a", "b"]).unwrap().len(), 4);
    }

    #[test]
    fn test_row_layout() {
        let mut table = MorphologyTable::new(Fixed { forms: 1 });
        let rows = table.rows(["слово"]).unwrap();
        assert_eq!(rows[0][..4], ["слово", "слово", "Іменник", "слово"]);
        assert_eq!(rows[0][4], "Називний");
        assert_eq!(rows[0][9], "-");
        assert_eq!(rows[1][..4], ["", "+", "", "слово"]);
        assert_eq!(rows[2][..4], ["", "", "", "слово0"]);
        assert_eq!(rows[2][5], "Однина");
    }

    #[test]
    fn test_empty_words() {
        let mut table = MorphologyTable::new(Fixed { forms: 0 });
        let text = table.generate_table(Vec::<String>::new()).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("| Введене слово "));
    }
}
