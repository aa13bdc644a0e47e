//! グリッド形式のテキスト表の描画
//!
//! 出力は次の形式です。
//!
//! ```text
//! +--------+-----+
//! | head   | h2  |
//! +========+=====+
//! | cell   | c   |
//! +--------+-----+
//! ```
//!
//! 列幅はセルの表示幅の最大値と、ヘッダーの表示幅に2を加えた値のうち大きい方です。
//! 表示幅はUnicodeの文字幅で計算するため、キリル文字や全角文字も揃います。

use unicode_width::UnicodeWidthStr;

use crate::table::Row;

/// 表を文字列に描画するレンダラー
pub trait Render {
    /// ヘッダーと行から表を描画します。
    fn render(&self, headers: &[&str], rows: &[Row]) -> String;
}

/// グリッド形式のレンダラー
#[derive(Debug, Clone, Copy, Default)]
pub struct Grid;

impl Render for Grid {
    fn render(&self, headers: &[&str], rows: &[Row]) -> String {
        render_grid(headers, rows)
    }
}

/// グリッド形式の表を描画します。
///
/// 列数はヘッダーの数で決まり、行のセルが足りない場合は空セルとして扱います。
/// 改行を含むセルは複数行に分けて描画し、行の高さは最も行数の多いセルに合わせます。
/// 末尾に改行は付きません。
///
/// # 例
///
/// ```
/// use ukmorph::render::render_grid;
///
/// let rows = [vec!["книга".to_string(), "+".to_string()]];
/// let table = render_grid(&["Лема", "x"], &rows);
/// assert_eq!(
///     table,
///     "+--------+-----+\n\
///      | Лема   | x   |\n\
///      +========+=====+\n\
///      | книга  | +   |\n\
///      +--------+-----+"
/// );
/// ```
pub fn render_grid<R>(headers: &[&str], rows: &[R]) -> String
where
    R: AsRef<[String]>,
{
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| cell_width(cell(row, i)))
                .fold(cell_width(header) + 2, usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(rule(&widths, '-'));
    push_row(&mut lines, &widths, headers);
    lines.push(rule(&widths, '='));
    for (n, row) in rows.iter().enumerate() {
        if n > 0 {
            lines.push(rule(&widths, '-'));
        }
        let cells: Vec<&str> = (0..widths.len()).map(|i| cell(row, i)).collect();
        push_row(&mut lines, &widths, &cells);
    }
    lines.push(rule(&widths, '-'));
    lines.join("\n")
}

fn cell<R: AsRef<[String]>>(row: &R, i: usize) -> &str {
    row.as_ref().get(i).map(String::as_str).unwrap_or("")
}

/// セルのうち最も幅の広い行の表示幅
fn cell_width(cell: &str) -> usize {
    cell.split('\n').map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for &w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s
}

/// 1つの行を、最も行数の多いセルに合わせた行数で追加します。
fn push_row(lines: &mut Vec<String>, widths: &[usize], cells: &[&str]) {
    let split: Vec<Vec<&str>> = cells.iter().map(|c| c.split('\n').collect()).collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(1);

    for k in 0..height {
        let mut s = String::from("|");
        for (&w, parts) in widths.iter().zip(&split) {
            let part = parts.get(k).copied().unwrap_or("");
            s.push(' ');
            s.push_str(part);
            s.extend(std::iter::repeat(' ').take(w - part.width() + 1));
            s.push('|');
        }
        lines.push(s);
    }
}
