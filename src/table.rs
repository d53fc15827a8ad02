//! # Table Rendering
//! Plain ASCII grid for the summary rows, with the table title embedded in
//! the top border. Pure string building, no I/O.
//!
//! Widths are measured in characters, not bytes: the fixed header labels
//! are Cyrillic and multi-byte in UTF-8.

use crate::stats::LanguageSummary;

/// Fixed column labels: language, found, processed, average salary.
pub const COLUMNS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Render summary rows as an ASCII grid titled `title`.
///
/// Layout: titled top border, header row, separator, one line per row,
/// closing border. No trailing newline.
pub fn render_table(title: &str, rows: &[LanguageSummary]) -> String {
    let header: Vec<String> = COLUMNS.iter().map(|label| label.to_string()).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.language.clone(),
                row.vacancies_found.to_string(),
                row.vacancies_processed.to_string(),
                row.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|label| char_width(label)).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(char_width(cell));
        }
    }

    let border = horizontal_border(&widths);
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(titled_border(&border, title));
    lines.push(grid_row(&widths, &header));
    lines.push(border.clone());
    for row in &body {
        lines.push(grid_row(&widths, row));
    }
    lines.push(border);
    lines.join("\n")
}

fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// `+`-joined run of dashes, one segment per column plus cell padding.
fn horizontal_border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Overlay `title` onto the border right after the leading `+`. A title too
/// wide to fit between the outer corners is dropped.
fn titled_border(border: &str, title: &str) -> String {
    let title_width = char_width(title);
    if title_width == 0 || title_width + 2 > char_width(border) {
        return border.to_string();
    }

    let mut chars: Vec<char> = border.chars().collect();
    for (i, c) in title.chars().enumerate() {
        chars[i + 1] = c;
    }
    chars.into_iter().collect()
}

fn grid_row(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width - char_width(cell)));
        line.push_str(" |");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(language: &str, found: u64, processed: u64, average: u64) -> LanguageSummary {
        LanguageSummary {
            language: language.to_string(),
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary: average,
        }
    }

    #[test]
    fn renders_titled_grid() {
        let rows = vec![summary("Go", 12, 2, 1500)];
        let expected = "\
+HeadHunter Moscow------+------------------+---------------------+------------------+
| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |
+-----------------------+------------------+---------------------+------------------+
| Go                    | 12               | 2                   | 1500             |
+-----------------------+------------------+---------------------+------------------+";
        assert_eq!(render_table("HeadHunter Moscow", &rows), expected);
    }

    #[test]
    fn all_lines_share_one_width() {
        let rows = vec![
            summary("JavaScript", 2173, 442, 109415),
            summary("a language with a very long name indeed", 1, 0, 0),
        ];
        let rendered = render_table("SuperJob Moscow", &rows);

        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn no_rows_still_renders_header() {
        let rendered = render_table("HeadHunter Moscow", &[]);
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.contains("Язык программирования"));
    }

    #[test]
    fn oversized_title_falls_back_to_plain_border() {
        let title = "x".repeat(200);
        let rendered = render_table(&title, &[]);

        let first = rendered.lines().next().unwrap();
        let last = rendered.lines().last().unwrap();
        assert_eq!(first, last);
        assert!(!rendered.contains("xx"));
    }
}
