//! Текстовый формат каталога:
//!
//! ```text
//! #<layout>,<layout_description>,<variant_1>,<variant_description_1>,...
//! us,English (US),dvorak,English (Dvorak),intl,English (US\, intl.)
//! ```

use super::LayoutEntry;
use tracing::{debug, warn};

const DELIMITER: char = ',';
const ESCAPE: char = '\\';
const COMMENT: char = '#';

/// Разбирает весь вывод построчно; некорректные строки пропускаются
pub fn parse_catalog(input: &str) -> Vec<LayoutEntry> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let entry = parse_line(line);
            if entry.is_none() && !strip_comment(line).is_empty() {
                debug!("Строка {} каталога пропущена: '{}'", index + 1, line);
            }
            entry
        })
        .collect()
}

/// Одна строка каталога -> раскладка с вариантами
pub fn parse_line(line: &str) -> Option<LayoutEntry> {
    let columns = split_columns(strip_comment(line));
    if columns.len() < 2 {
        return None;
    }

    let mut columns = columns.into_iter();
    let layout_name = columns.next()?;
    let layout_description = columns.next()?;

    if layout_name.is_empty() {
        warn!("Пропущена раскладка без имени: '{}'", line);
        return None;
    }

    let rest: Vec<String> = columns.collect();
    let entry = rest.chunks_exact(2).fold(
        LayoutEntry::new(layout_name, layout_description),
        |entry, pair| {
            if pair[0].is_empty() {
                warn!("Пропущен вариант без имени в раскладке '{}'", entry.layout_name);
                return entry;
            }
            entry.with_variant(pair[0].as_str(), pair[1].as_str())
        },
    );

    Some(entry)
}

fn strip_comment(line: &str) -> &str {
    line.split(COMMENT).next().unwrap_or("").trim()
}

/// Делит по запятым, перед которыми нет обратного слэша, затем снимает экранирование `\,`
fn split_columns(line: &str) -> Vec<String> {
    let mut columns = Vec::new();
    let mut current = String::new();
    let mut previous = None;

    for ch in line.chars() {
        if ch == DELIMITER && previous != Some(ESCAPE) {
            columns.push(unescape(&current));
            current.clear();
        } else {
            current.push(ch);
        }
        previous = Some(ch);
    }
    columns.push(unescape(&current));

    columns
}

fn unescape(column: &str) -> String {
    column.replace("\\,", ",")
}
