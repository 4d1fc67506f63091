//! Just enough HTML to read the archive's column documentation tables.
//!
//! Tables are split on their opening tags rather than matched pairwise, so
//! rows and cells without closing tags still come out right. Nested tables
//! are not supported.

use once_cell::sync::Lazy;
use regex::Regex;

static TABLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<table\b[^>]*>(.*?)</table\s*>").unwrap());
static ROW_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<tr\b[^>]*>").unwrap());
static CELL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<t[dh]\b[^>]*>").unwrap());
static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static ENTITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap());
static SPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\n]+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HtmlTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl HtmlTable {
    /// Cell text of column `index` for every data row; short rows give `None`.
    pub fn column(&self, index: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str))
    }
}

/// Every top-level `<table>` in document order; the first row of each is
/// taken as its header.
pub(crate) fn parse_tables(html: &str) -> Vec<HtmlTable> {
    let html = COMMENT_REGEX.replace_all(html, "");

    TABLE_REGEX
        .captures_iter(&html)
        .map(|caps| {
            let mut rows = ROW_REGEX
                .split(&caps[1])
                .skip(1)
                .map(parse_row)
                .filter(|row| !row.is_empty());
            let header = rows.next().unwrap_or_default();
            HtmlTable {
                header,
                rows: rows.collect(),
            }
        })
        .collect()
}

fn parse_row(row: &str) -> Vec<String> {
    CELL_REGEX.split(row).skip(1).map(cell_text).collect()
}

fn cell_text(raw: &str) -> String {
    let text = TAG_REGEX.replace_all(raw, " ");
    let text = decode_entities(&text);
    SPACE_REGEX.replace_all(&text, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity.strip_prefix("#x").or(entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(entity)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "dagger" => '\u{2020}',
        "Dagger" => '\u{2021}',
        "deg" => '\u{b0}',
        "plusmn" => '\u{b1}',
        _ => return None,
    })
}
