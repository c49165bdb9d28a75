//! Construcción de celdas y filas en el formato que espera Business Central.

use std::borrow::Cow;

/// Style index every generated cell carries.
pub const CELL_STYLE: u32 = 1;

/// Column letters for a zero-based index: 0 -> `A`, 25 -> `Z`, 26 -> `AA`.
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// `A1`-style reference for a zero-based column and a one-based row.
pub fn cell_ref(column: usize, row: u32) -> String {
    format!("{}{}", column_letter(column), row)
}

/// Escapes the three characters that are reserved inside element text.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Builds `row` elements of inline-string cells using the element prefix of
/// the worksheet they are spliced into (`x:` for BC exports).
#[derive(Debug, Clone)]
pub struct RowBuilder {
    prefix: String,
}

impl RowBuilder {
    pub fn new(prefix: impl Into<String>) -> Self {
        RowBuilder { prefix: prefix.into() }
    }

    pub fn build_cell(&self, column: usize, row: u32, value: &str) -> String {
        let p = &self.prefix;
        format!(
            r#"<{p}c r="{r}" s="{s}" t="inlineStr"><{p}is><{p}t xml:space="preserve">{v}</{p}t></{p}is></{p}c>"#,
            r = cell_ref(column, row),
            s = CELL_STYLE,
            v = escape_text(value),
        )
    }

    pub fn build_row<S: AsRef<str>>(&self, row: u32, values: &[S]) -> String {
        let cells: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(column, value)| self.build_cell(column, row, value.as_ref()))
            .collect();

        format!(r#"<{p}row r="{row}">{cells}</{p}row>"#, p = self.prefix, cells = cells.join(" "))
    }
}

impl Default for RowBuilder {
    fn default() -> Self {
        RowBuilder::new("x:")
    }
}
