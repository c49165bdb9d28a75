use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::common::{PackageError, PackageResult};
use crate::models::Invoice;
use super::cell::RowBuilder;

/// Last row of the template's fixed header region.
pub const HEADER_ROWS: u32 = 3;
/// First row that receives invoice data.
pub const FIRST_DATA_ROW: u32 = HEADER_ROWS + 1;

static HEADER_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<([A-Za-z_][\w.-]*:)?row\b[^>]*?\sr="3"[^>]*?(/?)>"#).expect("Hardcode regex pattern")
});

static SHEET_DATA_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</([A-Za-z_][\w.-]*:)?sheetData>").expect("Hardcode regex pattern")
});

/// Split points of a worksheet: `content[..prefix_end]` keeps the header
/// rows, `content[suffix_start..]` starts at the closing `sheetData` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetAnchors {
    pub prefix_end: usize,
    pub suffix_start: usize,
    /// Element prefix used by the sheet, e.g. `x:` or empty.
    pub element_prefix: String,
}

fn single_match<'a>(re: &Regex, content: &'a str, what: &str) -> PackageResult<regex::Captures<'a>> {
    let mut matches = re.captures_iter(content);
    let first = matches
        .next()
        .ok_or_else(|| PackageError::Structure(format!("{} not found", what)))?;
    if matches.next().is_some() {
        return Err(PackageError::Structure(format!("{} appears more than once", what)));
    }
    Ok(first)
}

pub fn locate_anchors(content: &str) -> PackageResult<SheetAnchors> {
    let header = single_match(&HEADER_ROW, content, "header row 3")?;
    let open_tag = header.get(0).map(|m| m.end()).unwrap_or_default();
    let row_prefix = header.get(1).map(|m| m.as_str()).unwrap_or("");
    let self_closing = header.get(2).map(|m| !m.as_str().is_empty()).unwrap_or(false);

    let prefix_end = if self_closing {
        open_tag
    } else {
        let close = format!("</{}row>", row_prefix);
        content[open_tag..]
            .find(&close)
            .map(|pos| open_tag + pos + close.len())
            .ok_or_else(|| PackageError::Structure("header row 3 is never closed".to_string()))?
    };

    let end = single_match(&SHEET_DATA_END, content, "closing sheetData marker")?;
    let suffix_start = end.get(0).map(|m| m.start()).unwrap_or_default();
    if suffix_start < prefix_end {
        return Err(PackageError::Structure(
            "closing sheetData marker precedes header row 3".to_string(),
        ));
    }

    Ok(SheetAnchors {
        prefix_end,
        suffix_start,
        element_prefix: end.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
    })
}

/// Replaces the data region of a worksheet with one row per invoice,
/// numbered from row 4.
pub fn patch_sheet<F>(content: &str, invoices: &[Invoice], row_values: F) -> PackageResult<String>
where
    F: Fn(usize, &Invoice) -> Vec<String>,
{
    let anchors = locate_anchors(content)?;
    let builder = RowBuilder::new(anchors.element_prefix.as_str());

    let rows: String = invoices
        .iter()
        .enumerate()
        .map(|(idx, invoice)| builder.build_row(FIRST_DATA_ROW + idx as u32, &row_values(idx, invoice)))
        .collect();

    let mut patched = String::with_capacity(content.len() + rows.len());
    patched.push_str(&content[..anchors.prefix_end]);
    patched.push_str(&rows);
    patched.push_str(&content[anchors.suffix_start..]);
    Ok(patched)
}

/// Patches a worksheet part in place. The file is only rewritten once the
/// whole new content has been built.
pub fn patch_sheet_file<F>(path: &Path, invoices: &[Invoice], row_values: F) -> PackageResult<()>
where
    F: Fn(usize, &Invoice) -> Vec<String>,
{
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PackageError::Structure(format!("worksheet part {} is missing", path.display())),
        _ => PackageError::Io(e),
    })?;

    let patched = patch_sheet(&content, invoices, row_values)
        .map_err(|e| match e {
            PackageError::Structure(msg) => PackageError::Structure(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

    fs::write(path, patched)?;
    Ok(())
}
