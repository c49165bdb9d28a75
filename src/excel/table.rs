use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

use crate::common::PackageResult;

static TABLE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"ref="A3:([A-Z]+)(\d+)""#).expect("Hardcode regex pattern"));

/// Moves the end row of every `A3`-anchored range declaration (the table
/// itself and its autoFilter) to `last_row`. Returns `None` when the part
/// declares no such range.
pub fn rewrite_table_range(content: &str, last_row: u32) -> Option<String> {
    if !TABLE_REF.is_match(content) {
        return None;
    }
    let rewritten = TABLE_REF.replace_all(content, |caps: &Captures| format!(r#"ref="A3:{}{}""#, &caps[1], last_row));
    Some(rewritten.into_owned())
}

/// Updates a table part on disk. Tables are optional, so a missing part is
/// not an error. Returns whether the part was rewritten.
pub fn update_table_range(path: &Path, last_row: u32) -> PackageResult<bool> {
    if !path.exists() {
        tracing::debug!(part = %path.display(), "No table part, skipping range update");
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    match rewrite_table_range(&content, last_row) {
        Some(updated) => {
            fs::write(path, updated)?;
            Ok(true)
        }
        None => {
            tracing::warn!(part = %path.display(), "Table part has no A3 range declaration");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = concat!(
        r#"<?xml version="1.0" encoding="utf-8"?>"#,
        r#"<x:table xmlns:x="http://schemas.openxmlformats.org/spreadsheetml/2006/main" id="1" name="Table1" ref="A3:F10">"#,
        r#"<x:autoFilter ref="A3:F10" />"#,
        r#"<x:tableColumns count="6" />"#,
        r#"</x:table>"#,
    );

    #[test]
    fn end_row_follows_invoice_count() {
        let updated = rewrite_table_range(TABLE, 3 + 5).unwrap();
        assert!(updated.contains(r#"name="Table1" ref="A3:F8">"#));
        assert!(updated.contains(r#"<x:autoFilter ref="A3:F8" />"#));
        assert!(!updated.contains("A3:F10"));
    }

    #[test]
    fn keeps_wide_end_columns() {
        let updated = rewrite_table_range(r#"<table ref="A3:AR4">"#, 12).unwrap();
        assert_eq!(updated, r#"<table ref="A3:AR12">"#);
    }

    #[test]
    fn ranges_not_anchored_at_a3_are_left_alone() {
        assert!(rewrite_table_range(r#"<table ref="B2:F10">"#, 8).is_none());
    }

    #[test]
    fn missing_table_part_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!update_table_range(&dir.path().join("table1.xml"), 8).unwrap());
    }

    #[test]
    fn rewrites_table_part_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table1.xml");
        fs::write(&path, TABLE).unwrap();

        assert!(update_table_range(&path, 4).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains(r#"ref="A3:F4""#));
    }
}
