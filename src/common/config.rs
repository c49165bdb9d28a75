use std::path::PathBuf;
use std::time::Duration;

use crate::excel::RowShape;

/// One worksheet to fill and the table overlay that covers it.
#[derive(Debug, Clone)]
pub struct SheetTarget {
    pub sheet_part: String,
    pub table_part: String,
    pub shape: RowShape,
}

impl SheetTarget {
    pub fn new(sheet_part: &str, table_part: &str, shape: RowShape) -> Self {
        SheetTarget {
            sheet_part: sheet_part.to_string(),
            table_part: table_part.to_string(),
            shape,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Parent directory of every run directory.
    pub scratch_root: PathBuf,
    /// Fallback template location: an http(s) URL or a filesystem path.
    pub template_location: Option<String>,
    pub fetch_timeout: Duration,
    pub sheets: Vec<SheetTarget>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            scratch_root: std::env::temp_dir().join("bc_package_work"),
            template_location: None,
            fetch_timeout: Duration::from_secs(30),
            sheets: vec![
                SheetTarget::new("xl/worksheets/sheet1.xml", "xl/tables/table1.xml", RowShape::PurchaseHeader),
                SheetTarget::new("xl/worksheets/sheet2.xml", "xl/tables/table2.xml", RowShape::PurchaseLine),
            ],
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct GeneratorConfigBuilder {
    scratch_root: Option<PathBuf>,
    template_location: Option<String>,
    fetch_timeout: Option<Duration>,
}

impl GeneratorConfigBuilder {
    pub fn scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    pub fn template_location(mut self, location: Option<String>) -> Self {
        self.template_location = location.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> GeneratorConfig {
        let default = GeneratorConfig::default();
        GeneratorConfig {
            scratch_root: self.scratch_root.unwrap_or(default.scratch_root),
            template_location: self.template_location,
            fetch_timeout: self.fetch_timeout.unwrap_or(default.fetch_timeout),
            sheets: default.sheets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_both_purchase_sheets() {
        let config = GeneratorConfig::default();
        assert_eq!(config.sheets.len(), 2);
        assert_eq!(config.sheets[0].sheet_part, "xl/worksheets/sheet1.xml");
        assert_eq!(config.sheets[0].table_part, "xl/tables/table1.xml");
        assert_eq!(config.sheets[0].shape, RowShape::PurchaseHeader);
        assert_eq!(config.sheets[1].sheet_part, "xl/worksheets/sheet2.xml");
        assert_eq!(config.sheets[1].shape, RowShape::PurchaseLine);
    }

    #[test]
    fn blank_template_location_is_treated_as_unset() {
        let config = GeneratorConfig::builder()
            .template_location(Some("  ".to_string()))
            .build();
        assert!(config.template_location.is_none());
    }
}
