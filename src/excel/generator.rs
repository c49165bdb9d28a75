use std::io;
use std::sync::Arc;
use uuid::Uuid;

use crate::common::{GeneratorConfig, PackageError, PackageResult};
use crate::models::Invoice;
use super::patcher::{patch_sheet_file, HEADER_ROWS};
use super::table::update_table_range;
use super::template::TemplateSource;
use super::workdir::RunDirectory;
use super::package;

/// Generador del paquete BC a partir de la plantilla Excel.
#[derive(Clone)]
pub struct BcPackageGenerator {
    config: Arc<GeneratorConfig>,
}

impl BcPackageGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        BcPackageGenerator {
            config: Arc::new(config),
        }
    }

    /// Runs the whole pipeline for one request and returns the archive bytes.
    ///
    /// The invoice list is checked before any template is loaded.
    pub async fn generate(&self, invoices: Vec<Invoice>, inline_template: Option<&str>) -> PackageResult<Vec<u8>> {
        if invoices.is_empty() {
            return Err(PackageError::InvalidInput("No invoices provided".to_string()));
        }

        let source = TemplateSource::select(inline_template, self.config.template_location.as_deref())?;
        tracing::debug!(source = %source.describe(), "Loading template");
        let template = source.load(self.config.fetch_timeout).await?;

        // Trabajo de disco y CPU: fuera de los workers de actix
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || Self::render(&config, &template, &invoices))
            .await
            .map_err(|e| PackageError::Io(io::Error::new(io::ErrorKind::Other, e)))?
    }

    /// Fills `template` with `invoices` inside a fresh run directory.
    pub fn render(config: &GeneratorConfig, template: &[u8], invoices: &[Invoice]) -> PackageResult<Vec<u8>> {
        let run = RunDirectory::create(&config.scratch_root, Uuid::new_v4())?;
        let span = tracing::info_span!("bc_package", run_id = %run.run_id(), invoices = invoices.len());
        let _guard = span.enter();

        let parts = package::expand(template, run.path())?;
        tracing::debug!(parts, "Template extracted");

        let last_row = HEADER_ROWS + invoices.len() as u32;
        for target in &config.sheets {
            let shape = target.shape;
            patch_sheet_file(&run.part(&target.sheet_part), invoices, |idx, invoice| shape.values(idx, invoice))?;
            let updated = update_table_range(&run.part(&target.table_part), last_row)?;
            tracing::debug!(sheet = %target.sheet_part, table_updated = updated, "Sheet patched");
        }

        let bytes = package::assemble(run.path())?;
        run.close()?;

        tracing::info!(size_bytes = bytes.len(), "BC package generated");
        Ok(bytes)
    }
}
