use serde::Deserialize;

use super::Invoice;

/// Body of `POST /api/generate-excel`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub invoices: Option<Vec<Invoice>>,
    /// Base64-encoded template archive; the configured location is used when absent.
    #[serde(default)]
    pub template: Option<String>,
}

impl GenerateRequest {
    /// Takes the invoice list out of the request; `None` when it is absent or empty.
    pub fn take_invoices(&mut self) -> Option<Vec<Invoice>> {
        self.invoices.take().filter(|list| !list.is_empty())
    }

    pub fn inline_template(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.trim().is_empty())
    }
}
