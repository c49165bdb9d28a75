//! Field layouts of the two purchase sheets of the BC import package.
//!
//! Both layouts are a fixed contract with the Business Central import: the
//! column order, the duplicated amounts and the literal constants must stay
//! exactly as they are.

use crate::models::{Invoice, Scalar};

/// Line numbers advance by this step, one line per invoice.
pub const LINE_NO_STEP: usize = 10_000;

const DOCUMENT_TYPE: &str = "Facture";
const GENERAL_ACCOUNT: &str = "Compte général";
const VAT_NORMAL: &str = "TVA normale";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    /// "En-tête achat": one purchase header per invoice.
    PurchaseHeader,
    /// "Ligne achat": one purchase line per invoice.
    PurchaseLine,
}

impl RowShape {
    /// Cell values for the invoice at zero-based position `index`.
    pub fn values(&self, index: usize, invoice: &Invoice) -> Vec<String> {
        match self {
            RowShape::PurchaseHeader => header_values(invoice),
            RowShape::PurchaseLine => line_values(index, invoice),
        }
    }
}

fn text(value: &Option<Scalar>) -> String {
    value.as_ref().map(Scalar::to_string).unwrap_or_default()
}

fn header_values(inv: &Invoice) -> Vec<String> {
    let vendor_no = text(&inv.vendor_no);
    let vendor_name = text(&inv.vendor_name);
    let posting_date = text(&inv.posting_date);
    let due_date = text(&inv.due_date);

    vec![
        DOCUMENT_TYPE.to_string(),
        text(&inv.document_no),
        vendor_no.clone(),
        vendor_no.clone(),
        vendor_name.clone(),
        String::new(), // Nom 2
        String::new(), // Adresse
        String::new(), // Ville
        posting_date.clone(),
        posting_date.clone(),
        posting_date.clone(),
        text(&inv.description),
        due_date.clone(),
        text(&inv.dimension1),
        text(&inv.dimension2),
        "TIERS".to_string(),
        "0".to_string(),
        "true".to_string(),
        vendor_no,
        "DIRECT".to_string(),
        text(&inv.vendor_invoice_no),
        "NATIONAL".to_string(),
        "CH".to_string(),
        vendor_name,
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        "CH".to_string(),
        String::new(),
        String::new(),
        "CH".to_string(),
        GENERAL_ACCOUNT.to_string(),
        "false".to_string(),
        posting_date,
        "PPI".to_string(),
        "PPI".to_string(),
        "false".to_string(),
        "NATIONAL".to_string(),
        "0".to_string(),
        "Ouvert".to_string(),
        due_date,
        text(&inv.payment_reference),
        String::new(),
    ]
}

fn line_values(index: usize, inv: &Invoice) -> Vec<String> {
    let amount = inv.amount_text();
    let line_no = ((index + 1) * LINE_NO_STEP).to_string();
    let vendor_no = text(&inv.vendor_no);
    let posting_date = text(&inv.posting_date);

    vec![
        DOCUMENT_TYPE.to_string(),
        text(&inv.document_no),
        line_no,
        vendor_no.clone(),
        GENERAL_ACCOUNT.to_string(),
        text(&inv.gl_account),
        posting_date.clone(),
        text(&inv.description),
        "1".to_string(),
        "1".to_string(),
        amount.clone(),
        amount.clone(),
        "0".to_string(),
        amount.clone(),
        amount.clone(),
        text(&inv.dimension1),
        text(&inv.dimension2),
        amount.clone(),
        vendor_no,
        "0".to_string(),
        "NATIONAL".to_string(),
        "DIVERS".to_string(),
        VAT_NORMAL.to_string(),
        "NATIONAL".to_string(),
        "0 %".to_string(),
        amount.clone(),
        "0".to_string(),
        amount.clone(),
        amount.clone(),
        amount.clone(),
        VAT_NORMAL.to_string(),
        amount,
        "0".to_string(),
        "1".to_string(),
        "1".to_string(),
        "1".to_string(),
        "1".to_string(),
        posting_date,
    ]
}
