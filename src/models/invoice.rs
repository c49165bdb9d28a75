use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Scalar value as received from the client.
///
/// Numbers keep the exact digits of the request, so long payment references
/// sent as JSON numbers are not rounded.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Scalar::Text(s)),
            Value::Number(n) => Ok(Scalar::Number(n)),
            Value::Bool(b) => Ok(Scalar::Bool(b)),
            other => Err(de::Error::custom(format!("expected a string, number or boolean, got {}", other))),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Number(n) => write!(f, "{}", n),
            // Same spelling as the BC export tooling: `True` / `False`
            Scalar::Bool(true) => write!(f, "True"),
            Scalar::Bool(false) => write!(f, "False"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        // NaN/inf have no JSON form; fall back to their text.
        serde_json::Number::from_f64(value)
            .map(Scalar::Number)
            .unwrap_or_else(|| Scalar::Text(value.to_string()))
    }
}

/// Factura de proveedor tal como llega en la petición.
///
/// Every field is optional; missing fields render as empty cells except
/// `amount`, which defaults to `0`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub document_no: Option<Scalar>,
    pub vendor_no: Option<Scalar>,
    pub vendor_name: Option<Scalar>,
    pub posting_date: Option<Scalar>,
    pub due_date: Option<Scalar>,
    pub description: Option<Scalar>,
    pub dimension1: Option<Scalar>,
    pub dimension2: Option<Scalar>,
    pub amount: Option<Scalar>,
    pub gl_account: Option<Scalar>,
    pub payment_reference: Option<Scalar>,
    pub vendor_invoice_no: Option<Scalar>,
}

impl Invoice {
    pub fn amount_text(&self) -> String {
        self.amount
            .as_ref()
            .map(Scalar::to_string)
            .unwrap_or_else(|| "0".to_string())
    }
}
