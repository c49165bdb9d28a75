use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;
use std::time::Duration;

use crate::common::{PackageError, PackageResult};

/// Where the template archive of a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Base64-encoded archive sent with the request.
    Inline(String),
    /// Remote template, fetched over HTTP.
    Url(String),
    /// Template on the local filesystem.
    File(PathBuf),
}

impl TemplateSource {
    /// Picks the inline template when present, the configured location otherwise.
    pub fn select(inline: Option<&str>, configured: Option<&str>) -> PackageResult<Self> {
        if let Some(encoded) = inline.filter(|s| !s.trim().is_empty()) {
            return Ok(TemplateSource::Inline(encoded.to_string()));
        }

        match configured.map(str::trim).filter(|s| !s.is_empty()) {
            Some(location) if location.starts_with("http://") || location.starts_with("https://") => {
                Ok(TemplateSource::Url(location.to_string()))
            }
            Some(location) => {
                let path = location.strip_prefix("file://").unwrap_or(location);
                Ok(TemplateSource::File(PathBuf::from(path)))
            }
            None => Err(PackageError::Config("No template provided".to_string())),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Inline(encoded) => format!("inline ({} base64 chars)", encoded.len()),
            TemplateSource::Url(url) => url.clone(),
            TemplateSource::File(path) => path.display().to_string(),
        }
    }

    /// Raw archive bytes of the template.
    pub async fn load(&self, timeout: Duration) -> PackageResult<Vec<u8>> {
        match self {
            TemplateSource::Inline(encoded) => decode_inline(encoded),
            TemplateSource::Url(url) => fetch(url, timeout).await,
            TemplateSource::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| PackageError::Fetch(format!("{}: {}", path.display(), e))),
        }
    }
}

fn decode_inline(encoded: &str) -> PackageResult<Vec<u8>> {
    let compact: String = encoded.split_whitespace().collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| PackageError::InvalidInput(format!("template is not valid base64: {}", e)))
}

async fn fetch(url: &str, timeout: Duration) -> PackageResult<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| PackageError::Fetch(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| PackageError::Fetch(format!("{}: {}", url, e)))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| PackageError::Fetch(format!("{}: {}", url, e)))?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_template_wins_over_configured_location() {
        let source = TemplateSource::select(Some("UEsDBA=="), Some("https://cdn.example.com/bc.xlsx")).unwrap();
        assert_eq!(source, TemplateSource::Inline("UEsDBA==".to_string()));
    }

    #[test]
    fn falls_back_to_configured_location() {
        let url = TemplateSource::select(None, Some("https://cdn.example.com/bc.xlsx")).unwrap();
        assert_eq!(url, TemplateSource::Url("https://cdn.example.com/bc.xlsx".to_string()));

        let file = TemplateSource::select(Some(""), Some("file:///srv/bc_template.xlsx")).unwrap();
        assert_eq!(file, TemplateSource::File(PathBuf::from("/srv/bc_template.xlsx")));
    }

    #[test]
    fn no_source_is_a_configuration_error() {
        let err = TemplateSource::select(None, None).unwrap_err();
        assert!(matches!(err, PackageError::Config(_)));
        assert!(!err.is_client_error());
    }

    #[actix_rt::test]
    async fn invalid_base64_is_a_client_error() {
        let err = TemplateSource::Inline("not base64 !!".to_string())
            .load(Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[actix_rt::test]
    async fn decodes_inline_template_with_line_breaks() {
        let bytes = TemplateSource::Inline("UEsD\nBA==".to_string())
            .load(Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(bytes, b"PK\x03\x04");
    }

    #[actix_rt::test]
    async fn unreadable_file_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateSource::File(dir.path().join("missing.xlsx"))
            .load(Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, PackageError::Fetch(_)));
    }
}
