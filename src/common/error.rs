use std::io;
use thiserror::Error;

/// Errores del pipeline de generación del paquete BC.
#[derive(Debug, Error)]
pub enum PackageError {
    /// No template source is available at all.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configured template location could not be read.
    #[error("template fetch failed: {0}")]
    Fetch(String),

    /// A worksheet part does not carry the expected anchors.
    #[error("invalid template structure: {0}")]
    Structure(String),

    /// The template bytes are not a readable spreadsheet archive.
    #[error("invalid template archive: {0}")]
    Template(String),

    /// Request data rejected before any processing.
    #[error("{0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl PackageError {
    /// Client-fault errors map to a 4xx response, everything else to 5xx.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PackageError::InvalidInput(_))
    }
}

impl From<walkdir::Error> for PackageError {
    fn from(error: walkdir::Error) -> Self {
        PackageError::Io(error.into())
    }
}

pub type PackageResult<T> = Result<T, PackageError>;
