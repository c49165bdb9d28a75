pub mod api;
pub mod common;
pub mod excel;
pub mod models;

// Re-export commonly used types
pub use common::{GeneratorConfig, PackageError, PackageResult, SheetTarget};
pub use excel::{BcPackageGenerator, RowShape, TemplateSource};
pub use models::{GenerateRequest, Invoice, Scalar};
