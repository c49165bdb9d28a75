pub mod cell;
pub mod generator;
pub mod package;
pub mod patcher;
pub mod rows;
pub mod table;
pub mod template;
pub mod workdir;

#[cfg(test)]
pub(crate) mod testing;

pub use cell::{column_letter, escape_text, RowBuilder};
pub use generator::BcPackageGenerator;
pub use package::{assemble, expand};
pub use patcher::{patch_sheet, patch_sheet_file};
pub use rows::RowShape;
pub use table::{rewrite_table_range, update_table_range};
pub use template::TemplateSource;
pub use workdir::RunDirectory;
