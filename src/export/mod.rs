pub mod json;
pub mod links;
pub mod sheet;
pub mod usernames;

use thiserror::Error;

pub use json::render_json_array;
pub use links::links_text;
pub use sheet::{export_path, export_rows, write_csv, write_csv_file, ExportRow};
pub use usernames::usernames_text;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No X links found to export!")]
    NoLinks,

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
