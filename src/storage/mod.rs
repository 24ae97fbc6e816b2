pub mod json_backend;

use crate::errors::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

pub use json_backend::{
    export_json, import_from_path, import_json, load_ledger_from_path, parse_json,
    save_ledger_to_path, ImportSummary,
};
