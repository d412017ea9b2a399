//! Language code table: maps human-readable language names to FLORES-200 codes.
//!
//! The table is loaded once at startup from a JSON file and is read-only
//! afterwards. It serves two purposes:
//!
//! - `table`: case-insensitive name → code resolution for the translation router
//! - `entry`: the serialized record shape, also the list of UI dropdown options
//!
//! # Example
//!
//! ```rust,ignore
//! use nlp_toolkit::languages::LanguageTable;
//!
//! let table = LanguageTable::load("data/languages.json")?;
//! assert_eq!(table.resolve_code("HINDI"), Some("hin_Deva"));
//! ```

mod entry;
mod table;

pub use entry::LanguageEntry;
pub use table::{LanguageTable, LanguageTableError};

/// FLORES-200 code of the fixed source language for every translation.
pub const SOURCE_LANGUAGE_CODE: &str = "eng_Latn";
