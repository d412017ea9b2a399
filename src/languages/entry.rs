use serde::{Deserialize, Serialize};

/// One row of the language table.
///
/// Serialized with the column names used by the FLORES-200 language list:
/// `{ "Language": "Hindi", "FLORES-200 code": "hin_Deva" }`. Both keys are
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Human-readable language name, as shown in the UI
    #[serde(rename = "Language")]
    pub language: String,

    /// FLORES-200 code passed to the translation model (e.g. "fra_Latn")
    #[serde(rename = "FLORES-200 code")]
    pub code: String,
}

impl LanguageEntry {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }
}
