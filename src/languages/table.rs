use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::LanguageEntry;

/// Errors raised while loading the language table at startup.
#[derive(Debug, Error)]
pub enum LanguageTableError {
    #[error("Failed to read language table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse language table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Language table contains no entries")]
    Empty,
}

/// Read-only lookup table from language name to FLORES-200 code.
///
/// Entries keep their file order (used for the UI dropdown). Lookups go through
/// an index keyed by the lowercased name. When two entries share a name after
/// case folding, the first one in file order wins, which matches a
/// front-to-back scan of the list.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
    index: HashMap<String, usize>,
}

impl LanguageTable {
    /// Build a table from already-parsed entries.
    ///
    /// # Returns
    /// * `Ok(LanguageTable)` if at least one entry is present
    /// * `Err(LanguageTableError::Empty)` otherwise
    pub fn new(entries: Vec<LanguageEntry>) -> Result<Self, LanguageTableError> {
        if entries.is_empty() {
            return Err(LanguageTableError::Empty);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let key = fold(&entry.language);
            if let Some(&first) = index.get(&key) {
                let kept: &LanguageEntry = &entries[first];
                warn!(
                    "Duplicate language name '{}' ({}), keeping earlier entry '{}' ({})",
                    entry.language, entry.code, kept.language, kept.code
                );
                continue;
            }
            index.insert(key, position);
        }

        Ok(Self { entries, index })
    }

    /// Parse a table from a JSON array of `{ "Language", "FLORES-200 code" }` objects.
    pub fn from_json(json: &str) -> Result<Self, LanguageTableError> {
        let entries: Vec<LanguageEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load the table from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Location of the JSON language list
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LanguageTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LanguageTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json(&json)?;
        info!(
            "Loaded {} languages from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Resolve a language name to its FLORES-200 code, ignoring case.
    ///
    /// # Returns
    /// * `Some(code)` for the first entry whose name matches
    /// * `None` if no entry matches
    pub fn resolve_code(&self, name: &str) -> Option<&str> {
        self.index
            .get(&fold(name))
            .map(|&position| self.entries[position].code.as_str())
    }

    /// Language names in file order, as offered to the user.
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.language.as_str())
            .collect()
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that do not resolve back to a code through `resolve_code`.
    ///
    /// A healthy table returns an empty list. A name counts as resolvable when
    /// it yields its own code, or the code of an earlier entry with the same
    /// folded name.
    pub fn unresolvable_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(position, entry)| match self.index.get(&fold(&entry.language)) {
                Some(&first) => first > *position,
                None => true,
            })
            .map(|(_, entry)| entry.language.as_str())
            .collect()
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
