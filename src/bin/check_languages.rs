//! Verify a language table: every listed name must resolve to a code.
//!
//! Usage: `check-languages [path]` (defaults to `LANGUAGE_TABLE_PATH` or
//! `data/languages.json`). Exits non-zero when the table fails to load or
//! contains names that do not resolve.

use anyhow::{bail, Context, Result};
use nlp_toolkit::languages::LanguageTable;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nlp_toolkit=info".parse()?),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("LANGUAGE_TABLE_PATH").ok())
        .unwrap_or_else(|| "data/languages.json".to_string());

    let table = LanguageTable::load(&path)
        .with_context(|| format!("Failed to load language table from {}", path))?;

    println!("Language table: {}", path);
    println!("Entries: {}", table.len());
    for entry in table.entries() {
        let resolved = table.resolve_code(&entry.language).unwrap_or("<unresolved>");
        println!("  {:<28} {}", entry.language, resolved);
    }

    let unresolved = table.unresolvable_names();
    if !unresolved.is_empty() {
        bail!(
            "{} of {} names do not resolve: {}",
            unresolved.len(),
            table.len(),
            unresolved.join(", ")
        );
    }

    println!("All {} names resolve.", table.len());
    Ok(())
}
