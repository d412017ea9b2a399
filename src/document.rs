//! Loading uploaded text documents.
//!
//! Bytes are decoded as UTF-8 first. Anything that is not valid UTF-8 is
//! decoded as ISO-8859-1 instead, which maps every byte to a character and so
//! cannot fail. Only I/O can produce an error.

use std::path::Path;

use encoding_rs::UTF_8;
use thiserror::Error;
use tracing::debug;

/// Failure to read a document. The message is shown to the user verbatim.
#[derive(Debug, Error)]
#[error("An error occurred: {0}")]
pub struct DocumentError(#[from] pub std::io::Error);

impl DocumentError {
    /// No document accompanied the question.
    pub fn missing() -> Self {
        Self(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no file was uploaded",
        ))
    }

    /// The uploaded file had a name but no contents.
    pub fn empty() -> Self {
        Self(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "the uploaded file is empty",
        ))
    }
}

/// Read a text file, falling back to Latin-1 when it is not valid UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, DocumentError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_text(&bytes))
}

/// Decode raw document bytes, UTF-8 first, Latin-1 second.
///
/// A UTF-8 byte order mark is kept as U+FEFF.
pub fn decode_text(bytes: &[u8]) -> String {
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text.into_owned(),
        None => {
            debug!("Document is not valid UTF-8, decoding as Latin-1");
            encoding_rs::mem::decode_latin1(bytes).into_owned()
        }
    }
}
