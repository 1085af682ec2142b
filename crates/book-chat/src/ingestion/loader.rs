//! Source text loading

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the whole source file as UTF-8 text, with `\r\n` and lone `\r`
/// line endings normalised to `\n`.
///
/// A missing file maps to [`Error::SourceNotFound`] and undecodable bytes to
/// [`Error::InvalidEncoding`] so the binary can report each distinctly.
pub async fn load_document(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let text = String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding(path.to_path_buf()))?;
    let text = normalize_newlines(text);

    tracing::info!(
        "Loaded source text from {} ({} bytes)",
        path.display(),
        text.len()
    );

    Ok(text)
}

/// Universal-newline translation, so chunk boundaries do not depend on
/// the platform the source was written on
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
