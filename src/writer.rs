use crate::error::{ExtractError, ExtractResult};
use crate::types::ExtractionResult;
use std::fs;
use std::path::Path;

/// Render the document as 2-space indented JSON. Non-ASCII text stays literal.
pub fn to_json(document: &ExtractionResult) -> ExtractResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write the document to `path`, creating parent directories as needed.
///
/// An existing file is overwritten. A failed write is not rolled back.
pub fn write_document(document: &ExtractionResult, path: &Path) -> ExtractResult<()> {
    let json = to_json(document)?;

    let write_err = |source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)?;

    tracing::info!(path = %path.display(), "wrote workbook document");
    Ok(())
}
