use std::path::{Path, PathBuf};

use log::debug;
use quizinator_models::errors::ExecutionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
}

/// `.pdf` (case-insensitive) gets PDF extraction; everything else is read
/// as plain text.
pub fn kind_for_path(path: &Path) -> FileKind {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => FileKind::Pdf,
        _ => FileKind::Text,
    }
}

/// Turns a source document into plain text. The file must exist before any
/// read is attempted; PDF parsing runs on a blocking thread.
pub async fn extract_text(path: &Path, kind: FileKind) -> Result<String, ExecutionError> {
    if tokio::fs::metadata(path).await.is_err() {
        return Err(ExecutionError::FileNotFound(path.display().to_string()));
    }

    match kind {
        FileKind::Pdf => extract_pdf(path).await,
        FileKind::Text => extract_plain(path).await,
    }
}

async fn extract_pdf(path: &Path) -> Result<String, ExecutionError> {
    let owned: PathBuf = path.to_path_buf();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned))
        .await
        .map_err(|join_err| ExecutionError::ExtractionFailed(join_err.to_string()))?
        .map_err(|parse_err| ExecutionError::ExtractionFailed(parse_err.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExecutionError::EmptyOrUnreadable(path.display().to_string()));
    }

    debug!("Extracted {} characters from {}", text.len(), path.display());
    Ok(text)
}

async fn extract_plain(path: &Path) -> Result<String, ExecutionError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|io_err| ExecutionError::ExtractionFailed(io_err.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
