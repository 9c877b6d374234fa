use super::{LoadError, LoadedSource};
use std::path::Path;
use tracing::info;

/// Load source code from a UTF-8 file.
///
/// The file extension becomes the language hint.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedSource, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptySource(path.display().to_string()));
    }

    info!(path = %path.display(), bytes = text.len(), "loaded source file");

    let mut loaded = LoadedSource::new(text, format!("file:{}", path.display()));
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        loaded = loaded.with_language(extension);
    }
    Ok(loaded)
}
