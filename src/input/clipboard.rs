use super::{LoadError, LoadedSource};
use tracing::info;

/// Load source code from the system clipboard.
pub fn load() -> Result<LoadedSource, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    from_text(text)
}

fn from_text(text: String) -> Result<LoadedSource, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptySource("clipboard".to_string()));
    }
    info!(bytes = text.len(), "loaded source from clipboard");
    Ok(LoadedSource::new(text, "clipboard"))
}
